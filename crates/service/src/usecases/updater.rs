use std::sync::Arc;

use catalog_core::{CatalogError, CatalogResult, ProductId};
use catalog_infra::{ProductReader, ProductWriter};
use catalog_products::{Product, ProductDraft, ProductValidator};

/// Update use case.
///
/// The new field values are applied to a staged copy and validated before
/// anything is written, so a rejected update leaves the stored product as it
/// was.
#[derive(Debug, Clone)]
pub struct ProductUpdater<R, W> {
    reader: R,
    writer: W,
    validator: Arc<ProductValidator>,
}

impl<R, W> ProductUpdater<R, W>
where
    R: ProductReader,
    W: ProductWriter,
{
    pub fn new(reader: R, writer: W, validator: Arc<ProductValidator>) -> Self {
        Self {
            reader,
            writer,
            validator,
        }
    }

    /// Overwrite all four mutable fields of product `id`.
    ///
    /// Fails with `NotFound` when `id` is not stored, `Validation` when the new
    /// values break a rule.
    pub fn update(&self, id: ProductId, draft: ProductDraft) -> CatalogResult<Product> {
        let Some(existing) = self.reader.get_by_id(id) else {
            tracing::warn!(product_id = %id, "update rejected: product not found");
            return Err(CatalogError::not_found(id));
        };

        let staged = existing.with_fields(draft);
        if let Err(e) = self.validator.validate(&staged) {
            tracing::warn!(product_id = %id, error = %e, "update rejected");
            return Err(e);
        }

        if !self.writer.update(staged.clone()) {
            // Deleted between the read and the write.
            return Err(CatalogError::not_found(id));
        }

        tracing::info!(product_id = %id, "product updated");
        Ok(staged)
    }
}
