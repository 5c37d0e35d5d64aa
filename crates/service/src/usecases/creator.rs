use std::sync::Arc;

use catalog_core::{CatalogResult, Entity};
use catalog_infra::ProductWriter;
use catalog_products::{Product, ProductDraft, ProductValidator};

/// Create use case: validate first, then hand the product to the writer.
///
/// The writer is never called for a product that fails validation, so a
/// rejected create leaves both the map and the id counter untouched. Once the
/// counter is exhausted every create fails with `IdsExhausted`.
#[derive(Debug, Clone)]
pub struct ProductCreator<W> {
    writer: W,
    validator: Arc<ProductValidator>,
}

impl<W: ProductWriter> ProductCreator<W> {
    pub fn new(writer: W, validator: Arc<ProductValidator>) -> Self {
        Self { writer, validator }
    }

    pub fn create(&self, draft: ProductDraft) -> CatalogResult<Product> {
        let product = Product::new(draft);
        if let Err(e) = self.validator.validate(&product) {
            tracing::warn!(error = %e, "product creation rejected");
            return Err(e);
        }

        let product = self.writer.add(product).inspect_err(|e| {
            tracing::warn!(error = %e, "product creation failed in storage");
        })?;
        tracing::info!(product_id = ?product.id(), name = product.name(), "product created");
        Ok(product)
    }
}
