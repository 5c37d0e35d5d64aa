use std::sync::Arc;

use catalog_core::{CatalogResult, Entity, ProductId};
use catalog_products::Product;

use super::ProductWriter;
use crate::store::InMemoryProductStore;

/// Write accessor over an [`InMemoryProductStore`].
///
/// The only component that mints product ids.
#[derive(Debug, Clone)]
pub struct ProductWriteRepository {
    store: Arc<InMemoryProductStore>,
}

impl ProductWriteRepository {
    pub fn new(store: Arc<InMemoryProductStore>) -> Self {
        Self { store }
    }
}

impl ProductWriter for ProductWriteRepository {
    fn add(&self, product: Product) -> CatalogResult<Product> {
        let product = self.store.insert_new(product)?;
        tracing::debug!(product_id = ?product.id(), "product stored");
        Ok(product)
    }

    fn update(&self, product: Product) -> bool {
        match product.id() {
            Some(id) => self.store.replace(id, product),
            None => false,
        }
    }

    fn delete(&self, id: ProductId) -> bool {
        self.store.remove(id)
    }
}
