use std::sync::Arc;

use catalog_core::ProductId;
use catalog_products::Product;

use super::ProductReader;
use crate::store::InMemoryProductStore;

/// Read accessor over an [`InMemoryProductStore`]; results come back in id order.
#[derive(Debug, Clone)]
pub struct ProductReadRepository {
    store: Arc<InMemoryProductStore>,
}

impl ProductReadRepository {
    pub fn new(store: Arc<InMemoryProductStore>) -> Self {
        Self { store }
    }

    fn filtered(&self, keep: impl Fn(&Product) -> bool) -> Vec<Product> {
        self.store
            .read()
            .products
            .values()
            .filter(|p| keep(*p))
            .cloned()
            .collect()
    }
}

impl ProductReader for ProductReadRepository {
    fn get_by_id(&self, id: ProductId) -> Option<Product> {
        self.store.read().products.get(&id).cloned()
    }

    fn get_by_category(&self, category: &str) -> Vec<Product> {
        self.filtered(|p| p.in_category(category))
    }

    fn get_by_price(&self, min: f64, max: f64) -> Vec<Product> {
        self.filtered(|p| p.priced_between(min, max))
    }

    fn get_all(&self) -> Vec<Product> {
        self.filtered(|_| true)
    }
}
