use catalog_core::ProductId;
use catalog_infra::ProductReader;
use catalog_products::Product;

/// Read use case: straight pass-through to the reader.
#[derive(Debug, Clone)]
pub struct ProductRetriever<R> {
    reader: R,
}

impl<R: ProductReader> ProductRetriever<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn get(&self, id: ProductId) -> Option<Product> {
        self.get_by_id(id)
    }

    pub fn get_by_id(&self, id: ProductId) -> Option<Product> {
        self.reader.get_by_id(id)
    }

    pub fn get_by_category(&self, category: &str) -> Vec<Product> {
        self.reader.get_by_category(category)
    }

    pub fn get_by_price(&self, min: f64, max: f64) -> Vec<Product> {
        self.reader.get_by_price(min, max)
    }

    pub fn get_all(&self) -> Vec<Product> {
        self.reader.get_all()
    }
}
