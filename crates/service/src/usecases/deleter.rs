use catalog_core::ProductId;
use catalog_infra::ProductWriter;

/// Delete use case. Absence is reported as `false`, never as an error.
#[derive(Debug, Clone)]
pub struct ProductDeleter<W> {
    writer: W,
}

impl<W: ProductWriter> ProductDeleter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn delete(&self, id: ProductId) -> bool {
        let deleted = self.writer.delete(id);
        if deleted {
            tracing::info!(product_id = %id, "product deleted");
        } else {
            tracing::debug!(product_id = %id, "delete skipped: product not found");
        }
        deleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{fixture, pen};
    use catalog_infra::ProductReader;
    use catalog_products::Product;

    #[test]
    fn deletes_once() {
        let fx = fixture();
        fx.writer.add(Product::new(pen())).unwrap();
        let deleter = ProductDeleter::new(fx.writer.clone());

        assert!(deleter.delete(ProductId::new(1)));
        assert_eq!(fx.reader.get_by_id(ProductId::new(1)), None);
        assert!(!deleter.delete(ProductId::new(1)));
    }

    #[test]
    fn missing_id_leaves_store_alone() {
        let fx = fixture();
        fx.writer.add(Product::new(pen())).unwrap();
        let deleter = ProductDeleter::new(fx.writer.clone());

        assert!(!deleter.delete(ProductId::new(99)));
        assert_eq!(fx.store.len(), 1);
    }
}
