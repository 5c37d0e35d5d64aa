//! Use-case objects, each composing only the capabilities its operation needs.

mod creator;
mod deleter;
mod retriever;
mod updater;

pub use creator::ProductCreator;
pub use deleter::ProductDeleter;
pub use retriever::ProductRetriever;
pub use updater::ProductUpdater;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use catalog_infra::{InMemoryProductStore, ProductReadRepository, ProductWriteRepository};
    use catalog_products::{NameNotEmptyRule, PositivePriceRule, ProductDraft, ProductValidator};

    pub struct Fixture {
        pub store: Arc<InMemoryProductStore>,
        pub reader: ProductReadRepository,
        pub writer: ProductWriteRepository,
        pub validator: Arc<ProductValidator>,
    }

    pub fn fixture() -> Fixture {
        let store = Arc::new(InMemoryProductStore::new());
        Fixture {
            reader: ProductReadRepository::new(Arc::clone(&store)),
            writer: ProductWriteRepository::new(Arc::clone(&store)),
            validator: Arc::new(
                ProductValidator::default()
                    .with_rule(NameNotEmptyRule)
                    .with_rule(PositivePriceRule),
            ),
            store,
        }
    }

    pub fn pen() -> ProductDraft {
        ProductDraft::new("Pen", 1.50)
            .with_description("blue ink")
            .with_category("stationery")
    }
}
