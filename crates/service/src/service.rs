use std::sync::Arc;

use catalog_infra::{
    InMemoryProductStore, ProductReadRepository, ProductReader, ProductWriteRepository,
    ProductWriter,
};
use catalog_products::{NameNotEmptyRule, PositivePriceRule, ProductValidator};

use crate::config::CatalogConfig;
use crate::usecases::{ProductCreator, ProductDeleter, ProductRetriever, ProductUpdater};

/// Service assembled over the in-memory store.
pub type InMemoryProductService = ProductService<ProductReadRepository, ProductWriteRepository>;

/// Single entry point bundling the four use cases. Holds no logic of its own.
#[derive(Debug, Clone)]
pub struct ProductService<R, W> {
    creator: ProductCreator<W>,
    retriever: ProductRetriever<R>,
    updater: ProductUpdater<R, W>,
    deleter: ProductDeleter<W>,
}

impl<R, W> ProductService<R, W>
where
    R: ProductReader,
    W: ProductWriter,
{
    pub fn new(
        creator: ProductCreator<W>,
        retriever: ProductRetriever<R>,
        updater: ProductUpdater<R, W>,
        deleter: ProductDeleter<W>,
    ) -> Self {
        Self {
            creator,
            retriever,
            updater,
            deleter,
        }
    }

    pub fn creator(&self) -> &ProductCreator<W> {
        &self.creator
    }

    pub fn retriever(&self) -> &ProductRetriever<R> {
        &self.retriever
    }

    pub fn updater(&self) -> &ProductUpdater<R, W> {
        &self.updater
    }

    pub fn deleter(&self) -> &ProductDeleter<W> {
        &self.deleter
    }
}

impl InMemoryProductService {
    /// Composition root: one store, both repositories over it, and the
    /// standard rule list (name first, then price).
    pub fn in_memory(config: &CatalogConfig) -> Self {
        let validator = ProductValidator::default()
            .with_rule(NameNotEmptyRule)
            .with_rule(PositivePriceRule);
        Self::in_memory_with(config, validator)
    }

    /// Same as [`in_memory`](Self::in_memory) with a caller-assembled rule list.
    pub fn in_memory_with(config: &CatalogConfig, validator: ProductValidator) -> Self {
        let store = Arc::new(InMemoryProductStore::with_seed(config.id_seed));
        let reader = ProductReadRepository::new(Arc::clone(&store));
        let writer = ProductWriteRepository::new(store);
        let validator = Arc::new(validator);

        tracing::debug!(id_seed = config.id_seed, ?validator, "product service assembled");

        Self::new(
            ProductCreator::new(writer.clone(), Arc::clone(&validator)),
            ProductRetriever::new(reader.clone()),
            ProductUpdater::new(reader, writer.clone(), validator),
            ProductDeleter::new(writer),
        )
    }
}
