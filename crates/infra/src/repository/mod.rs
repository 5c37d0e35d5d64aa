//! Accessor pair over the shared product store.
//!
//! The read side never mutates. The write side is the only mutator and the
//! only place product ids are minted.

mod read;
mod write;

use std::sync::Arc;

use catalog_core::{CatalogResult, ProductId};
use catalog_products::Product;

pub use read::ProductReadRepository;
pub use write::ProductWriteRepository;

/// Read-only queries over the catalog. Results are owned copies.
pub trait ProductReader: Send + Sync {
    fn get_by_id(&self, id: ProductId) -> Option<Product>;

    /// Products whose category equals `category`; uncategorized ones never match.
    fn get_by_category(&self, category: &str) -> Vec<Product>;

    /// Products with `min <= price <= max`.
    fn get_by_price(&self, min: f64, max: f64) -> Vec<Product>;

    fn get_all(&self) -> Vec<Product>;
}

/// Mutating side of the catalog.
pub trait ProductWriter: Send + Sync {
    /// Assign the next sequential id, store the product, and return it.
    ///
    /// Fails with `IdsExhausted` once the id counter has no value left.
    fn add(&self, product: Product) -> CatalogResult<Product>;

    /// Overwrite the entry with the product's id. `false` when the id is unset
    /// or not stored; the store is left unchanged in that case.
    fn update(&self, product: Product) -> bool;

    fn delete(&self, id: ProductId) -> bool;
}

impl<S> ProductReader for Arc<S>
where
    S: ProductReader + ?Sized,
{
    fn get_by_id(&self, id: ProductId) -> Option<Product> {
        (**self).get_by_id(id)
    }

    fn get_by_category(&self, category: &str) -> Vec<Product> {
        (**self).get_by_category(category)
    }

    fn get_by_price(&self, min: f64, max: f64) -> Vec<Product> {
        (**self).get_by_price(min, max)
    }

    fn get_all(&self) -> Vec<Product> {
        (**self).get_all()
    }
}

impl<S> ProductWriter for Arc<S>
where
    S: ProductWriter + ?Sized,
{
    fn add(&self, product: Product) -> CatalogResult<Product> {
        (**self).add(product)
    }

    fn update(&self, product: Product) -> bool {
        (**self).update(product)
    }

    fn delete(&self, id: ProductId) -> bool {
        (**self).delete(id)
    }
}
