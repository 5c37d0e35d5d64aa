//! `catalog-core` — shared building blocks for the product catalog.
//!
//! This crate contains **pure domain** primitives (no storage, no logging setup).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{CatalogError, CatalogResult};
pub use id::{DEFAULT_ID_SEED, ProductId};
