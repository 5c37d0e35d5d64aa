//! Application layer: one use-case object per catalog operation, plus the
//! [`ProductService`] facade that bundles them for callers.
//!
//! ```text
//! caller -> use case -> (validator, when writing) -> repository -> store
//! ```

pub mod config;
pub mod service;
pub mod usecases;

pub use config::{CatalogConfig, ConfigError};
pub use service::{InMemoryProductService, ProductService};
pub use usecases::{ProductCreator, ProductDeleter, ProductRetriever, ProductUpdater};
