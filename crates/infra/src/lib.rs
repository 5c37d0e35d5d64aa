//! Infrastructure layer: in-memory product storage and its accessors.

pub mod repository;
pub mod store;

pub use repository::{ProductReadRepository, ProductReader, ProductWriteRepository, ProductWriter};
pub use store::InMemoryProductStore;
