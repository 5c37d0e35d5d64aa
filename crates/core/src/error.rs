//! Catalog error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the catalog layers.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// Only deterministic business failures live here. Reads and deletes report a
/// missing product through `Option`/`bool` instead of `NotFound`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A product's field values broke a business rule.
    #[error("validation failed: {0}")]
    Validation(String),

    /// An update targeted an identifier that is not in the store.
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// The id counter has handed out its last value.
    #[error("product id space exhausted")]
    IdsExhausted,
}

impl CatalogError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(id: ProductId) -> Self {
        Self::NotFound(id)
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_human_readable() {
        let err = CatalogError::validation("name is required");
        assert_eq!(err.to_string(), "validation failed: name is required");

        let err = CatalogError::not_found(ProductId::new(7));
        assert_eq!(err.to_string(), "product 7 not found");

        assert_eq!(CatalogError::IdsExhausted.to_string(), "product id space exhausted");
    }

    #[test]
    fn kind_predicates() {
        assert!(CatalogError::validation("x").is_validation());
        assert!(!CatalogError::validation("x").is_not_found());
        assert!(CatalogError::not_found(ProductId::new(1)).is_not_found());
    }
}
