//! Products domain module.
//!
//! This crate contains the product record and the business rules applied to it
//! before any write, implemented purely as deterministic domain logic (no IO,
//! no storage).

pub mod product;
pub mod validation;

pub use product::{Product, ProductDraft};
pub use validation::{NameNotEmptyRule, PositivePriceRule, ProductRule, ProductValidator};
