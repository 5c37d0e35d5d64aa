//! Business rules applied to a product before it is written.
//!
//! A [`ProductRule`] inspects one product and fails with
//! [`CatalogError::Validation`] when violated. [`ProductValidator`] runs an
//! ordered list of rules and stops at the first failure.

use core::fmt;

use catalog_core::{CatalogError, CatalogResult};

use crate::product::Product;

/// Single business-validation predicate over a product.
pub trait ProductRule: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    fn validate(&self, product: &Product) -> CatalogResult<()>;
}

/// Ad-hoc rules: any matching closure can join a validator.
impl<F> ProductRule for F
where
    F: Fn(&Product) -> CatalogResult<()> + Send + Sync,
{
    fn name(&self) -> &'static str {
        "custom"
    }

    fn validate(&self, product: &Product) -> CatalogResult<()> {
        self(product)
    }
}

/// Fails when the name is empty. Whitespace counts as content.
#[derive(Debug, Default, Clone, Copy)]
pub struct NameNotEmptyRule;

impl ProductRule for NameNotEmptyRule {
    fn name(&self) -> &'static str {
        "name_not_empty"
    }

    fn validate(&self, product: &Product) -> CatalogResult<()> {
        if product.name().is_empty() {
            return Err(CatalogError::validation("product name is required"));
        }
        Ok(())
    }
}

/// Fails unless the price is strictly greater than zero (NaN fails too).
#[derive(Debug, Default, Clone, Copy)]
pub struct PositivePriceRule;

impl ProductRule for PositivePriceRule {
    fn name(&self) -> &'static str {
        "positive_price"
    }

    fn validate(&self, product: &Product) -> CatalogResult<()> {
        let price = product.price();
        // Written as a negated `>` so NaN is rejected.
        if !(price > 0.0) {
            return Err(CatalogError::validation(format!(
                "price must be positive (got {price})"
            )));
        }
        Ok(())
    }
}

/// Ordered composite of rules; short-circuits on the first failure.
#[derive(Default)]
pub struct ProductValidator {
    rules: Vec<Box<dyn ProductRule>>,
}

impl ProductValidator {
    pub fn new(rules: Vec<Box<dyn ProductRule>>) -> Self {
        Self { rules }
    }

    /// Append a rule; it runs after every rule already present.
    pub fn with_rule(mut self, rule: impl ProductRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn validate(&self, product: &Product) -> CatalogResult<()> {
        for rule in &self.rules {
            if let Err(e) = rule.validate(product) {
                tracing::debug!(rule = rule.name(), error = %e, "product rule rejected");
                return Err(e);
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ProductValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductValidator")
            .field("rules", &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>())
            .finish()
    }
}
