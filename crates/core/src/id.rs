//! Strongly-typed product identifier.

use serde::{Deserialize, Serialize};

/// First identifier handed out by a freshly created store.
pub const DEFAULT_ID_SEED: u64 = 1;

/// Identifier of a persisted product.
///
/// Sequential and never reused: the store's counter only moves forward,
/// even after deletions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    /// The identifier minted right after this one; `None` past `u64::MAX`.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self(DEFAULT_ID_SEED)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<ProductId> for u64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_seed() {
        assert_eq!(ProductId::default(), ProductId::new(DEFAULT_ID_SEED));
    }

    #[test]
    fn next_is_successor() {
        assert_eq!(ProductId::new(41).next(), Some(ProductId::new(42)));
    }

    #[test]
    fn next_stops_at_the_last_value() {
        assert_eq!(ProductId::new(u64::MAX).next(), None);
        assert_eq!(ProductId::new(u64::MAX - 1).next(), Some(ProductId::new(u64::MAX)));
    }

    #[test]
    fn ordering_follows_value() {
        assert!(ProductId::new(2) < ProductId::new(10));
        assert_eq!(ProductId::from(5u64).to_string(), "5");
    }
}
