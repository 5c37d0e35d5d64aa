//! Construction-time configuration.

use serde::Deserialize;
use thiserror::Error;

use catalog_core::DEFAULT_ID_SEED;

/// Environment variable holding the first id the store hands out.
pub const ID_SEED_ENV: &str = "CATALOG_ID_SEED";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid CATALOG_ID_SEED value {value:?}: {reason}")]
    InvalidIdSeed { value: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// First identifier minted by the store.
    pub id_seed: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            id_seed: DEFAULT_ID_SEED,
        }
    }
}

impl CatalogConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the process environment in `from_env`).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let Some(raw) = lookup(ID_SEED_ENV) else {
            tracing::debug!("{ID_SEED_ENV} not set; using default seed {DEFAULT_ID_SEED}");
            return Ok(Self::default());
        };

        let id_seed = raw
            .trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidIdSeed {
                value: raw.clone(),
                reason: e.to_string(),
            })?;
        if id_seed == 0 {
            return Err(ConfigError::InvalidIdSeed {
                value: raw,
                reason: "seed must be at least 1".to_string(),
            });
        }

        Ok(Self { id_seed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            assert_eq!(key, ID_SEED_ENV);
            value.map(String::from)
        }
    }

    #[test]
    fn unset_means_default() {
        assert_eq!(CatalogConfig::from_lookup(lookup(None)), Ok(CatalogConfig::default()));
        assert_eq!(CatalogConfig::default().id_seed, 1);
    }

    #[test]
    fn parses_seed() {
        let config = CatalogConfig::from_lookup(lookup(Some(" 500 "))).unwrap();
        assert_eq!(config.id_seed, 500);
    }

    #[test]
    fn accepts_the_largest_seed() {
        let config = CatalogConfig::from_lookup(lookup(Some("18446744073709551615"))).unwrap();
        assert_eq!(config.id_seed, u64::MAX);
    }

    #[test]
    fn rejects_garbage_and_zero() {
        let err = CatalogConfig::from_lookup(lookup(Some("abc"))).unwrap_err();
        assert!(err.to_string().contains("CATALOG_ID_SEED"));

        let err = CatalogConfig::from_lookup(lookup(Some("0"))).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidIdSeed {
                value: "0".to_string(),
                reason: "seed must be at least 1".to_string(),
            }
        );
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: CatalogConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CatalogConfig::default());

        let config: CatalogConfig = serde_json::from_str(r#"{"id_seed": 10}"#).unwrap();
        assert_eq!(config.id_seed, 10);
    }
}
