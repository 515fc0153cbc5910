//! Runtime configuration.
//!
//! Defaults can be overridden from the environment:
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `ORDER_LEDGER_FILE` | [`orders_file`](LedgerConfig::orders_file) | `orders.json` |
//! | `ORDER_LEDGER_CHANNEL_CAPACITY` | [`channel_capacity`](LedgerConfig::channel_capacity) | `32` |
//! | `ORDER_LEDGER_LOG` | [`log_filter`](LedgerConfig::log_filter) | `info` |

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

pub const ENV_FILE: &str = "ORDER_LEDGER_FILE";
pub const ENV_CHANNEL_CAPACITY: &str = "ORDER_LEDGER_CHANNEL_CAPACITY";
pub const ENV_LOG: &str = "ORDER_LEDGER_LOG";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got '{value}'")]
    InvalidCapacity { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// JSON export to load at startup.
    pub orders_file: PathBuf,
    /// Capacity of the request channel in front of the ledger actor.
    pub channel_capacity: usize,
    /// Filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            orders_file: PathBuf::from("orders.json"),
            channel_capacity: 32,
            log_filter: "info".to_string(),
        }
    }
}

impl LedgerConfig {
    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(file) = lookup(ENV_FILE) {
            config.orders_file = PathBuf::from(file);
        }
        if let Some(raw) = lookup(ENV_CHANNEL_CAPACITY) {
            config.channel_capacity = match raw.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => capacity,
                _ => {
                    return Err(ConfigError::InvalidCapacity {
                        var: ENV_CHANNEL_CAPACITY,
                        value: raw,
                    })
                }
            };
        }
        if let Some(filter) = lookup(ENV_LOG) {
            config.log_filter = filter;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = LedgerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, LedgerConfig::default());
        assert_eq!(config.orders_file, PathBuf::from("orders.json"));
    }

    #[test]
    fn environment_overrides() {
        let config = LedgerConfig::from_lookup(lookup(&[
            (ENV_FILE, "book1.json"),
            (ENV_CHANNEL_CAPACITY, "8"),
            (ENV_LOG, "debug"),
        ]))
        .unwrap();
        assert_eq!(config.orders_file, PathBuf::from("book1.json"));
        assert_eq!(config.channel_capacity, 8);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn rejects_bad_capacity() {
        for bad in ["0", "-1", "lots"] {
            let err = LedgerConfig::from_lookup(lookup(&[(ENV_CHANNEL_CAPACITY, bad)])).unwrap_err();
            assert_eq!(
                err,
                ConfigError::InvalidCapacity {
                    var: ENV_CHANNEL_CAPACITY,
                    value: bad.to_string()
                }
            );
        }
    }

    #[test]
    fn partial_document_keeps_defaults() {
        let config: LedgerConfig =
            serde_json::from_str(r#"{ "orders_file": "march.json" }"#).unwrap();
        assert_eq!(config.orders_file, PathBuf::from("march.json"));
        assert_eq!(config.channel_capacity, 32);
    }
}
