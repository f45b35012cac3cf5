//! Server configuration
//!
//! Read from Shuttle secrets (`Secrets.toml` locally).
//!
//! - `QUESTIONNAIRE_STORAGE`: `postgres` (default) or `memory`
//! - `RUST_LOG`: tracing filter directive

use std::str::FromStr;

use shuttle_runtime::SecretStore;
use thiserror::Error;

pub const DEFAULT_LOG_FILTER: &str = "info,questionnaire_server=debug,tower_http=debug";

const STORAGE_KEY: &str = "QUESTIONNAIRE_STORAGE";
const LOG_FILTER_KEY: &str = "RUST_LOG";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown storage backend '{0}' (expected 'postgres' or 'memory')")]
    UnknownStorage(String),
}

/// Which repository adapter backs the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    #[default]
    Postgres,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "pg" => Ok(Self::Postgres),
            "memory" | "in-memory" => Ok(Self::Memory),
            other => Err(ConfigError::UnknownStorage(other.to_string())),
        }
    }
}

impl StorageBackend {
    /// One-line summary logged at startup
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Postgres => "Postgres (shared database)",
            Self::Memory => {
                "in-memory - data is lost on restart; the provisioned Postgres database is unused"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage: StorageBackend,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_secrets(secrets: &SecretStore) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| secrets.get(key))
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let storage = match lookup(STORAGE_KEY) {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => StorageBackend::default(),
        };

        let log_filter = lookup(LOG_FILTER_KEY)
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            storage,
            log_filter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.storage, StorageBackend::Postgres);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_memory_storage() {
        let config = config_from(&[("QUESTIONNAIRE_STORAGE", "Memory")]).unwrap();
        assert_eq!(config.storage, StorageBackend::Memory);
    }

    #[test]
    fn test_memory_storage_notes_unused_database() {
        assert!(StorageBackend::Memory
            .describe()
            .contains("Postgres database is unused"));
        assert!(!StorageBackend::Postgres.describe().contains("unused"));
    }

    #[test]
    fn test_unknown_storage_is_rejected() {
        let err = config_from(&[("QUESTIONNAIRE_STORAGE", "mongo")]).unwrap_err();
        assert_eq!(err, ConfigError::UnknownStorage("mongo".to_string()));
    }

    #[test]
    fn test_log_filter_override() {
        let config = config_from(&[("RUST_LOG", "warn")]).unwrap();
        assert_eq!(config.log_filter, "warn");
    }
}
