use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Unix socket path; when unset the server binds the Leptos site address
    pub socket: Option<String>,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogConfig {
    /// tracing filter directive (e.g. "info" or "folio=debug")
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Supports the following env vars:
    /// - FOLIO_SOCKET
    /// - FOLIO_LOG_FILTER
    pub fn load() -> Result<Self, AppError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(ConfigDefaults::default()))
            // Merge FOLIO_ prefixed env vars with nested structure
            .merge(Env::prefixed("FOLIO_").split("_"));

        Ok(figment.extract()?)
    }
}

/// Helper struct for default values in figment
#[derive(Debug, Serialize)]
struct ConfigDefaults {
    log: LogConfig,
}

impl Default for ConfigDefaults {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::load().unwrap();
        assert!(config.socket.is_none());
        assert_eq!(config.log.filter, "info");
    }
}
