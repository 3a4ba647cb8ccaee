//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Command-line flags are applied on top by `main`.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use roster_db::DbConfig;

/// Roster CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// SQLite database file
    pub database_path: PathBuf,

    /// Maximum pooled connections
    pub max_connections: u32,

    /// Seconds to wait for a free connection
    pub connect_timeout_secs: u64,

    /// Forced color mode; `None` lets the terminal decide
    pub color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_path: PathBuf::from("./roster.db"),
            max_connections: 5,
            connect_timeout_secs: 30,
            color: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through `lookup`, which returns the value of a
    /// variable if it is set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();

        let config = AppConfig {
            database_path: lookup("ROSTER_DATABASE_PATH")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),

            max_connections: lookup("ROSTER_MAX_CONNECTIONS")
                .unwrap_or_else(|| defaults.max_connections.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("ROSTER_MAX_CONNECTIONS".to_string()))?,

            connect_timeout_secs: lookup("ROSTER_CONNECT_TIMEOUT_SECS")
                .unwrap_or_else(|| defaults.connect_timeout_secs.to_string())
                .parse()
                .map_err(|_| {
                    ConfigError::InvalidValue("ROSTER_CONNECT_TIMEOUT_SECS".to_string())
                })?,

            color: match lookup("ROSTER_COLOR") {
                Some(value) => Some(parse_color(&value)?),
                // https://no-color.org: any non-empty value disables color
                None => lookup("NO_COLOR")
                    .filter(|value| !value.is_empty())
                    .map(|_| false),
            },
        };

        if config.max_connections == 0 {
            return Err(ConfigError::InvalidValue("ROSTER_MAX_CONNECTIONS".to_string()));
        }

        Ok(config)
    }

    /// Pool settings for [`roster_db::Database::new`].
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database_path)
            .max_connections(self.max_connections)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
    }
}

fn parse_color(value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "always" => Ok(true),
        "0" | "false" | "no" | "never" => Ok(false),
        _ => Err(ConfigError::InvalidValue("ROSTER_COLOR".to_string())),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
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
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.database_path, PathBuf::from("./roster.db"));
    }

    #[test]
    fn test_env_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("ROSTER_DATABASE_PATH", "/tmp/org.db"),
            ("ROSTER_MAX_CONNECTIONS", "2"),
            ("ROSTER_CONNECT_TIMEOUT_SECS", "7"),
            ("ROSTER_COLOR", "always"),
        ]))
        .unwrap();

        assert_eq!(config.database_path, PathBuf::from("/tmp/org.db"));
        assert_eq!(config.max_connections, 2);
        assert_eq!(config.connect_timeout_secs, 7);
        assert_eq!(config.color, Some(true));

        let db = config.db_config();
        assert_eq!(db.max_connections, 2);
        assert_eq!(db.connect_timeout, Duration::from_secs(7));
    }

    #[test]
    fn test_no_color() {
        let config = AppConfig::from_lookup(lookup(&[("NO_COLOR", "1")])).unwrap();
        assert_eq!(config.color, Some(false));

        let config = AppConfig::from_lookup(lookup(&[("NO_COLOR", "")])).unwrap();
        assert_eq!(config.color, None);

        // ROSTER_COLOR wins over NO_COLOR
        let config =
            AppConfig::from_lookup(lookup(&[("NO_COLOR", "1"), ("ROSTER_COLOR", "true")])).unwrap();
        assert_eq!(config.color, Some(true));
    }

    #[test]
    fn test_invalid_values() {
        let err = AppConfig::from_lookup(lookup(&[("ROSTER_MAX_CONNECTIONS", "many")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for ROSTER_MAX_CONNECTIONS");

        assert!(AppConfig::from_lookup(lookup(&[("ROSTER_MAX_CONNECTIONS", "0")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("ROSTER_CONNECT_TIMEOUT_SECS", "-1")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("ROSTER_COLOR", "sometimes")])).is_err());
    }
}
