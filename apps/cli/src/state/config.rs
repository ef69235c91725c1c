//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (later overrides earlier)
//! 1. Defaults (this file)
//! 2. Config file (`ministore.toml` in the platform config dir, or `--config`)
//! 3. Environment variables (`MINISTORE_*`)
//! 4. Command line flags (`--db`)
//!
//! ```toml
//! # ministore.toml
//! database_path = "/var/lib/ministore/ministore.db"
//! storage_key = "ministore_products"
//! quota_bytes = 5242880
//! currency_symbol = "$"
//! seed_on_empty = true
//! ```
//!
//! Configuration is read-only after startup.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use ministore_core::{DEFAULT_CURRENCY_SYMBOL, DEFAULT_STORAGE_KEY};
use ministore_db::DEFAULT_QUOTA_BYTES;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Config file name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "ministore.toml";

/// Database file name used under the platform data directory.
pub const DATABASE_FILE_NAME: &str = "ministore.db";

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Could not determine the application data directory")]
    NoDataDir,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigState {
    /// SQLite file holding the durable storage.
    /// Default: `ministore.db` in the platform data directory
    pub database_path: Option<PathBuf>,

    /// Durable key the catalog is stored under
    pub storage_key: String,

    /// Storage quota in bytes (browser local storage allows about 5 MiB)
    pub quota_bytes: u64,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Install the sample products whenever the catalog loads empty
    pub seed_on_empty: bool,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            database_path: None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            quota_bytes: DEFAULT_QUOTA_BYTES,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            seed_on_empty: true,
        }
    }
}

impl ConfigState {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// An explicit `config_path` must exist; the default one is optional.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(&path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a config file on top of the defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.is_empty() {
            return Err(ConfigError::Invalid("storage_key must not be empty".into()));
        }

        if self.quota_bytes == 0 {
            return Err(ConfigError::Invalid(
                "quota_bytes must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Applies `MINISTORE_*` environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Applies overrides from any variable source.
    ///
    /// ## Variables
    /// - `MINISTORE_DB_PATH`: Database file path
    /// - `MINISTORE_STORAGE_KEY`: Durable key for the catalog
    /// - `MINISTORE_QUOTA_BYTES`: Storage quota in bytes
    /// - `MINISTORE_CURRENCY_SYMBOL`: Display currency symbol
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup("MINISTORE_DB_PATH") {
            debug!(path = %path, "Overriding database path from environment");
            self.database_path = Some(PathBuf::from(path));
        }

        if let Some(key) = lookup("MINISTORE_STORAGE_KEY") {
            self.storage_key = key;
        }

        if let Some(quota) = lookup("MINISTORE_QUOTA_BYTES") {
            match quota.parse::<u64>() {
                Ok(q) => self.quota_bytes = q,
                Err(_) => warn!(quota = %quota, "Ignoring unparsable MINISTORE_QUOTA_BYTES"),
            }
        }

        if let Some(symbol) = lookup("MINISTORE_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }
    }

    /// Resolves the database file, creating the data directory if needed.
    ///
    /// ## Platform-Specific Paths
    /// - **macOS**: `~/Library/Application Support/com.ministore.ministore/ministore.db`
    /// - **Windows**: `%APPDATA%\ministore\ministore\data\ministore.db`
    /// - **Linux**: `~/.local/share/ministore/ministore.db`
    pub fn resolve_database_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.database_path {
            return Ok(path.clone());
        }

        let dirs = project_dirs().ok_or(ConfigError::NoDataDir)?;
        let data_dir = dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        Ok(data_dir.join(DATABASE_FILE_NAME))
    }

    /// Formats a price with the configured currency symbol.
    pub fn format_price(&self, price: f64) -> String {
        ministore_core::price::format_price(price, &self.currency_symbol)
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "ministore", "ministore")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ConfigState::default();
        assert_eq!(config.storage_key, "ministore_products");
        assert_eq!(config.quota_bytes, 5 * 1024 * 1024);
        assert_eq!(config.format_price(79.99), "$79.99");
        assert!(config.seed_on_empty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config: ConfigState = toml::from_str(
            r#"
            currency_symbol = "€"
            seed_on_empty = false
            "#,
        )
        .unwrap();

        assert_eq!(config.format_price(24.99), "€24.99");
        assert!(!config.seed_on_empty);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("MINISTORE_DB_PATH", "/tmp/shop.db"),
            ("MINISTORE_STORAGE_KEY", "other_key"),
            ("MINISTORE_QUOTA_BYTES", "not-a-number"),
        ]
        .into_iter()
        .collect();

        let mut config = ConfigState::default();
        config.apply_overrides(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.database_path, Some(PathBuf::from("/tmp/shop.db")));
        assert_eq!(config.storage_key, "other_key");
        // Unparsable quota leaves the default alone.
        assert_eq!(config.quota_bytes, DEFAULT_QUOTA_BYTES);
        assert_eq!(
            config.resolve_database_path().unwrap(),
            PathBuf::from("/tmp/shop.db")
        );
    }

    #[test]
    fn test_validate_rejects_empty_key_and_zero_quota() {
        let config = ConfigState {
            storage_key: String::new(),
            ..ConfigState::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = ConfigState {
            quota_bytes: 0,
            ..ConfigState::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = ConfigState::load(Some(PathBuf::from("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
