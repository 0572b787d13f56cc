//! Configuration management for the Elidune session shell

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// JSON file backing the persistent session store
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (e.g. ELIDUNE_SESSION_LOGGING__LEVEL)
            .add_source(
                Environment::with_prefix("ELIDUNE_SESSION")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            // Override the store location from ELIDUNE_SESSION_STORE if present
            .set_override_option("storage.path", env::var("ELIDUNE_SESSION_STORE").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(".elidune/session.json"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
