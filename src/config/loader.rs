use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Upper bound for `tick_rate_ms`; slower loops feel frozen.
pub const MAX_TICK_RATE_MS: u64 = 10_000;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/textsheet/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("textsheet").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing default file is not an error: `Config::default()` is used.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// `tick_rate_ms` must be in `1..=MAX_TICK_RATE_MS`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tick = self.defaults.tick_rate_ms;
        if tick == 0 || tick > MAX_TICK_RATE_MS {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "tick_rate_ms must be between 1 and {}, got {}",
                    MAX_TICK_RATE_MS, tick
                ),
            });
        }

        Ok(())
    }
}
