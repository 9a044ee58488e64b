use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

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
    /// Uses `~/.config/folio/config.toml` on Unix/macOS, or the equivalent
    /// via `dirs::config_dir()`. Falls back to the current directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("folio").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_required(path)
    }

    /// Loads configuration from a path the user named explicitly.
    ///
    /// Unlike [`Config::load_from`], a missing file is a `ReadError`.
    pub fn load_required(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Animation and auto-advance durations are non-zero
    /// - The tick interval is non-zero and no longer than the animation
    /// - The embed URL template contains `{id}`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.carousel.animation_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "carousel.animation_ms must be greater than zero".to_string(),
            });
        }

        if self.carousel.auto_advance_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "carousel.auto_advance_ms must be greater than zero".to_string(),
            });
        }

        if self.ui.tick_ms == 0 || self.ui.tick_ms > self.carousel.animation_ms {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "ui.tick_ms must be between 1 and carousel.animation_ms ({})",
                    self.carousel.animation_ms
                ),
            });
        }

        if !self.demo.embed_url_template.contains("{id}") {
            return Err(ConfigError::ValidationError {
                message: "demo.embed_url_template must contain '{id}'".to_string(),
            });
        }

        Ok(())
    }
}
