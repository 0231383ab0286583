use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable that overrides `api.base_url`.
pub const BASE_URL_ENV: &str = "PLATE_FINDER_API_URL";

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

/// Values that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    /// From `--base-url`.
    pub base_url: Option<String>,
    /// From the `PLATE_FINDER_API_URL` environment variable.
    pub env_base_url: Option<String>,
    /// From `--log-file`.
    pub log_file: Option<PathBuf>,
}

impl ConfigOverrides {
    /// Reads the environment-provided overrides.
    pub fn from_env() -> Self {
        Self {
            env_base_url: std::env::var(BASE_URL_ENV)
                .ok()
                .filter(|value| !value.trim().is_empty()),
            ..Self::default()
        }
    }
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/plate-finder/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("plate-finder").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing default file is not an error and yields `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Loads configuration from an explicitly chosen `path`.
    ///
    /// The file must exist. Values are parsed but not validated: a bad
    /// value may still be replaced by an override, so validation happens
    /// once in [`Config::with_overrides`].
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Applies CLI and environment overrides, then re-validates.
    ///
    /// Base URL precedence: `--base-url`, then the environment, then the
    /// file value (which itself defaults to `http://localhost:8000`).
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        if let Some(base_url) = overrides
            .base_url
            .as_ref()
            .or(overrides.env_base_url.as_ref())
        {
            self.api.base_url = base_url.trim().to_string();
        }
        if let Some(file) = &overrides.log_file {
            self.logging.file = Some(file.clone());
        }
        self.api.base_url = self.api.base_url.trim_end_matches('/').to_string();

        self.validate()?;
        Ok(self)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The base URL is an absolute http(s) URL
    /// - The UI tick rate is non-zero
    /// - The map span is a positive number
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = reqwest::Url::parse(&self.api.base_url).map_err(|e| {
            ConfigError::ValidationError {
                message: format!("Invalid base URL '{}': {}", self.api.base_url, e),
            }
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Base URL '{}' must use http or https",
                    self.api.base_url
                ),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        if !(self.ui.map_span_degrees.is_finite() && self.ui.map_span_degrees > 0.0) {
            return Err(ConfigError::ValidationError {
                message: "ui.map_span_degrees must be a positive number".to_string(),
            });
        }

        Ok(())
    }
}
