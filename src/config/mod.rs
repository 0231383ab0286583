//! Configuration: TOML file, environment and CLI overrides.

mod loader;
mod types;

pub use loader::{ConfigError, ConfigOverrides, BASE_URL_ENV};
pub use types::{ApiConfig, Config, LoggingConfig, UiConfig, DEFAULT_BASE_URL};
