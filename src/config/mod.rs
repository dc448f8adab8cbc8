//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `PULSEBOARD_` prefix and nested values use double
//! underscores as separators. Everything has a local-development default,
//! so the client runs with no environment at all.
//!
//! # Example
//!
//! ```no_run
//! use pulseboard::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Feed address: {}", config.stream.url);
//! ```

mod api;
mod error;
mod stream;

pub use api::ApiConfig;
pub use error::{ConfigError, ValidationError};
pub use stream::StreamConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for the Pulseboard client.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Stream configuration (feed address, reconnect delay)
    #[serde(default)]
    pub stream: StreamConfig,

    /// Outbound API configuration (simulation/scenario endpoints)
    #[serde(default)]
    pub api: ApiConfig,

    /// Tracing filter directive
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `PULSEBOARD` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PULSEBOARD__STREAM__URL=wss://feed.example.com/ws` -> `stream.url`
    /// - `PULSEBOARD__API__BASE_URL=https://api.example.com` -> `api.base_url`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PULSEBOARD")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.stream.validate()?;
        self.api.validate()?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            stream: StreamConfig::default(),
            api: ApiConfig::default(),
            log_filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "info,pulseboard=debug".to_string()
}
