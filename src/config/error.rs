//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Stream URL must use ws:// or wss://")]
    InvalidStreamUrl,

    #[error("Invalid reconnect delay")]
    InvalidReconnectDelay,

    #[error("API base URL must use http:// or https://")]
    InvalidApiBaseUrl,

    #[error("Invalid request timeout")]
    InvalidTimeout,
}
