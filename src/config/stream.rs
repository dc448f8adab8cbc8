//! Event feed stream configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Configuration for the persistent feed connection
#[derive(Debug, Clone, Deserialize)]
pub struct StreamConfig {
    /// WebSocket address of the live event feed
    #[serde(default = "default_url")]
    pub url: String,

    /// Fixed delay between reconnect attempts, in seconds
    #[serde(default = "default_reconnect_delay")]
    pub reconnect_delay_secs: u64,
}

impl StreamConfig {
    /// Get the reconnect delay as a Duration
    pub fn reconnect_delay(&self) -> Duration {
        Duration::from_secs(self.reconnect_delay_secs)
    }

    /// Validate stream configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.url.starts_with("ws://") && !self.url.starts_with("wss://") {
            return Err(ValidationError::InvalidStreamUrl);
        }
        if self.reconnect_delay_secs == 0 || self.reconnect_delay_secs > 60 {
            return Err(ValidationError::InvalidReconnectDelay);
        }
        Ok(())
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            reconnect_delay_secs: default_reconnect_delay(),
        }
    }
}

fn default_url() -> String {
    "ws://localhost:8000/ws".to_string()
}

fn default_reconnect_delay() -> u64 {
    3
}
