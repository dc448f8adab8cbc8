//! Event model for the live infrastructure/CI-CD feed.
//!
//! Events arrive shaped like CloudEvents: the producer stamps an id, a
//! reverse-DNS event type, a source URL, and an RFC-3339 timestamp. All
//! fields beyond the event type are optional on the wire so a sparse
//! producer payload still renders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One externally observed occurrence, immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Producer-assigned identifier, absent for some sources.
    #[serde(default)]
    pub id: Option<String>,

    /// Reverse-DNS event type, e.g. `com.github.push`.
    #[serde(rename = "type")]
    pub event_type: String,

    /// Structured source path, e.g. `https://github.com/demo`.
    #[serde(default)]
    pub source: String,

    /// Producer timestamp; arrival order is authoritative when absent.
    #[serde(default)]
    pub time: Option<DateTime<Utc>>,

    #[serde(default)]
    pub subject: String,

    #[serde(default)]
    pub severity: Severity,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,

    /// Free-form producer payload, carried through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// Event severity as a closed set with an explicit unknown fallback.
///
/// The feed treats severity as an open string set; values outside the four
/// known levels are preserved as `Unknown` rather than rejected, so a
/// producer rolling out a new level never breaks the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Severity {
    Critical,
    Error,
    Warning,
    Info,
    #[default]
    Unknown,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Unknown => "unknown",
        }
    }
}

impl From<String> for Severity {
    fn from(value: String) -> Self {
        match value.as_str() {
            "critical" => Severity::Critical,
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            "info" => Severity::Info,
            _ => Severity::Unknown,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
