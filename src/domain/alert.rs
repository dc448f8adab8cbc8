//! Periodic AI health summaries delivered over the feed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One AI-generated assessment of system health over a summarized window.
///
/// Numeric fields default to zero so a partially populated summary still
/// renders; the summarizer upstream does not guarantee every field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertSummary {
    #[serde(default)]
    pub health_status: HealthStatus,

    /// Total events observed in the summarized window (not session totals).
    #[serde(default)]
    pub total_events: u64,

    #[serde(default)]
    pub critical_count: u64,

    #[serde(default)]
    pub error_count: u64,

    #[serde(default)]
    pub warning_count: u64,

    #[serde(default)]
    pub error_rate_percent: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_trend: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_error_source: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_end: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_insight: Option<AiInsight>,
}

impl AlertSummary {
    /// Error rate formatted for display, two decimal places.
    pub fn error_rate_display(&self) -> String {
        format!("{:.2}%", self.error_rate_percent)
    }
}

/// Free-text insight attached by the AI layer, optional end to end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiInsight {
    #[serde(default)]
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insight: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

/// Categorical AI-derived health assessment.
///
/// Wire values are upper-case; anything outside the known set maps to
/// `Unknown` instead of failing the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE", from = "String")]
pub enum HealthStatus {
    Healthy,
    Warning,
    Degraded,
    Critical,
    #[default]
    Unknown,
}

impl From<String> for HealthStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "HEALTHY" => HealthStatus::Healthy,
            "WARNING" => HealthStatus::Warning,
            "DEGRADED" => HealthStatus::Degraded,
            "CRITICAL" => HealthStatus::Critical,
            _ => HealthStatus::Unknown,
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HealthStatus::Healthy => "HEALTHY",
            HealthStatus::Warning => "WARNING",
            HealthStatus::Degraded => "DEGRADED",
            HealthStatus::Critical => "CRITICAL",
            HealthStatus::Unknown => "UNKNOWN",
        };
        write!(f, "{}", s)
    }
}
