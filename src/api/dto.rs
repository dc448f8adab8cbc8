//! Request and response DTOs for the simulation/scenario API.

use serde::{Deserialize, Serialize};

use crate::domain::Severity;

/// Body for `POST /api/simulate`: one manually authored event.
#[derive(Debug, Clone, Serialize)]
pub struct EventSubmission {
    /// Producer identifier, e.g. `github`, `datadog`, `kubernetes`.
    pub source: String,

    /// Reverse-DNS event type, e.g. `com.github.push`.
    pub event_type: String,

    pub severity: Severity,

    pub subject: String,

    /// Event category, e.g. `cicd`, `infrastructure`, `incident`.
    pub category: String,
}

/// Response from a successful event submission.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulateResponse {
    pub status: String,
    pub event_id: String,
    #[serde(default)]
    pub message: String,
}

/// Response from a successful scenario trigger.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioResponse {
    pub status: String,
    pub scenario: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub message: String,
}

/// Response from `GET /api/templates`: what the backend can simulate.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesResponse {
    #[serde(default)]
    pub sources: Vec<String>,

    /// Per-source event templates, kept free-form.
    #[serde(default)]
    pub templates: serde_json::Value,

    /// Named scenario definitions, kept free-form.
    #[serde(default)]
    pub scenarios: serde_json::Value,
}
