//! Inbound frame types for the live feed.
//!
//! Every frame is one JSON object with a `type` discriminant and a payload.
//! Unknown discriminants deserialize to [`StreamFrame::Unknown`] instead of
//! failing, so the server can add frame types without breaking deployed
//! clients.

use serde::Deserialize;

use crate::domain::{AlertSummary, Event};

/// One decoded message from the persistent feed connection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamFrame {
    /// A new event was observed; feeds the event buffer and stats.
    EventSent { event: Event },

    /// A periodic AI health summary; feeds the alert buffer.
    AiAlert { summary: AlertSummary },

    /// A named scenario started producing synthetic events.
    ScenarioStarted { scenario: String },

    /// The active scenario finished.
    ScenarioCompleted,

    /// Forward-compatible catch-all for unrecognized discriminants.
    #[serde(other)]
    Unknown,
}

impl StreamFrame {
    /// Parses one raw text frame.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HealthStatus, Severity};

    #[test]
    fn parses_event_sent_frame() {
        let raw = r#"{
            "type": "event_sent",
            "event": {
                "id": "evt-1",
                "type": "com.jenkins.build.failure",
                "source": "https://jenkins.com/demo",
                "subject": "build #42 failed",
                "severity": "error"
            }
        }"#;

        let frame = StreamFrame::parse(raw).unwrap();
        match frame {
            StreamFrame::EventSent { event } => {
                assert_eq!(event.severity, Severity::Error);
                assert_eq!(event.subject, "build #42 failed");
            }
            other => panic!("expected EventSent, got {other:?}"),
        }
    }

    #[test]
    fn parses_ai_alert_frame() {
        let raw = r#"{
            "type": "ai_alert",
            "summary": {
                "health_status": "WARNING",
                "total_events": 120,
                "error_count": 9,
                "error_rate_percent": 7.5
            }
        }"#;

        let frame = StreamFrame::parse(raw).unwrap();
        match frame {
            StreamFrame::AiAlert { summary } => {
                assert_eq!(summary.health_status, HealthStatus::Warning);
                assert_eq!(summary.total_events, 120);
            }
            other => panic!("expected AiAlert, got {other:?}"),
        }
    }

    #[test]
    fn parses_scenario_started_frame() {
        let raw = r#"{"type": "scenario_started", "scenario": "incident", "name": "Production Incident"}"#;
        let frame = StreamFrame::parse(raw).unwrap();
        assert_eq!(
            frame,
            StreamFrame::ScenarioStarted {
                scenario: "incident".to_string()
            }
        );
    }

    #[test]
    fn parses_scenario_completed_frame_with_extra_fields() {
        let raw = r#"{"type": "scenario_completed", "scenario": "incident"}"#;
        let frame = StreamFrame::parse(raw).unwrap();
        assert_eq!(frame, StreamFrame::ScenarioCompleted);
    }

    #[test]
    fn unknown_discriminant_maps_to_unknown() {
        let raw = r#"{"type": "pong"}"#;
        let frame = StreamFrame::parse(raw).unwrap();
        assert_eq!(frame, StreamFrame::Unknown);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(StreamFrame::parse("not json at all").is_err());
    }

    #[test]
    fn event_sent_with_invalid_payload_is_an_error() {
        // event must be an object; a bare string frame is malformed
        let raw = r#"{"type": "event_sent", "event": "oops"}"#;
        assert!(StreamFrame::parse(raw).is_err());
    }

    #[test]
    fn frame_without_discriminant_is_an_error() {
        assert!(StreamFrame::parse(r#"{"event": {}}"#).is_err());
    }
}
