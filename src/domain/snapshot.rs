//! Read-only state snapshot published to the presentation layer.

use serde::Serialize;

use super::alert::AlertSummary;
use super::event::Event;
use super::stats::Stats;

/// Immutable view of the synchronization core, refreshed after every
/// processed frame and every connection-phase transition.
///
/// Consumers hold and render snapshots; only the stream driver mutates the
/// underlying state. Sequences are newest-first, matching the buffers.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub events: Vec<Event>,
    pub alerts: Vec<AlertSummary>,
    pub stats: Stats,
    pub is_connected: bool,
    pub active_scenario: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_snapshot_is_empty_and_disconnected() {
        let snapshot = DashboardSnapshot::default();
        assert!(snapshot.events.is_empty());
        assert!(snapshot.alerts.is_empty());
        assert_eq!(snapshot.stats, Stats::default());
        assert!(!snapshot.is_connected);
        assert!(snapshot.active_scenario.is_none());
    }

    #[test]
    fn snapshot_serializes_with_camel_case_keys() {
        let snapshot = DashboardSnapshot {
            is_connected: true,
            active_scenario: Some("incident".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains(r#""isConnected":true"#));
        assert!(json.contains(r#""activeScenario":"incident""#));
    }
}
