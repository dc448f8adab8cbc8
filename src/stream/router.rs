//! Frame routing into the dashboard state.
//!
//! The router is a pure synchronous dispatch over [`DashboardState`]; the
//! stream driver feeds it one frame at a time in strict arrival order, so
//! no locking guards the buffers or counters.

use tracing::{debug, warn};

use crate::domain::{AlertSummary, BoundedBuffer, DashboardSnapshot, Event, Stats};

use super::frame::StreamFrame;

/// Display capacity for the raw event feed.
pub const EVENT_BUFFER_CAPACITY: usize = 50;

/// Display capacity for AI alert summaries.
pub const ALERT_BUFFER_CAPACITY: usize = 10;

/// Mutable state owned by the synchronization core.
///
/// Exposed to consumers only as [`DashboardSnapshot`] clones; nothing
/// outside the stream driver mutates it.
#[derive(Debug)]
pub struct DashboardState {
    events: BoundedBuffer<Event>,
    alerts: BoundedBuffer<AlertSummary>,
    stats: Stats,
    active_scenario: Option<String>,
    connected: bool,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            events: BoundedBuffer::new(EVENT_BUFFER_CAPACITY),
            alerts: BoundedBuffer::new(ALERT_BUFFER_CAPACITY),
            stats: Stats::default(),
            active_scenario: None,
            connected: false,
        }
    }

    /// Routes one raw text frame.
    ///
    /// Returns true if the frame changed state. Malformed frames are logged
    /// and dropped without touching buffers, stats, or connectivity, and
    /// processing of subsequent frames continues.
    pub fn route_text(&mut self, raw: &str) -> bool {
        match StreamFrame::parse(raw) {
            Ok(frame) => self.apply(frame),
            Err(error) => {
                warn!(%error, "dropping malformed feed frame");
                false
            }
        }
    }

    /// Applies one decoded frame. Returns true if state changed.
    pub fn apply(&mut self, frame: StreamFrame) -> bool {
        match frame {
            StreamFrame::EventSent { event } => {
                self.stats.record(&event);
                self.events.push(event);
                true
            }
            StreamFrame::AiAlert { summary } => {
                self.alerts.push(summary);
                true
            }
            StreamFrame::ScenarioStarted { scenario } => {
                if let Some(previous) = &self.active_scenario {
                    // Last-write-wins; the server never queues scenarios.
                    debug!(%previous, %scenario, "scenario started while another was active");
                }
                self.active_scenario = Some(scenario);
                true
            }
            StreamFrame::ScenarioCompleted => {
                self.active_scenario = None;
                true
            }
            StreamFrame::Unknown => {
                debug!("ignoring unrecognized frame type");
                false
            }
        }
    }

    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    /// Clones the current state out for the presentation layer.
    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            events: self.events.to_vec(),
            alerts: self.alerts.to_vec(),
            stats: self.stats,
            is_connected: self.connected,
            active_scenario: self.active_scenario.clone(),
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}
