//! Real-time stream synchronization core.
//!
//! Owns the persistent WebSocket connection to the event feed, routes
//! inbound frames into the dashboard state, and publishes read-only
//! snapshots. See [`manager::StreamSync`] for the lifecycle entry point.

mod frame;
mod manager;
mod phase;
mod router;

pub use frame::StreamFrame;
pub use manager::StreamSync;
pub use phase::ConnectionPhase;
pub use router::{DashboardState, ALERT_BUFFER_CAPACITY, EVENT_BUFFER_CAPACITY};
