//! Outbound gateway to the backend simulation/scenario API.
//!
//! Kept separate from the stream core: failures here are local to the
//! action that made the call and never disturb the feed connection.

mod client;
mod dto;
mod error;

pub use client::ApiClient;
pub use dto::{EventSubmission, ScenarioResponse, SimulateResponse, TemplatesResponse};
pub use error::ApiError;
