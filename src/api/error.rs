//! Error types for the outbound API gateway.

use thiserror::Error;

/// Errors surfaced by submission and scenario calls.
///
/// These are local to the action that triggered them: the caller shows a
/// transient failure and moves on. No retry, and no effect on the stream
/// core.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server rejected the request with status {status}: {message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    /// HTTP status of a rejection, if this was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(_) => None,
        }
    }
}
