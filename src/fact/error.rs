//! Error types for fact fetching.
//!
//! Both enums are `Clone + PartialEq` so they can live inside UI state.
//! Lower-level errors are flattened to their message at the boundary.

use thiserror::Error;

/// Message shown to the user for every failure. Details stay in the logs.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went horribly wrong, please try again!";

/// Failures below HTTP status handling: name resolution, connect, timeout, reset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Transport error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else {
            TransportError::Other(err.to_string())
        }
    }
}

/// A failed attempt to obtain a fact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Service answered with something other than 200.
    #[error("Failed fetching cat fact with code: {code}")]
    Status { code: u16 },

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// 200 response whose body has no string `text` field.
    #[error("Malformed fact response: {reason}")]
    Decode { reason: String },
}

impl FetchError {
    /// Short machine-readable kind for log fields.
    pub fn error_type(&self) -> &'static str {
        match self {
            FetchError::Status { .. } => "status",
            FetchError::Transport(TransportError::Connect(_)) => "connect",
            FetchError::Transport(TransportError::Timeout(_)) => "timeout",
            FetchError::Transport(TransportError::Other(_)) => "transport",
            FetchError::Decode { .. } => "decode",
        }
    }
}
