//! Errors surfaced by the dashboard flow.

/// Message shown when a failure carries no usable explanation.
pub const GENERIC_ERROR_MESSAGE: &str = "Unknown error";

/// The request never produced a response (offline, DNS or CORS failure).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Why a submit did not produce a dashboard.
///
/// `Display` is exactly the text shown in the error area.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    /// Network-level failure.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The endpoint answered with a failure status or an `error` field.
    #[error("{}", .message.as_deref().unwrap_or(GENERIC_ERROR_MESSAGE))]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// A success status whose body is not a weather response.
    #[error("{}", GENERIC_ERROR_MESSAGE)]
    Malformed,
}
