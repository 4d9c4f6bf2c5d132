//! Error types for the users client.

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while fetching users.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Upstream is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),

    /// The fixed deadline expired
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Invalid endpoint URL
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse the response body
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl ClientError {
    /// Whether this is a network/HTTP failure.
    ///
    /// These are the failures the dashboard reports to the viewer; decode
    /// and configuration errors are faults.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            Self::Request(_)
                | Self::ServerError { .. }
                | Self::ServerUnreachable(_)
                | Self::Timeout(_)
        )
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
