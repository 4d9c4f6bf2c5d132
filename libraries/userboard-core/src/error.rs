/// Core error types for Userboard
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Userboard
#[derive(Error, Debug)]
pub enum CoreError {
    /// A record did not match the expected upstream shape
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Create an invalid record error
    pub fn invalid_record(msg: impl Into<String>) -> Self {
        Self::InvalidRecord(msg.into())
    }
}
