/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database connection error
    #[error("Database connection error: {0}")]
    Connection(String),

    /// A stored row could not be read back
    #[error("Invalid row {id}: {message}")]
    InvalidRow { id: i64, message: String },

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StorageError {
    /// Create an invalid row error
    pub fn invalid_row(id: i64, message: impl Into<String>) -> Self {
        Self::InvalidRow {
            id,
            message: message.into(),
        }
    }
}
