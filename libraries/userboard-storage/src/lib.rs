//! Userboard Storage
//!
//! `SQLite` persistence for the users table.
//!
//! The table has no lifecycle of its own: every run drops it, recreates it
//! and fills it from the latest fetch. There are no migrations.
//!
//! # Example
//!
//! ```rust,no_run
//! use userboard_storage::{create_pool, users};
//!
//! # async fn example(fetched: Vec<userboard_core::User>) -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://users.db").await?;
//!
//! // Overwrite the table with the latest records
//! let stored = users::replace_all(&pool, &fetched).await?;
//!
//! // Reload the whole table
//! let rows = users::get_all(&pool).await?;
//! assert_eq!(rows.len() as u64, stored);
//! # Ok(())
//! # }
//! ```

mod error;

pub mod users;

pub use error::StorageError;

use sqlx::sqlite::SqlitePool;
use tracing::debug;

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://users.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    debug!(url = %database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| StorageError::Connection(e.to_string()))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    // A single connection: runs are sequential and in-memory URLs must see
    // the same database on every query.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

    debug!("SQLite pool ready");

    Ok(pool)
}
