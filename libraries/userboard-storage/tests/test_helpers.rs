//! Test helpers and fixtures for storage integration tests
//!
//! These helpers create test databases using REAL SQLite files (NOT in-memory)
//! to match production behavior.

#![allow(dead_code)]

use sqlx::SqlitePool;
use tempfile::TempDir;
use userboard_core::{Address, Company, User};

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new, empty test database
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let pool = userboard_storage::create_pool(&db_url)
            .await
            .expect("Failed to create pool");

        Self {
            pool,
            _temp_dir: temp_dir,
        }
    }

    /// Get the pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Test fixture: a fully populated user
pub fn test_user(id: i64, name: &str, email: &str) -> User {
    User {
        id,
        name: name.to_string(),
        username: name.split_whitespace().next().unwrap_or(name).to_string(),
        email: email.to_string(),
        phone: format!("555-01{:02}", id),
        website: "example.org".to_string(),
        address: Some(Address {
            street: Some(format!("{} Main St", id)),
            city: Some("Gwenborough".to_string()),
        }),
        company: Some(Company {
            name: Some("Romaguera-Crona".to_string()),
        }),
    }
}

/// Test fixture: a user without nested address or company
pub fn bare_user(id: i64, name: &str) -> User {
    User {
        address: None,
        company: None,
        ..test_user(id, name, &format!("{}@bare.net", id))
    }
}
