//! The `users` table: wholesale overwrite and full reload

use crate::StorageError;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::{debug, info};
use userboard_core::{User, UserRow};

type Result<T> = std::result::Result<T, StorageError>;

const DROP_TABLE: &str = "DROP TABLE IF EXISTS users";

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY,
    name TEXT,
    username TEXT,
    email TEXT,
    phone TEXT,
    website TEXT,
    city TEXT,
    street TEXT,
    company_name TEXT
)";

const INSERT_USER: &str = "INSERT OR REPLACE INTO users
    (id, name, username, email, phone, website, city, street, company_name)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)";

/// Replace the whole table with `users`
///
/// Drops and recreates the table, then inserts every record, all inside one
/// transaction. A repeated id keeps the last record carrying it.
///
/// # Returns
///
/// The number of rows in the table after the overwrite
pub async fn replace_all(pool: &SqlitePool, users: &[User]) -> Result<u64> {
    let mut tx = pool.begin().await?;

    sqlx::query(DROP_TABLE).execute(&mut *tx).await?;
    sqlx::query(CREATE_TABLE).execute(&mut *tx).await?;

    for user in users {
        let row = UserRow::from(user);
        sqlx::query(INSERT_USER)
            .bind(row.id)
            .bind(&row.name)
            .bind(&row.username)
            .bind(&row.email)
            .bind(&row.phone)
            .bind(&row.website)
            .bind(&row.city)
            .bind(&row.street)
            .bind(&row.company_name)
            .execute(&mut *tx)
            .await?;
    }

    let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&mut *tx)
        .await?;

    tx.commit().await?;

    info!(fetched = users.len(), stored, "Users table overwritten");

    Ok(stored as u64)
}

/// Reload every row, ordered by id
///
/// Returns an empty list when the table has never been written.
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<UserRow>> {
    if !table_exists(pool).await? {
        debug!("Users table missing, nothing to reload");
        return Ok(Vec::new());
    }

    let rows = sqlx::query(
        "SELECT id, name, username, email, phone, website, city, street, company_name
         FROM users ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    let users = rows.iter().map(row_to_user).collect::<Result<Vec<_>>>()?;
    debug!(rows = users.len(), "Users table reloaded");

    Ok(users)
}

/// Number of rows in the table (0 when it does not exist)
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    if !table_exists(pool).await? {
        return Ok(0);
    }

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

async fn table_exists(pool: &SqlitePool) -> Result<bool> {
    let found: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'users'",
    )
    .fetch_one(pool)
    .await?;

    Ok(found > 0)
}

fn row_to_user(row: &SqliteRow) -> Result<UserRow> {
    let id: i64 = row.try_get("id")?;
    let required = |column: &str| -> Result<String> {
        row.try_get::<Option<String>, _>(column)?
            .ok_or_else(|| StorageError::invalid_row(id, format!("{} is NULL", column)))
    };

    Ok(UserRow {
        id,
        name: required("name")?,
        username: required("username")?,
        email: required("email")?,
        phone: required("phone")?,
        website: required("website")?,
        city: row.try_get("city")?,
        street: row.try_get("street")?,
        company_name: row.try_get("company_name")?,
    })
}
