//! User repository for SQLite operations

use sqlx::SqlitePool;

use crate::data::sqlite::SqliteError;
use crate::data::types::{NewUser, UserRow};

/// Insert a user and return the stored row
///
/// A second registration with the same email is a `Conflict`.
pub async fn create_user(pool: &SqlitePool, user: &NewUser) -> Result<UserRow, SqliteError> {
    let row = sqlx::query_as::<_, UserRow>(
        "INSERT INTO users (name, email, password) VALUES (?1, ?2, ?3) RETURNING id, name, email, password",
    )
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.password)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        SqliteError::from_insert(e, || format!("email already registered: {}", user.email))
    })?;

    tracing::debug!(id = row.id, email = %row.email, "User created");
    Ok(row)
}

/// Get a user by ID
pub async fn get_user(pool: &SqlitePool, id: i32) -> Result<Option<UserRow>, SqliteError> {
    let row = sqlx::query_as::<_, UserRow>(
        "SELECT id, name, email, password FROM users WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Get a user by email
pub async fn get_by_email(pool: &SqlitePool, email: &str) -> Result<Option<UserRow>, SqliteError> {
    let row = sqlx::query_as::<_, UserRow>(
        "SELECT id, name, email, password FROM users WHERE email = ?1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}
