//! PostgreSQL error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PostgresError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl PostgresError {
    /// Map a failed insert, turning unique-constraint violations into `Conflict`
    pub fn from_insert(e: sqlx::Error, conflict: impl FnOnce() -> String) -> Self {
        match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => Self::Conflict(conflict()),
            e => Self::Database(e),
        }
    }
}
