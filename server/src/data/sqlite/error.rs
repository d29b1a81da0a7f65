//! SQLite error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SqliteError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl SqliteError {
    /// Map a failed insert, turning unique-constraint violations into `Conflict`
    pub fn from_insert(e: sqlx::Error, conflict: impl FnOnce() -> String) -> Self {
        match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => Self::Conflict(conflict()),
            e => Self::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_error_display() {
        let err = SqliteError::Conflict("email already registered".to_string());
        assert_eq!(err.to_string(), "Conflict: email already registered");
    }

    #[test]
    fn test_from_insert_passes_other_errors_through() {
        let err = SqliteError::from_insert(sqlx::Error::RowNotFound, || "dup".to_string());
        assert!(matches!(err, SqliteError::Database(sqlx::Error::RowNotFound)));
    }
}
