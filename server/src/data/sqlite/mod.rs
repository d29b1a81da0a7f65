//! SQLite database service
//!
//! Embedded listing store for local use and tests. WAL mode keeps reads
//! available while a write is in progress. For shared deployments use
//! PostgreSQL instead.

pub mod error;
pub mod repositories;
mod repository_impl;
pub mod schema;

pub use error::SqliteError;
pub use sqlx::SqlitePool;

use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

use crate::core::config::SqliteConfig;
use crate::core::constants::{SQLITE_BUSY_TIMEOUT_SECS, SQLITE_MAX_CONNECTIONS};
use crate::utils::file::ensure_parent_dir;

/// SQLite database service
///
/// Owns the connection pool. Created once at startup and handed to callers
/// through `ListingService`.
pub struct SqliteService {
    pool: SqlitePool,
}

impl SqliteService {
    /// Open (creating if missing) the database file from configuration
    pub async fn init(config: &SqliteConfig) -> Result<Self, SqliteError> {
        ensure_parent_dir(&config.path)?;

        let options = SqliteConnectOptions::new()
            .filename(&config.path)
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(SQLITE_BUSY_TIMEOUT_SECS));

        let pool = SqlitePoolOptions::new()
            .max_connections(SQLITE_MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        tracing::debug!(path = %config.path.display(), "SqliteService initialized");
        Ok(Self { pool })
    }

    /// Open a private in-memory database with the schema applied
    pub async fn in_memory() -> Result<Self, SqliteError> {
        let pool = SqlitePool::connect(":memory:").await?;
        let service = Self { pool };
        service.init_schema().await?;
        Ok(service)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Apply the schema (idempotent)
    pub async fn init_schema(&self) -> Result<(), SqliteError> {
        sqlx::raw_sql(schema::SCHEMA).execute(&self.pool).await?;
        tracing::debug!("SQLite schema applied");
        Ok(())
    }

    /// Close the connection pool gracefully
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::debug!("SQLite pool closed");
    }
}
