//! Data storage layer
//!
//! - `filters` - Property search query builder
//! - `sql` - Dialect differences between the supported backends
//! - `sqlite` - Embedded store (default, used by tests)
//! - `postgres` - Production store
//! - `types` - Row types shared by both backends
//! - `traits` - Repository trait implemented by each backend
//! - `error` - Unified error type for all backends

pub mod error;
pub mod filters;
pub mod postgres;
pub mod sql;
pub mod sqlite;
pub mod traits;
pub mod types;

pub use postgres::PostgresService;
pub use sqlite::SqliteService;

pub use error::DataError;
pub use filters::{BuiltQuery, PropertyFilters, build_property_query};
pub use traits::ListingRepository;
pub use types::{GuestReservation, NewUser, PropertyListing, PropertyRow, UserRow};

use std::sync::Arc;

use crate::core::config::{DatabaseConfig, StoreBackend};
use sql::Backend;

impl From<StoreBackend> for Backend {
    fn from(backend: StoreBackend) -> Self {
        match backend {
            StoreBackend::Sqlite => Backend::Sqlite,
            StoreBackend::Postgres => Backend::Postgres,
        }
    }
}

/// Listing store service enum
///
/// Wraps the backend-specific service. Services are stored as Arc so the
/// repository handle can be cloned out cheaply.
pub enum ListingService {
    /// SQLite backend (default, embedded)
    Sqlite(Arc<SqliteService>),
    /// PostgreSQL backend
    Postgres(Arc<PostgresService>),
}

impl ListingService {
    /// Connect the backend selected in configuration
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DataError> {
        match config.backend {
            StoreBackend::Sqlite => {
                let service = SqliteService::init(&config.sqlite).await?;
                Ok(Self::Sqlite(Arc::new(service)))
            }
            StoreBackend::Postgres => {
                let pg = config.postgres.as_ref().ok_or_else(|| {
                    DataError::Config("PostgreSQL configuration required".to_string())
                })?;
                let service = PostgresService::init(pg).await?;
                Ok(Self::Postgres(Arc::new(service)))
            }
        }
    }

    /// Apply the schema to the connected store (idempotent)
    pub async fn init_schema(&self) -> Result<(), DataError> {
        match self {
            Self::Sqlite(s) => s.init_schema().await.map_err(Into::into),
            Self::Postgres(p) => p.init_schema().await.map_err(Into::into),
        }
    }

    /// Close the database connection gracefully
    pub async fn close(&self) {
        match self {
            Self::Sqlite(s) => s.close().await,
            Self::Postgres(p) => p.close().await,
        }
    }

    /// Get the backend type
    pub fn backend(&self) -> Backend {
        match self {
            Self::Sqlite(_) => Backend::Sqlite,
            Self::Postgres(_) => Backend::Postgres,
        }
    }

    /// Get the repository trait object for data operations
    pub fn repository(&self) -> Box<dyn ListingRepository + Send + Sync> {
        match self {
            Self::Sqlite(s) => Box::new(Arc::clone(s)),
            Self::Postgres(p) => Box::new(Arc::clone(p)),
        }
    }
}
