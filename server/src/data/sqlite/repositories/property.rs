//! Property repository for SQLite operations

use sqlx::SqlitePool;
use sqlx::sqlite::{Sqlite, SqliteArguments};
use sqlx::query::QueryAs;

use crate::data::filters::{BuiltQuery, PropertyFilters, SqlValue, build_property_query_for};
use crate::data::sql::Backend;
use crate::data::sqlite::SqliteError;
use crate::data::types::PropertyListing;

/// Search properties by the active filters, cheapest first
pub async fn search_properties(
    pool: &SqlitePool,
    filters: &PropertyFilters,
    limit: Option<i64>,
) -> Result<Vec<PropertyListing>, SqliteError> {
    let dialect = Backend::Sqlite.dialect();
    let query = build_property_query_for(dialect, filters, limit);
    tracing::debug!(
        dialect = dialect.name(),
        active_filters = filters.active_count(),
        sql = %query.sql,
        params = ?query.params,
        "Searching properties"
    );

    let rows = bind_params(sqlx::query_as::<_, PropertyListing>(&query.sql), &query)
        .fetch_all(pool)
        .await?;

    tracing::trace!(count = rows.len(), "Property search complete");
    Ok(rows)
}

fn bind_params<'q>(
    mut statement: QueryAs<'q, Sqlite, PropertyListing, SqliteArguments<'q>>,
    query: &'q BuiltQuery,
) -> QueryAs<'q, Sqlite, PropertyListing, SqliteArguments<'q>> {
    for param in &query.params {
        statement = match param {
            SqlValue::Text(value) => statement.bind(value.as_str()),
            SqlValue::Int(value) => statement.bind(*value),
            SqlValue::Float(value) => statement.bind(*value),
        };
    }
    statement
}
