//! Property listing query builder
//!
//! Renders [`PropertyFilters`] into SQL with positional placeholders. The
//! first emitted predicate uses `WHERE`, every later one `AND`; placeholder
//! `N` always refers to `params[N - 1]`, with the result limit bound last.

use serde::Serialize;

use crate::core::constants::DEFAULT_RESULT_LIMIT;
use crate::data::sql::{PostgresDialect, SqlDialect};

use super::types::{Connective, PropertyFilters, SqlValue};

/// Query text plus parameters in placeholder order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuiltQuery {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

/// Build the property search query using PostgreSQL placeholders
///
/// A `None` limit falls back to [`DEFAULT_RESULT_LIMIT`].
pub fn build_property_query(filters: &PropertyFilters, limit: Option<i64>) -> BuiltQuery {
    build_property_query_for(&PostgresDialect, filters, limit)
}

/// Build the property search query for a specific dialect
pub fn build_property_query_for(
    dialect: &dyn SqlDialect,
    filters: &PropertyFilters,
    limit: Option<i64>,
) -> BuiltQuery {
    let mut params: Vec<SqlValue> = Vec::new();
    let mut sql = format!(
        "SELECT properties.*, {} AS average_rating\n\
         FROM properties\n\
         JOIN property_reviews ON properties.id = property_reviews.property_id\n",
        dialect.average("property_reviews.rating")
    );

    let mut connective = Connective::Where;
    for predicate in filters.predicates() {
        let clause = predicate.to_sql(&dialect.placeholder(params.len() + 1));
        params.push(predicate.value);
        sql.push_str(connective.as_sql());
        sql.push(' ');
        sql.push_str(&clause);
        sql.push('\n');
        connective = Connective::And;
    }

    params.push(SqlValue::Int(limit.unwrap_or(DEFAULT_RESULT_LIMIT)));
    sql.push_str("GROUP BY properties.id\nORDER BY cost_per_night\nLIMIT ");
    sql.push_str(&dialect.placeholder(params.len()));

    BuiltQuery { sql, params }
}
