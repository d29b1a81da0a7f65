//! SQL dialect trait for multi-database support

/// SQL dialect trait for generating database-specific SQL
///
/// The listing queries share one shape across backends; only parameter
/// placeholders and the numeric type of aggregates differ.
pub trait SqlDialect: Send + Sync {
    /// Get the dialect name
    fn name(&self) -> &'static str;

    /// Generate a parameter placeholder for the given index (1-based)
    ///
    /// - PostgreSQL: `$1`, `$2`, ...
    /// - SQLite: `?1`, `?2`, ...
    fn placeholder(&self, index: usize) -> String;

    /// Average of a numeric column, decodable as a double
    ///
    /// - PostgreSQL: `avg(col)::float8` (plain `avg` yields NUMERIC)
    /// - SQLite: `avg(col)`
    fn average(&self, col: &str) -> String;
}
