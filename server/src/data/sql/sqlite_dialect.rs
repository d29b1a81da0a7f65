//! SQLite SQL dialect implementation

use super::SqlDialect;

/// SQLite SQL dialect
pub struct SqliteDialect;

impl SqlDialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn placeholder(&self, index: usize) -> String {
        // Numbered form keeps the index explicit, same as PostgreSQL
        format!("?{}", index)
    }

    fn average(&self, col: &str) -> String {
        // avg() already returns REAL
        format!("avg({})", col)
    }
}
