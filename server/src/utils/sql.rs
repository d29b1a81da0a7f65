//! SQL utility functions

/// Escape character used with `LIKE ... ESCAPE` clauses built by this crate
pub const LIKE_ESCAPE_CHAR: char = '\\';

/// Escape SQL LIKE metacharacters (%, _, \) in user input
///
/// ```
/// use lightbnb_server::utils::sql::{escape_like_pattern, contains_pattern};
///
/// assert_eq!(escape_like_pattern("50%_off"), "50\\%\\_off");
/// assert_eq!(contains_pattern("denver"), "%denver%");
/// ```
pub fn escape_like_pattern(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Substring LIKE pattern for user input (`%input%`, metacharacters escaped)
pub fn contains_pattern(s: &str) -> String {
    format!("%{}%", escape_like_pattern(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_pattern_no_special_chars() {
        assert_eq!(escape_like_pattern("Vancouver"), "Vancouver");
    }

    #[test]
    fn test_escape_like_pattern_percent() {
        assert_eq!(escape_like_pattern("100%"), "100\\%");
    }

    #[test]
    fn test_escape_like_pattern_underscore() {
        assert_eq!(escape_like_pattern("port_moody"), "port\\_moody");
    }

    #[test]
    fn test_escape_like_pattern_backslash() {
        assert_eq!(escape_like_pattern("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_contains_pattern() {
        assert_eq!(contains_pattern("denver"), "%denver%");
        assert_eq!(contains_pattern(""), "%%");
        assert_eq!(contains_pattern("st_john"), "%st\\_john%");
    }
}
