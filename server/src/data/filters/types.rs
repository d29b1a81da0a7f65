//! Filter type definitions

use serde::{Deserialize, Serialize};

use crate::utils::sql::{LIKE_ESCAPE_CHAR, contains_pattern};

/// Optional criteria narrowing a property search
///
/// Every field is independent. A field takes part in the query when it holds
/// a value, so `Some(0)` and `Some("")` are applied like any other value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyFilters {
    /// Substring of the city name
    pub city: Option<String>,
    pub owner_id: Option<i32>,
    /// Inclusive lower bound on `cost_per_night`
    pub minimum_price_per_night: Option<i32>,
    /// Inclusive upper bound on `cost_per_night`
    pub maximum_price_per_night: Option<i32>,
    /// Inclusive lower bound on individual review ratings
    pub minimum_rating: Option<f64>,
}

impl PropertyFilters {
    /// Predicates for the active criteria, in the order they are bound:
    /// city, owner, minimum price, maximum price, minimum rating
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut predicates = Vec::new();

        if let Some(city) = &self.city {
            predicates.push(Predicate::new(
                "city",
                CompareOp::Like,
                contains_pattern(city).into(),
            ));
        }
        if let Some(owner_id) = self.owner_id {
            predicates.push(Predicate::new(
                "owner_id",
                CompareOp::Eq,
                i64::from(owner_id).into(),
            ));
        }
        if let Some(min_price) = self.minimum_price_per_night {
            predicates.push(Predicate::new(
                "cost_per_night",
                CompareOp::Gte,
                i64::from(min_price).into(),
            ));
        }
        if let Some(max_price) = self.maximum_price_per_night {
            predicates.push(Predicate::new(
                "cost_per_night",
                CompareOp::Lte,
                i64::from(max_price).into(),
            ));
        }
        if let Some(min_rating) = self.minimum_rating {
            predicates.push(Predicate::new(
                "property_reviews.rating",
                CompareOp::Gte,
                min_rating.into(),
            ));
        }

        predicates
    }

    /// Number of criteria that hold a value
    pub fn active_count(&self) -> usize {
        self.predicates().len()
    }
}

/// A bound query parameter
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SqlValue {
    Text(String),
    Int(i64),
    Float(f64),
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Comparison operator of a single predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Like,
    Eq,
    Gte,
    Lte,
}

impl CompareOp {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Like => "LIKE",
            Self::Eq => "=",
            Self::Gte => ">=",
            Self::Lte => "<=",
        }
    }
}

/// Boolean keyword joining a predicate to the ones before it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connective {
    Where,
    And,
}

impl Connective {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Where => "WHERE",
            Self::And => "AND",
        }
    }
}

/// One column comparison with its bound value
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub column: &'static str,
    pub op: CompareOp,
    pub value: SqlValue,
}

impl Predicate {
    pub fn new(column: &'static str, op: CompareOp, value: SqlValue) -> Self {
        Self { column, op, value }
    }

    /// Render the comparison against an already formatted placeholder
    pub fn to_sql(&self, placeholder: &str) -> String {
        match self.op {
            CompareOp::Like => format!(
                "{} LIKE {} ESCAPE '{}'",
                self.column, placeholder, LIKE_ESCAPE_CHAR
            ),
            op => format!("{} {} {}", self.column, op.as_sql(), placeholder),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_criteria_no_predicates() {
        assert!(PropertyFilters::default().predicates().is_empty());
        assert_eq!(PropertyFilters::default().active_count(), 0);
    }

    #[test]
    fn test_predicates_follow_fixed_order() {
        let filters = PropertyFilters {
            minimum_rating: Some(4.0),
            city: Some("Vancouver".into()),
            maximum_price_per_night: Some(300),
            owner_id: Some(7),
            minimum_price_per_night: Some(100),
        };

        let columns: Vec<(&str, CompareOp)> = filters
            .predicates()
            .iter()
            .map(|p| (p.column, p.op))
            .collect();

        assert_eq!(
            columns,
            vec![
                ("city", CompareOp::Like),
                ("owner_id", CompareOp::Eq),
                ("cost_per_night", CompareOp::Gte),
                ("cost_per_night", CompareOp::Lte),
                ("property_reviews.rating", CompareOp::Gte),
            ]
        );
    }

    #[test]
    fn test_zero_values_are_present() {
        let filters = PropertyFilters {
            minimum_rating: Some(0.0),
            minimum_price_per_night: Some(0),
            ..Default::default()
        };
        assert_eq!(filters.active_count(), 2);
    }

    #[test]
    fn test_empty_city_is_present() {
        let filters = PropertyFilters {
            city: Some(String::new()),
            ..Default::default()
        };
        let predicates = filters.predicates();
        assert_eq!(predicates.len(), 1);
        assert_eq!(predicates[0].value, SqlValue::Text("%%".into()));
    }

    #[test]
    fn test_city_becomes_substring_pattern() {
        let filters = PropertyFilters {
            city: Some("denver".into()),
            ..Default::default()
        };
        let predicates = filters.predicates();
        assert_eq!(predicates[0].value, SqlValue::Text("%denver%".into()));
    }

    #[test]
    fn test_predicate_to_sql() {
        let like = Predicate::new("city", CompareOp::Like, String::from("%x%").into());
        assert_eq!(like.to_sql("$1"), "city LIKE $1 ESCAPE '\\'");

        let gte = Predicate::new("cost_per_night", CompareOp::Gte, 50i64.into());
        assert_eq!(gte.to_sql("$2"), "cost_per_night >= $2");

        let eq = Predicate::new("owner_id", CompareOp::Eq, 3i64.into());
        assert_eq!(eq.to_sql("?1"), "owner_id = ?1");
    }

    #[test]
    fn test_filters_deserialize_from_options_object() {
        let json = r#"{"city": "Toronto", "minimum_rating": 3.5}"#;
        let filters: PropertyFilters = serde_json::from_str(json).unwrap();

        assert_eq!(filters.city.as_deref(), Some("Toronto"));
        assert_eq!(filters.minimum_rating, Some(3.5));
        assert!(filters.owner_id.is_none());
    }
}
