//! Property search filters
//!
//! Turns optional search criteria into a parameterized listing query.
//! Criteria become a list of [`Predicate`]s in a fixed order, which the
//! builder folds into a `WHERE ... AND ...` chain with positional parameters.
//!
//! ## Usage
//!
//! ```
//! use lightbnb_server::data::filters::{PropertyFilters, SqlValue, build_property_query};
//!
//! let filters = PropertyFilters {
//!     minimum_price_per_night: Some(50),
//!     maximum_price_per_night: Some(150),
//!     ..Default::default()
//! };
//! let query = build_property_query(&filters, Some(5));
//! assert!(query.sql.contains("WHERE cost_per_night >= $1"));
//! assert!(query.sql.contains("AND cost_per_night <= $2"));
//! assert_eq!(query.params, vec![SqlValue::Int(50), SqlValue::Int(150), SqlValue::Int(5)]);
//! ```

mod builder;
mod types;

pub use builder::{BuiltQuery, build_property_query, build_property_query_for};
pub use types::{CompareOp, Connective, Predicate, PropertyFilters, SqlValue};
