//! SQLite repositories
//!
//! Row types are imported from `crate::data::types`.

pub mod property;
pub mod reservation;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

pub use property::search_properties;
pub use reservation::list_for_guest as list_guest_reservations;
pub use user::{create_user, get_by_email as get_user_by_email, get_user};
