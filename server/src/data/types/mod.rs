//! Shared data types for the listing store backends

mod listing;

pub use listing::{GuestReservation, NewUser, PropertyListing, PropertyRow, UserRow};
