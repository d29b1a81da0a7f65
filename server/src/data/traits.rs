//! Repository trait for listing store backends
//!
//! SQLite and PostgreSQL implement [`ListingRepository`] on their `Arc`ed
//! service, so callers receive the store as an explicit handle.

use async_trait::async_trait;

use crate::data::error::DataError;
use crate::data::filters::PropertyFilters;
use crate::data::types::{GuestReservation, NewUser, PropertyListing, UserRow};

/// Repository trait for users, reservations and property search
///
/// Lookups return `Ok(None)` when nothing matches and `Err` only when the
/// store itself failed. Listings propagate store failures unchanged.
#[async_trait]
pub trait ListingRepository: Send + Sync {
    // ==================== User Operations ====================

    /// Get a user by email
    async fn get_user_by_email(&self, email: &str) -> Result<Option<UserRow>, DataError>;

    /// Get a user by ID
    async fn get_user_by_id(&self, id: i32) -> Result<Option<UserRow>, DataError>;

    /// Insert a user and return the stored row
    async fn create_user(&self, user: &NewUser) -> Result<UserRow, DataError>;

    // ==================== Reservation Operations ====================

    /// Completed reservations of a guest, oldest stay first
    async fn list_guest_reservations(
        &self,
        guest_id: i32,
        limit: Option<i64>,
    ) -> Result<Vec<GuestReservation>, DataError>;

    // ==================== Property Operations ====================

    /// Properties matching every active filter, cheapest first
    async fn search_properties(
        &self,
        filters: &PropertyFilters,
        limit: Option<i64>,
    ) -> Result<Vec<PropertyListing>, DataError>;
}
