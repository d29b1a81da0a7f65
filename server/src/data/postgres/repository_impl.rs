//! ListingRepository trait implementation for PostgreSQL

use std::sync::Arc;

use async_trait::async_trait;

use crate::data::error::DataError;
use crate::data::filters::PropertyFilters;
use crate::data::traits::ListingRepository;
use crate::data::types::{GuestReservation, NewUser, PropertyListing, UserRow};

use super::PostgresService;
use super::repositories::{property, reservation, user};

#[async_trait]
impl ListingRepository for Arc<PostgresService> {
    // ==================== User Operations ====================

    async fn get_user_by_email(&self, email: &str) -> Result<Option<UserRow>, DataError> {
        user::get_by_email(self.pool(), email)
            .await
            .map_err(Into::into)
    }

    async fn get_user_by_id(&self, id: i32) -> Result<Option<UserRow>, DataError> {
        user::get_user(self.pool(), id).await.map_err(Into::into)
    }

    async fn create_user(&self, new_user: &NewUser) -> Result<UserRow, DataError> {
        user::create_user(self.pool(), new_user)
            .await
            .map_err(Into::into)
    }

    // ==================== Reservation Operations ====================

    async fn list_guest_reservations(
        &self,
        guest_id: i32,
        limit: Option<i64>,
    ) -> Result<Vec<GuestReservation>, DataError> {
        reservation::list_for_guest(self.pool(), guest_id, limit)
            .await
            .map_err(Into::into)
    }

    // ==================== Property Operations ====================

    async fn search_properties(
        &self,
        filters: &PropertyFilters,
        limit: Option<i64>,
    ) -> Result<Vec<PropertyListing>, DataError> {
        property::search_properties(self.pool(), filters, limit)
            .await
            .map_err(Into::into)
    }
}
