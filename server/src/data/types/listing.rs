//! Row types shared by the listing store backends (SQLite, PostgreSQL)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ============================================================================
// User types
// ============================================================================

/// User row from database
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct UserRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// Fields required to register a user
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

// ============================================================================
// Property types
// ============================================================================

/// Property row from database
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct PropertyRow {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Nightly cost in the smallest currency unit
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub active: bool,
}

/// Property with the mean of its review ratings (search results)
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PropertyListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: PropertyRow,
    pub average_rating: f64,
}

// ============================================================================
// Reservation types
// ============================================================================

/// Completed reservation joined with its property (guest history)
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct GuestReservation {
    pub reservation_id: i32,
    pub guest_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: PropertyRow,
    pub average_rating: f64,
}
