//! Reservation repository for PostgreSQL operations

use sqlx::PgPool;

use crate::core::constants::DEFAULT_RESULT_LIMIT;
use crate::data::postgres::PostgresError;
use crate::data::types::GuestReservation;

/// Completed reservations of a guest with their property and its rating
///
/// Only stays whose end date has passed are returned, oldest first.
pub async fn list_for_guest(
    pool: &PgPool,
    guest_id: i32,
    limit: Option<i64>,
) -> Result<Vec<GuestReservation>, PostgresError> {
    let rows = sqlx::query_as::<_, GuestReservation>(
        r#"
        SELECT reservations.id AS reservation_id, reservations.guest_id,
               reservations.start_date, reservations.end_date,
               properties.*, avg(property_reviews.rating)::float8 AS average_rating
        FROM reservations
        JOIN properties ON properties.id = reservations.property_id
        JOIN property_reviews ON properties.id = property_reviews.property_id
        WHERE reservations.guest_id = $1 AND reservations.end_date < CURRENT_DATE
        GROUP BY reservations.id, properties.id
        ORDER BY reservations.start_date
        LIMIT $2
        "#,
    )
    .bind(guest_id)
    .bind(limit.unwrap_or(DEFAULT_RESULT_LIMIT))
    .fetch_all(pool)
    .await?;

    tracing::trace!(guest_id, count = rows.len(), "Guest reservations listed");
    Ok(rows)
}
