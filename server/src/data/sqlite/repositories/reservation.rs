//! Reservation repository for SQLite operations

use sqlx::SqlitePool;

use crate::core::constants::DEFAULT_RESULT_LIMIT;
use crate::data::sqlite::SqliteError;
use crate::data::types::GuestReservation;

/// Completed reservations of a guest with their property and its rating
///
/// Only stays whose end date has passed are returned, oldest first.
pub async fn list_for_guest(
    pool: &SqlitePool,
    guest_id: i32,
    limit: Option<i64>,
) -> Result<Vec<GuestReservation>, SqliteError> {
    let rows = sqlx::query_as::<_, GuestReservation>(
        r#"
        SELECT reservations.id AS reservation_id, reservations.guest_id,
               reservations.start_date, reservations.end_date,
               properties.*, avg(property_reviews.rating) AS average_rating
        FROM reservations
        JOIN properties ON properties.id = reservations.property_id
        JOIN property_reviews ON properties.id = property_reviews.property_id
        WHERE reservations.guest_id = ?1 AND reservations.end_date < CURRENT_DATE
        GROUP BY reservations.id, properties.id
        ORDER BY reservations.start_date
        LIMIT ?2
        "#,
    )
    .bind(guest_id)
    .bind(limit.unwrap_or(DEFAULT_RESULT_LIMIT))
    .fetch_all(pool)
    .await?;

    tracing::trace!(guest_id, count = rows.len(), "Guest reservations listed");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sqlite::repositories::testing::seeded_pool;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_list_for_guest_past_only_ordered() {
        let pool = seeded_pool().await;
        let rows = list_for_guest(&pool, 3, None).await.unwrap();

        let ids: Vec<i32> = rows.iter().map(|r| r.reservation_id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(
            rows[0].start_date,
            NaiveDate::from_ymd_opt(2018, 9, 11).unwrap()
        );
        assert_eq!(rows[0].property.title, "Downtown loft");
        assert!(rows.iter().all(|r| r.guest_id == 3));
    }

    #[tokio::test]
    async fn test_list_for_guest_average_rating_covers_all_reviews() {
        let pool = seeded_pool().await;
        let rows = list_for_guest(&pool, 3, None).await.unwrap();

        // Property 1 has reviews 5 and 3
        assert_eq!(rows[0].property.id, 1);
        assert_eq!(rows[0].average_rating, 4.0);
    }

    #[tokio::test]
    async fn test_list_for_guest_limit() {
        let pool = seeded_pool().await;
        let rows = list_for_guest(&pool, 1, Some(1)).await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].reservation_id, 4);
    }

    #[tokio::test]
    async fn test_list_for_guest_store_failure_propagates() {
        let pool = seeded_pool().await;
        pool.close().await;

        let result = list_for_guest(&pool, 3, None).await;
        assert!(matches!(result, Err(SqliteError::Database(_))));
    }

    #[tokio::test]
    async fn test_list_for_unknown_guest() {
        let pool = seeded_pool().await;
        assert!(list_for_guest(&pool, 99, None).await.unwrap().is_empty());
    }
}
