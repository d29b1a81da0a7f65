//! Seed data for repository tests

use sqlx::SqlitePool;

use crate::data::sqlite::SqliteService;

/// Three users, five properties (one without reviews), past and future stays
pub const SEED: &str = r#"
INSERT INTO users (id, name, email, password) VALUES
    (1, 'Alice Park', 'alice@example.com', 'hash-a'),
    (2, 'Bruno Diaz', 'bruno@example.com', 'hash-b'),
    (3, 'Chloe Tran', 'chloe@example.com', 'hash-c');

INSERT INTO properties (id, owner_id, title, description, thumbnail_photo_url, cover_photo_url,
    cost_per_night, parking_spaces, number_of_bathrooms, number_of_bedrooms,
    country, street, city, province, post_code, active) VALUES
    (1, 1, 'Downtown loft', 'Glass and concrete', 'https://img.example/1t.jpg', 'https://img.example/1c.jpg',
        15000, 1, 1, 1, 'Canada', '12 Granville St', 'Vancouver', 'British Columbia', 'V6C 1T2', TRUE),
    (2, 1, 'Lakeside cabin', 'Quiet shore', 'https://img.example/2t.jpg', 'https://img.example/2c.jpg',
        8000, 2, 1, 2, 'Canada', '4 Lonsdale Ave', 'North Vancouver', 'British Columbia', 'V7M 2E4', TRUE),
    (3, 2, 'Prairie farmhouse', 'Big sky', 'https://img.example/3t.jpg', 'https://img.example/3c.jpg',
        5000, 4, 2, 4, 'Canada', '800 Range Rd', 'Calgary', 'Alberta', 'T2P 1J9', TRUE),
    (4, 2, 'Harbour condo', 'Ocean view', 'https://img.example/4t.jpg', 'https://img.example/4c.jpg',
        25000, 0, 2, 3, 'Canada', '1 Water St', 'Halifax', 'Nova Scotia', 'B3J 1S9', TRUE),
    (5, 3, 'Unreviewed room', 'New listing', 'https://img.example/5t.jpg', 'https://img.example/5c.jpg',
        3000, 0, 1, 1, 'Canada', '77 Main St', 'Vancouver', 'British Columbia', 'V5T 3E5', TRUE);

INSERT INTO reservations (id, start_date, end_date, property_id, guest_id) VALUES
    (1, '2018-09-11', '2018-09-26', 1, 3),
    (2, '2019-01-04', '2019-02-01', 2, 3),
    (3, '2017-05-01', '2017-05-10', 3, 1),
    (4, '2016-06-01', '2016-06-07', 4, 1),
    (5, '2099-01-01', '2099-01-10', 3, 3),
    (6, '2020-03-01', '2020-03-05', 1, 2);

INSERT INTO property_reviews (guest_id, property_id, reservation_id, rating, message) VALUES
    (3, 1, 1, 5, 'Loved it'),
    (2, 1, 6, 3, 'Noisy street'),
    (3, 2, 2, 4, 'Peaceful'),
    (1, 3, 3, 2, 'Drafty'),
    (3, 3, 5, 4, 'Better now'),
    (1, 4, 4, 1, 'Leaky roof');
"#;

/// In-memory pool with schema and seed data
pub async fn seeded_pool() -> SqlitePool {
    let service = SqliteService::in_memory().await.unwrap();
    sqlx::raw_sql(SEED).execute(service.pool()).await.unwrap();
    service.pool().clone()
}

/// In-memory pool with schema only
pub async fn empty_pool() -> SqlitePool {
    SqliteService::in_memory().await.unwrap().pool().clone()
}
