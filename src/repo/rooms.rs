use sqlx::SqlitePool;

use crate::models::room::{CreateRoom, Room, UpdateRoom};

pub async fn insert(
    pool: &SqlitePool,
    hotel_id: i64,
    form: &CreateRoom,
) -> Result<Room, sqlx::Error> {
    sqlx::query_as::<_, Room>(
        r#"
        INSERT INTO rooms (hotel_id, room_type, price_per_night, amenities, capacity, quantity)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(hotel_id)
    .bind(&form.room_type)
    .bind(form.price_per_night)
    .bind(&form.amenities)
    .bind(form.capacity)
    .bind(form.quantity)
    .fetch_one(pool)
    .await
}

pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Room>, sqlx::Error> {
    sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn for_hotel(pool: &SqlitePool, hotel_id: i64) -> Result<Vec<Room>, sqlx::Error> {
    sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE hotel_id = ? ORDER BY id")
        .bind(hotel_id)
        .fetch_all(pool)
        .await
}

/// Updates the live room row only. Price snapshots already captured in
/// `booking_rooms` are untouched.
pub async fn update(pool: &SqlitePool, id: i64, form: &UpdateRoom) -> Result<Room, sqlx::Error> {
    sqlx::query_as::<_, Room>(
        r#"
        UPDATE rooms
        SET price_per_night = ?, amenities = ?, is_available = ?
        WHERE id = ?
        RETURNING *
        "#,
    )
    .bind(form.price_per_night)
    .bind(&form.amenities)
    .bind(form.is_available)
    .bind(id)
    .fetch_one(pool)
    .await
}
