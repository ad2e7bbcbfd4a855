use sqlx::SqlitePool;

use crate::models::photo::{AttachPhoto, Photo};

pub async fn insert_for_hotel(
    pool: &SqlitePool,
    hotel_id: i64,
    form: &AttachPhoto,
) -> Result<Photo, sqlx::Error> {
    sqlx::query_as::<_, Photo>(
        "INSERT INTO photos (hotel_id, path, caption, is_main) VALUES (?, ?, ?, ?) RETURNING *",
    )
    .bind(hotel_id)
    .bind(&form.path)
    .bind(&form.caption)
    .bind(form.is_main)
    .fetch_one(pool)
    .await
}

pub async fn insert_for_room(
    pool: &SqlitePool,
    room_id: i64,
    form: &AttachPhoto,
) -> Result<Photo, sqlx::Error> {
    sqlx::query_as::<_, Photo>(
        "INSERT INTO photos (room_id, path, caption, is_main) VALUES (?, ?, ?, ?) RETURNING *",
    )
    .bind(room_id)
    .bind(&form.path)
    .bind(&form.caption)
    .bind(form.is_main)
    .fetch_one(pool)
    .await
}

/// Photos for the hotel itself plus all of its rooms.
pub async fn for_hotel(pool: &SqlitePool, hotel_id: i64) -> Result<Vec<Photo>, sqlx::Error> {
    sqlx::query_as::<_, Photo>(
        r#"
        SELECT p.* FROM photos p
        LEFT JOIN rooms r ON r.id = p.room_id
        WHERE p.hotel_id = ? OR r.hotel_id = ?
        ORDER BY p.is_main DESC, p.id
        "#,
    )
    .bind(hotel_id)
    .bind(hotel_id)
    .fetch_all(pool)
    .await
}
