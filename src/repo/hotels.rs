use sqlx::SqlitePool;

use crate::models::hotel::{CreateHotel, Hotel, HotelSearch, UpdateHotel};

pub async fn insert(
    pool: &SqlitePool,
    owner_id: i64,
    form: &CreateHotel,
) -> Result<Hotel, sqlx::Error> {
    sqlx::query_as::<_, Hotel>(
        r#"
        INSERT INTO hotels (owner_id, name, description, location, latitude, longitude, category)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(owner_id)
    .bind(&form.name)
    .bind(&form.description)
    .bind(&form.location)
    .bind(form.latitude)
    .bind(form.longitude)
    .bind(form.category)
    .fetch_one(pool)
    .await
}

pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Hotel>, sqlx::Error> {
    sqlx::query_as::<_, Hotel>("SELECT * FROM hotels WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Active hotels matching the optional filters. Price bounds apply when any
/// of the hotel's rooms falls inside them.
pub async fn search(pool: &SqlitePool, params: &HotelSearch) -> Result<Vec<Hotel>, sqlx::Error> {
    sqlx::query_as::<_, Hotel>(
        r#"
        SELECT DISTINCT h.*
        FROM hotels h
        LEFT JOIN rooms r ON r.hotel_id = h.id
        WHERE h.is_active = 1
          AND (?1 IS NULL OR h.location LIKE '%' || ?1 || '%')
          AND (?2 IS NULL OR h.rating >= ?2)
          AND (?3 IS NULL OR r.price_per_night >= ?3)
          AND (?4 IS NULL OR r.price_per_night <= ?4)
        ORDER BY h.rating DESC, h.id
        "#,
    )
    .bind(params.location.as_deref())
    .bind(params.min_rating)
    .bind(params.min_price)
    .bind(params.max_price)
    .fetch_all(pool)
    .await
}

pub async fn by_owner(pool: &SqlitePool, owner_id: i64) -> Result<Vec<Hotel>, sqlx::Error> {
    sqlx::query_as::<_, Hotel>("SELECT * FROM hotels WHERE owner_id = ? ORDER BY id")
        .bind(owner_id)
        .fetch_all(pool)
        .await
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    form: &UpdateHotel,
) -> Result<Hotel, sqlx::Error> {
    sqlx::query_as::<_, Hotel>(
        r#"
        UPDATE hotels
        SET name = ?, description = ?, location = ?, latitude = ?, longitude = ?,
            category = ?, is_active = ?
        WHERE id = ?
        RETURNING *
        "#,
    )
    .bind(&form.name)
    .bind(&form.description)
    .bind(&form.location)
    .bind(form.latitude)
    .bind(form.longitude)
    .bind(form.category)
    .bind(form.is_active)
    .bind(id)
    .fetch_one(pool)
    .await
}
