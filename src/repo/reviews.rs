use sqlx::SqlitePool;

use crate::models::review::{CreateReview, Review};

pub async fn find_for_booking(
    pool: &SqlitePool,
    booking_id: i64,
) -> Result<Option<Review>, sqlx::Error> {
    sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE booking_id = ?")
        .bind(booking_id)
        .fetch_optional(pool)
        .await
}

/// Inserts the review and refreshes the parent hotel's aggregate rating in
/// the same transaction. The aggregate is the arithmetic mean of all review
/// ratings across the hotel's rooms' bookings.
pub async fn create(
    pool: &SqlitePool,
    booking_id: i64,
    form: &CreateReview,
) -> Result<Review, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let review = sqlx::query_as::<_, Review>(
        "INSERT INTO reviews (booking_id, rating, comment) VALUES (?, ?, ?) RETURNING *",
    )
    .bind(booking_id)
    .bind(form.rating)
    .bind(&form.comment)
    .fetch_one(&mut *tx)
    .await?;

    let hotel_id = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT r.hotel_id
        FROM booking_rooms br
        JOIN rooms r ON r.id = br.room_id
        WHERE br.booking_id = ?
        LIMIT 1
        "#,
    )
    .bind(booking_id)
    .fetch_optional(&mut *tx)
    .await?;

    if let Some(hotel_id) = hotel_id {
        sqlx::query(
            r#"
            UPDATE hotels
            SET rating = COALESCE((
                SELECT AVG(rating) FROM reviews
                WHERE booking_id IN (
                    SELECT DISTINCT br.booking_id
                    FROM booking_rooms br
                    JOIN rooms r ON r.id = br.room_id
                    WHERE r.hotel_id = ?1
                )), 0)
            WHERE id = ?1
            "#,
        )
        .bind(hotel_id)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(review)
}

pub async fn for_hotel(pool: &SqlitePool, hotel_id: i64) -> Result<Vec<Review>, sqlx::Error> {
    sqlx::query_as::<_, Review>(
        r#"
        SELECT DISTINCT rv.*
        FROM reviews rv
        JOIN booking_rooms br ON br.booking_id = rv.booking_id
        JOIN rooms r ON r.id = br.room_id
        WHERE r.hotel_id = ?
        ORDER BY rv.created_at DESC, rv.id DESC
        "#,
    )
    .bind(hotel_id)
    .fetch_all(pool)
    .await
}
