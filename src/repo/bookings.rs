use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::models::booking::{Booking, BookingRoom, BookingStatus};
use crate::models::payment::Payment;
use crate::models::room::Room;

/// Creates the booking, its single room line and the placeholder payment
/// row in one transaction: either all three land or none do.
///
/// The line captures the room's nightly price as it is right now; later
/// price changes never reach historical bookings.
pub async fn create(
    pool: &SqlitePool,
    user_id: i64,
    room: &Room,
    check_in: NaiveDate,
    check_out: NaiveDate,
    total_price: f64,
) -> Result<(Booking, BookingRoom), sqlx::Error> {
    let mut tx = pool.begin().await?;

    let booking = sqlx::query_as::<_, Booking>(
        r#"
        INSERT INTO bookings (user_id, check_in, check_out, status, total_price)
        VALUES (?, ?, ?, 'pending', ?)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(check_in)
    .bind(check_out)
    .bind(total_price)
    .fetch_one(&mut *tx)
    .await?;

    let line = sqlx::query_as::<_, BookingRoom>(
        r#"
        INSERT INTO booking_rooms (booking_id, room_id, quantity, price_per_night)
        VALUES (?, ?, 1, ?)
        RETURNING *
        "#,
    )
    .bind(booking.id)
    .bind(room.id)
    .bind(room.price_per_night)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query("INSERT INTO payments (booking_id, amount, status) VALUES (?, ?, 'pending')")
        .bind(booking.id)
        .bind(total_price)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok((booking, line))
}

/// The booking's placeholder payment row. No gateway ever moves it past
/// `pending`.
pub async fn payment(pool: &SqlitePool, booking_id: i64) -> Result<Option<Payment>, sqlx::Error> {
    sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE booking_id = ?")
        .bind(booking_id)
        .fetch_optional(pool)
        .await
}

pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Booking>, sqlx::Error> {
    sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn lines(pool: &SqlitePool, booking_id: i64) -> Result<Vec<BookingRoom>, sqlx::Error> {
    sqlx::query_as::<_, BookingRoom>(
        "SELECT * FROM booking_rooms WHERE booking_id = ? ORDER BY id",
    )
    .bind(booking_id)
    .fetch_all(pool)
    .await
}

pub async fn for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Booking>, sqlx::Error> {
    sqlx::query_as::<_, Booking>(
        "SELECT * FROM bookings WHERE user_id = ? ORDER BY created_at DESC, id DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn set_status(
    pool: &SqlitePool,
    id: i64,
    status: BookingStatus,
) -> Result<Booking, sqlx::Error> {
    sqlx::query_as::<_, Booking>("UPDATE bookings SET status = ? WHERE id = ? RETURNING *")
        .bind(status)
        .bind(id)
        .fetch_one(pool)
        .await
}

/// Owner of the hotel the booked room belongs to. Bookings carry exactly
/// one line, so the first match settles it.
pub async fn hotel_owner(pool: &SqlitePool, booking_id: i64) -> Result<Option<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"
        SELECT h.owner_id
        FROM booking_rooms br
        JOIN rooms r ON r.id = br.room_id
        JOIN hotels h ON h.id = r.hotel_id
        WHERE br.booking_id = ?
        LIMIT 1
        "#,
    )
    .bind(booking_id)
    .fetch_optional(pool)
    .await
}
