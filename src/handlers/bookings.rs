use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;
use validator::Validate;

use crate::error::ApiError;
use crate::identity::Principal;
use crate::models::booking::{stay_nights, stay_total, BookingDetail, BookingStatus, CreateBooking};
use crate::repo;

pub async fn book_room(
    pool: web::Data<SqlitePool>,
    principal: Principal,
    path: web::Path<i64>,
    body: web::Json<CreateBooking>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;

    let room = repo::rooms::find(&pool, path.into_inner())
        .await?
        .ok_or(ApiError::NotFound("room"))?;

    if !room.is_available {
        return Err(ApiError::Conflict(
            "room is not available for booking".to_string(),
        ));
    }

    let nights = stay_nights(body.check_in, body.check_out)
        .ok_or_else(|| ApiError::Validation("check-out must be after check-in".to_string()))?;

    if body.guests > room.capacity {
        return Err(ApiError::Validation(format!(
            "room sleeps at most {} guests",
            room.capacity
        )));
    }

    // Overlapping stays for the same room are not checked; concurrent
    // bookings over the same dates all go through.
    let total_price = stay_total(room.price_per_night, nights);

    let (booking, line) = repo::bookings::create(
        &pool,
        principal.id(),
        &room,
        body.check_in,
        body.check_out,
        total_price,
    )
    .await?;

    log::info!(
        "booking {} created: room {} for user {}, {} nights, total {:.2}",
        booking.id,
        room.id,
        principal.id(),
        nights,
        total_price
    );

    let payment = repo::bookings::payment(&pool, booking.id).await?;
    Ok(HttpResponse::Created().json(BookingDetail {
        booking,
        rooms: vec![line],
        payment,
    }))
}

pub async fn booking_confirmation(
    pool: web::Data<SqlitePool>,
    principal: Principal,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let booking = repo::bookings::find(&pool, path.into_inner())
        .await?
        .ok_or(ApiError::NotFound("booking"))?;

    if !principal.can_act_for(booking.user_id) {
        return Err(ApiError::Forbidden(
            "this booking belongs to another guest".to_string(),
        ));
    }

    let rooms = repo::bookings::lines(&pool, booking.id).await?;
    let payment = repo::bookings::payment(&pool, booking.id).await?;
    Ok(HttpResponse::Ok().json(BookingDetail {
        booking,
        rooms,
        payment,
    }))
}

pub async fn my_bookings(
    pool: web::Data<SqlitePool>,
    principal: Principal,
) -> Result<HttpResponse, ApiError> {
    let bookings = repo::bookings::for_user(&pool, principal.id()).await?;
    Ok(HttpResponse::Ok().json(bookings))
}

/// Confirm and complete are for the hotel side of the booking: the owner of
/// the booked room's hotel, or an admin.
async fn require_booking_manager(
    pool: &SqlitePool,
    principal: &Principal,
    booking_id: i64,
) -> Result<(), ApiError> {
    if principal.role().is_admin() {
        return Ok(());
    }
    match repo::bookings::hotel_owner(pool, booking_id).await? {
        Some(owner_id) if owner_id == principal.id() => Ok(()),
        _ => Err(ApiError::Forbidden(
            "only the hotel owner may manage this booking".to_string(),
        )),
    }
}

pub async fn confirm_booking(
    pool: web::Data<SqlitePool>,
    principal: Principal,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let booking = repo::bookings::find(&pool, path.into_inner())
        .await?
        .ok_or(ApiError::NotFound("booking"))?;
    require_booking_manager(&pool, &principal, booking.id).await?;

    if booking.status != BookingStatus::Pending {
        return Err(ApiError::Conflict(format!(
            "cannot confirm a {} booking",
            booking.status
        )));
    }

    let updated = repo::bookings::set_status(&pool, booking.id, BookingStatus::Confirmed).await?;
    Ok(HttpResponse::Ok().json(updated))
}

pub async fn complete_booking(
    pool: web::Data<SqlitePool>,
    principal: Principal,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let booking = repo::bookings::find(&pool, path.into_inner())
        .await?
        .ok_or(ApiError::NotFound("booking"))?;
    require_booking_manager(&pool, &principal, booking.id).await?;

    if booking.status != BookingStatus::Confirmed {
        return Err(ApiError::Conflict(format!(
            "cannot complete a {} booking",
            booking.status
        )));
    }

    let today = chrono::Utc::now().date_naive();
    if today < booking.check_out {
        return Err(ApiError::Conflict("stay has not ended yet".to_string()));
    }

    let updated = repo::bookings::set_status(&pool, booking.id, BookingStatus::Completed).await?;
    Ok(HttpResponse::Ok().json(updated))
}

pub async fn cancel_booking(
    pool: web::Data<SqlitePool>,
    principal: Principal,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let booking = repo::bookings::find(&pool, path.into_inner())
        .await?
        .ok_or(ApiError::NotFound("booking"))?;

    if !principal.can_act_for(booking.user_id) {
        return Err(ApiError::Forbidden(
            "this booking belongs to another guest".to_string(),
        ));
    }

    match booking.status {
        BookingStatus::Pending | BookingStatus::Confirmed => {}
        other => {
            return Err(ApiError::Conflict(format!(
                "cannot cancel a {other} booking"
            )))
        }
    }

    let today = chrono::Utc::now().date_naive();
    if booking.check_in <= today {
        return Err(ApiError::Validation(
            "cannot cancel a booking on or after the check-in date".to_string(),
        ));
    }

    let updated = repo::bookings::set_status(&pool, booking.id, BookingStatus::Cancelled).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "id": updated.id,
        "status": updated.status,
        "refund_amount": updated.total_price,
        "message": "Booking cancelled successfully"
    })))
}
