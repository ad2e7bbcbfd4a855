use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;
use validator::Validate;

use crate::error::ApiError;
use crate::identity::Principal;
use crate::models::booking::BookingStatus;
use crate::models::review::CreateReview;
use crate::repo;

pub async fn add_review(
    pool: web::Data<SqlitePool>,
    principal: Principal,
    path: web::Path<i64>,
    body: web::Json<CreateReview>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;

    let booking = repo::bookings::find(&pool, path.into_inner())
        .await?
        .ok_or(ApiError::NotFound("booking"))?;

    if booking.user_id != principal.id() {
        return Err(ApiError::Forbidden(
            "only the guest who stayed may review this booking".to_string(),
        ));
    }

    if booking.status != BookingStatus::Completed {
        return Err(ApiError::Conflict(
            "only completed stays can be reviewed".to_string(),
        ));
    }

    // One review per booking; a second attempt gets the existing one back.
    if let Some(existing) = repo::reviews::find_for_booking(&pool, booking.id).await? {
        return Ok(HttpResponse::Conflict().json(serde_json::json!({
            "error": "booking already reviewed",
            "review": existing,
        })));
    }

    let review = repo::reviews::create(&pool, booking.id, &body).await?;
    log::info!("review {} added for booking {}", review.id, booking.id);
    Ok(HttpResponse::Created().json(review))
}

pub async fn hotel_reviews(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let hotel = repo::hotels::find(&pool, path.into_inner())
        .await?
        .ok_or(ApiError::NotFound("hotel"))?;

    let reviews = repo::reviews::for_hotel(&pool, hotel.id).await?;
    Ok(HttpResponse::Ok().json(reviews))
}
