use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;
use validator::Validate;

use crate::error::ApiError;
use crate::identity::{self, Principal};
use crate::models::photo::AttachPhoto;
use crate::repo;

fn check_path(form: &AttachPhoto) -> Result<(), ApiError> {
    if form.path_is_safe() {
        Ok(())
    } else {
        Err(ApiError::Validation(
            "photo path must be relative to the media root".to_string(),
        ))
    }
}

pub async fn add_hotel_photo(
    pool: web::Data<SqlitePool>,
    principal: Principal,
    path: web::Path<i64>,
    body: web::Json<AttachPhoto>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;
    check_path(&body)?;

    let hotel = repo::hotels::find(&pool, path.into_inner())
        .await?
        .ok_or(ApiError::NotFound("hotel"))?;
    identity::require_hotel_owner(&principal, &hotel)?;

    let photo = repo::photos::insert_for_hotel(&pool, hotel.id, &body).await?;
    Ok(HttpResponse::Created().json(photo))
}

pub async fn add_room_photo(
    pool: web::Data<SqlitePool>,
    principal: Principal,
    path: web::Path<i64>,
    body: web::Json<AttachPhoto>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;
    check_path(&body)?;

    let room = repo::rooms::find(&pool, path.into_inner())
        .await?
        .ok_or(ApiError::NotFound("room"))?;
    let hotel = repo::hotels::find(&pool, room.hotel_id)
        .await?
        .ok_or(ApiError::NotFound("hotel"))?;
    identity::require_hotel_owner(&principal, &hotel)?;

    let photo = repo::photos::insert_for_room(&pool, room.id, &body).await?;
    Ok(HttpResponse::Created().json(photo))
}
