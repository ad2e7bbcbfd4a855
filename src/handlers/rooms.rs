use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;
use validator::Validate;

use crate::error::ApiError;
use crate::identity::{self, Principal};
use crate::models::room::{CreateRoom, UpdateRoom};
use crate::repo;

pub async fn add_room(
    pool: web::Data<SqlitePool>,
    principal: Principal,
    path: web::Path<i64>,
    body: web::Json<CreateRoom>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;

    let hotel = repo::hotels::find(&pool, path.into_inner())
        .await?
        .ok_or(ApiError::NotFound("hotel"))?;
    identity::require_hotel_owner(&principal, &hotel)?;

    let room = repo::rooms::insert(&pool, hotel.id, &body).await?;
    log::info!("room {} added to hotel {}", room.id, hotel.id);
    Ok(HttpResponse::Created().json(room))
}

pub async fn update_room(
    pool: web::Data<SqlitePool>,
    principal: Principal,
    path: web::Path<i64>,
    body: web::Json<UpdateRoom>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;

    let room = repo::rooms::find(&pool, path.into_inner())
        .await?
        .ok_or(ApiError::NotFound("room"))?;

    // Ownership is checked at the room's parent hotel.
    let hotel = repo::hotels::find(&pool, room.hotel_id)
        .await?
        .ok_or(ApiError::NotFound("hotel"))?;
    identity::require_hotel_owner(&principal, &hotel)?;

    let updated = repo::rooms::update(&pool, room.id, &body).await?;
    Ok(HttpResponse::Ok().json(updated))
}
