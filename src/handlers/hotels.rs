use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;
use validator::Validate;

use crate::error::ApiError;
use crate::identity::{self, Principal};
use crate::models::hotel::{CreateHotel, HotelDetail, HotelSearch, UpdateHotel};
use crate::repo;

pub async fn list_hotels(
    pool: web::Data<SqlitePool>,
    params: web::Query<HotelSearch>,
) -> Result<HttpResponse, ApiError> {
    let hotels = repo::hotels::search(&pool, &params).await?;
    Ok(HttpResponse::Ok().json(hotels))
}

pub async fn hotel_detail(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let hotel = repo::hotels::find(&pool, path.into_inner())
        .await?
        .ok_or(ApiError::NotFound("hotel"))?;

    let rooms = repo::rooms::for_hotel(&pool, hotel.id).await?;
    let photos = repo::photos::for_hotel(&pool, hotel.id).await?;

    Ok(HttpResponse::Ok().json(HotelDetail {
        hotel,
        rooms,
        photos,
    }))
}

pub async fn create_hotel(
    pool: web::Data<SqlitePool>,
    principal: Principal,
    body: web::Json<CreateHotel>,
) -> Result<HttpResponse, ApiError> {
    identity::require_listing_manager(&principal)?;
    body.validate()?;

    let hotel = repo::hotels::insert(&pool, principal.id(), &body).await?;
    log::info!("hotel {} created by user {}", hotel.id, principal.id());
    Ok(HttpResponse::Created().json(hotel))
}

pub async fn manage_hotels(
    pool: web::Data<SqlitePool>,
    principal: Principal,
) -> Result<HttpResponse, ApiError> {
    identity::require_listing_manager(&principal)?;
    let hotels = repo::hotels::by_owner(&pool, principal.id()).await?;
    Ok(HttpResponse::Ok().json(hotels))
}

pub async fn update_hotel(
    pool: web::Data<SqlitePool>,
    principal: Principal,
    path: web::Path<i64>,
    body: web::Json<UpdateHotel>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;

    let hotel = repo::hotels::find(&pool, path.into_inner())
        .await?
        .ok_or(ApiError::NotFound("hotel"))?;
    identity::require_hotel_owner(&principal, &hotel)?;

    let updated = repo::hotels::update(&pool, hotel.id, &body).await?;
    Ok(HttpResponse::Ok().json(updated))
}
