use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;
use validator::Validate;

use crate::error::ApiError;
use crate::identity::Principal;
use crate::models::user::{RegisterUser, Role, UpdateProfile};
use crate::repo;

pub async fn register(
    pool: web::Data<SqlitePool>,
    body: web::Json<RegisterUser>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;

    if body.role == Role::Admin {
        return Err(ApiError::Validation(
            "admin role cannot be self-assigned".to_string(),
        ));
    }

    if repo::users::find_by_username(&pool, &body.username)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict("username already taken".to_string()));
    }

    let user = repo::users::insert(&pool, &body).await?;
    log::info!("user {} registered as {:?}", user.id, user.role);
    Ok(HttpResponse::Created().json(user))
}

pub async fn profile(principal: Principal) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(principal.0))
}

pub async fn update_profile(
    pool: web::Data<SqlitePool>,
    principal: Principal,
    body: web::Json<UpdateProfile>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;

    let user = repo::users::update_email(&pool, principal.id(), &body.email).await?;
    Ok(HttpResponse::Ok().json(user))
}
