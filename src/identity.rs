//! Principal resolution and capability checks.
//!
//! Authentication itself lives with an external identity provider: requests
//! arrive with the already-authenticated user id in the `X-User-Id` header,
//! which is resolved against the `users` table here.

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::models::hotel::Hotel;
use crate::models::user::{Role, User};
use crate::repo;

pub const PRINCIPAL_HEADER: &str = "X-User-Id";

/// The acting, already-authenticated user.
#[derive(Debug, Clone)]
pub struct Principal(pub User);

impl Principal {
    pub fn id(&self) -> i64 {
        self.0.id
    }

    pub fn role(&self) -> Role {
        self.0.role
    }

    /// Reading or cancelling a booking: the requester themselves, or an
    /// admin.
    pub fn can_act_for(&self, user_id: i64) -> bool {
        self.0.id == user_id || self.0.role.is_admin()
    }
}

impl FromRequest for Principal {
    type Error = ApiError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let pool = req.app_data::<web::Data<SqlitePool>>().cloned();
        let header = req
            .headers()
            .get(PRINCIPAL_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        Box::pin(async move {
            let pool = pool.ok_or(ApiError::Internal("database pool not configured"))?;
            let id: i64 = header
                .ok_or(ApiError::Unauthorized)?
                .parse()
                .map_err(|_| ApiError::Unauthorized)?;

            match repo::users::find(&pool, id).await? {
                Some(user) => Ok(Principal(user)),
                None => Err(ApiError::Unauthorized),
            }
        })
    }
}

/// Listing creation and mutation require the hotel owner role.
pub fn require_listing_manager(principal: &Principal) -> Result<(), ApiError> {
    if principal.role().can_manage_listings() {
        Ok(())
    } else {
        Err(ApiError::Forbidden("hotel owner role required".to_string()))
    }
}

/// Listing mutations additionally require ownership of the listing itself.
/// Room mutations check at the room's parent hotel.
pub fn require_hotel_owner(principal: &Principal, hotel: &Hotel) -> Result<(), ApiError> {
    require_listing_manager(principal)?;
    if hotel.owner_id == principal.id() {
        Ok(())
    } else {
        Err(ApiError::Forbidden(
            "only the listing owner may do this".to_string(),
        ))
    }
}
