use serde::{Deserialize, Serialize};
use validator::Validate;

use super::photo::Photo;
use super::room::Room;

#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct Hotel {
    pub id: i64,
    pub owner_id: i64,
    pub name: String,
    pub description: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub category: i64,
    pub rating: f64,
    pub is_active: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateHotel {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: String,
    #[validate(length(min = 1, max = 255))]
    pub location: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[validate(range(min = 1, max = 5))]
    pub category: i64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateHotel {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: String,
    #[validate(length(min = 1, max = 255))]
    pub location: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[validate(range(min = 1, max = 5))]
    pub category: i64,
    pub is_active: bool,
}

/// Optional list filters, all combinable.
#[derive(Debug, Default, Deserialize)]
pub struct HotelSearch {
    pub location: Option<String>,
    pub min_rating: Option<f64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

/// Detail view: the hotel plus its rooms and photo references.
#[derive(Debug, Serialize)]
pub struct HotelDetail {
    #[serde(flatten)]
    pub hotel: Hotel,
    pub rooms: Vec<Room>,
    pub photos: Vec<Photo>,
}
