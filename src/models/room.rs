use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct Room {
    pub id: i64,
    pub hotel_id: i64,
    pub room_type: String,
    pub price_per_night: f64,
    pub amenities: String,
    pub capacity: i64,
    pub quantity: i64,
    pub is_available: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateRoom {
    #[validate(length(min = 1, max = 100))]
    pub room_type: String,
    #[validate(range(min = 0.0))]
    pub price_per_night: f64,
    pub amenities: String,
    #[validate(range(min = 1))]
    pub capacity: i64,
    #[validate(range(min = 1))]
    pub quantity: i64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRoom {
    #[validate(range(min = 0.0))]
    pub price_per_night: f64,
    pub amenities: String,
    pub is_available: bool,
}
