use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Closed set of principal roles. Stored as TEXT in the `users` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Client,
    HotelOwner,
    Admin,
}

impl Role {
    /// Only hotel owners may create and mutate listings.
    pub fn can_manage_listings(self) -> bool {
        matches!(self, Role::HotelOwner)
    }

    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterUser {
    #[validate(length(min = 3, max = 64))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfile {
    #[validate(email)]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_hotel_owner_manages_listings() {
        assert!(Role::HotelOwner.can_manage_listings());
        assert!(!Role::Client.can_manage_listings());
        assert!(!Role::Admin.can_manage_listings());
    }

    #[test]
    fn role_serializes_snake_case() {
        let json = serde_json::to_string(&Role::HotelOwner).unwrap();
        assert_eq!(json, "\"hotel_owner\"");
    }
}
