#![allow(dead_code)]

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use innbound::models::hotel::{CreateHotel, Hotel};
use innbound::models::room::{CreateRoom, Room};
use innbound::models::user::{RegisterUser, Role, User};
use innbound::repo;

/// Fresh in-memory database with the full schema applied. One connection so
/// every query sees the same memory file.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory database");
    innbound::db::MIGRATOR.run(&pool).await.expect("migrations");
    pool
}

pub async fn user_with_role(pool: &SqlitePool, username: &str, role: Role) -> User {
    repo::users::insert(
        pool,
        &RegisterUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            role,
        },
    )
    .await
    .expect("insert user")
}

pub async fn hotel_for(pool: &SqlitePool, owner: &User) -> Hotel {
    repo::hotels::insert(
        pool,
        owner.id,
        &CreateHotel {
            name: "Seaside Inn".to_string(),
            description: "Small hotel by the pier".to_string(),
            location: "Brighton".to_string(),
            latitude: 50.82,
            longitude: -0.14,
            category: 4,
        },
    )
    .await
    .expect("insert hotel")
}

pub async fn room_for(pool: &SqlitePool, hotel: &Hotel, price_per_night: f64) -> Room {
    repo::rooms::insert(
        pool,
        hotel.id,
        &CreateRoom {
            room_type: "Double".to_string(),
            price_per_night,
            amenities: "wifi, breakfast".to_string(),
            capacity: 2,
            quantity: 3,
        },
    )
    .await
    .expect("insert room")
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    // table names come from the tests themselves
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .expect("count rows")
}
