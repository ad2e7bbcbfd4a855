use sqlx::SqlitePool;

use crate::models::user::{RegisterUser, User};

pub async fn insert(pool: &SqlitePool, form: &RegisterUser) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "INSERT INTO users (username, email, role) VALUES (?, ?, ?) RETURNING *",
    )
    .bind(&form.username)
    .bind(&form.email)
    .bind(form.role)
    .fetch_one(pool)
    .await
}

pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await
}

/// Self-service profile update. The role column is deliberately not
/// touchable from here.
pub async fn update_email(pool: &SqlitePool, id: i64, email: &str) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>("UPDATE users SET email = ? WHERE id = ? RETURNING *")
        .bind(email)
        .bind(id)
        .fetch_one(pool)
        .await
}
