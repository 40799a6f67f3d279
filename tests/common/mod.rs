#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use contact_book::application::services::{ContactService, UserService};
use contact_book::infrastructure::persistence::{PgContactRepository, PgUserRepository};
use contact_book::routes::api_router;
use contact_book::state::AppState;
use sqlx::PgPool;

/// bcrypt cost for test fixtures; the minimum keeps the suite fast.
pub const TEST_BCRYPT_COST: u32 = 4;

pub fn create_test_state(pool: PgPool) -> AppState {
    let pool_arc = Arc::new(pool.clone());
    let user_repository = Arc::new(PgUserRepository::new(pool_arc.clone()));
    let contact_repository = Arc::new(PgContactRepository::new(pool_arc));

    AppState {
        user_service: Arc::new(UserService::new(user_repository, TEST_BCRYPT_COST)),
        contact_service: Arc::new(ContactService::new(contact_repository)),
        db: pool,
    }
}

pub fn test_server(pool: PgPool) -> TestServer {
    TestServer::new(api_router(create_test_state(pool))).unwrap()
}

/// Inserts a user with a bcrypt-hashed password and an active session token.
pub async fn seed_user(pool: &PgPool, username: &str, password: &str, token: &str) {
    let password_hash = bcrypt::hash(password, TEST_BCRYPT_COST).unwrap();

    sqlx::query(
        "INSERT INTO users (username, name, password_hash, token) VALUES ($1, $1, $2, $3)",
    )
    .bind(username)
    .bind(password_hash)
    .bind(token)
    .execute(pool)
    .await
    .unwrap();
}

/// Inserts a contact and returns its generated id.
pub async fn seed_contact(
    pool: &PgPool,
    owner: &str,
    first_name: &str,
    last_name: Option<&str>,
    email: Option<&str>,
    phone: Option<&str>,
) -> i64 {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO contacts (username, first_name, last_name, email, phone)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(owner)
    .bind(first_name)
    .bind(last_name)
    .bind(email)
    .bind(phone)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn fetch_token(pool: &PgPool, username: &str) -> Option<String> {
    sqlx::query_scalar::<_, Option<String>>("SELECT token FROM users WHERE username = $1")
        .bind(username)
        .fetch_one(pool)
        .await
        .unwrap()
}
