//! # Auth Handler Tests
//!
//! Drive the real router against an in-memory SQLite database.

mod login;

use crate::server::{create_router, AppState};
use axum::body::Body;
use axum::http::{header::AUTHORIZATION, Request, Response};
use axum::Router;
use lib_auth::hash_password;
use lib_core::model::store::{run_migrations, User, UserForCreate, UserRepository};
use lib_core::{Config, DbPool};
use sqlx::sqlite::SqlitePoolOptions;

pub const TEST_SECRET: &str = "test-secret-key-must-be-at-least-32-characters-long!";
pub const TEST_PASSWORD: &str = "TestPassword123!";

/// Setup test database with schema
pub async fn setup_test_db() -> DbPool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    run_migrations(&pool)
        .await
        .expect("Failed to apply migrations");

    pool
}

/// Create test config
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: TEST_SECRET.to_string(),
        jwt_expiration_secs: 36_000,
        insecure_secret: false,
    }
}

/// Create test app with the production routes
pub fn test_app(pool: DbPool, config: Config) -> Router {
    create_router(AppState::new(pool, &config), Vec::new())
}

/// Insert a user whose password is [`TEST_PASSWORD`].
pub async fn create_test_user(pool: &DbPool, email: &str, is_admin: bool) -> User {
    let password_hash = hash_password(TEST_PASSWORD)
        .expect("Password hashing should succeed in test");

    UserRepository::create(
        pool,
        UserForCreate::new("Test User".to_string(), email.to_string(), password_hash).admin(is_admin),
    )
    .await
    .expect("User creation should succeed in test")
}

pub fn login_request(email: &str, password: &str) -> Request<Body> {
    let body = serde_json::json!({ "email": email, "password": password });

    Request::builder()
        .method("POST")
        .uri("/api/login")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("Request should build")
}

pub fn me_request(authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri("/api/me");
    if let Some(value) = authorization {
        builder = builder.header(AUTHORIZATION, value);
    }
    builder.body(Body::empty()).expect("Request should build")
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Body should be readable");
    serde_json::from_slice(&body).expect("Body should be JSON")
}
