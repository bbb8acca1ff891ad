//! # Login Tests
//!
//! Tests for `POST /api/login`.

use super::*;
use axum::http::StatusCode;
use lib_auth::decode_jwt;
use tower::ServiceExt;

#[tokio::test]
async fn test_login_success() {
    // Arrange
    let pool = setup_test_db().await;
    let user = create_test_user(&pool, "a@x.com", false).await;
    let app = test_app(pool, test_config());

    // Act
    let response = app
        .oneshot(login_request("a@x.com", TEST_PASSWORD))
        .await
        .expect("Request should complete");

    // Assert
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);

    let token = body["token"].as_str().expect("token should be a string");
    let claims = decode_jwt(token, TEST_SECRET).expect("Token should decode");
    assert_eq!(claims.id, user.id);
    assert_eq!(claims.email, "a@x.com");
    assert!(!claims.is_admin);
}

#[tokio::test]
async fn test_login_admin_flag_in_token() {
    let pool = setup_test_db().await;
    create_test_user(&pool, "admin@x.com", true).await;
    let app = test_app(pool, test_config());

    let response = app
        .oneshot(login_request("admin@x.com", TEST_PASSWORD))
        .await
        .expect("Request should complete");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let token = body["token"].as_str().expect("token should be a string");
    assert!(decode_jwt(token, TEST_SECRET).expect("Token should decode").is_admin);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let pool = setup_test_db().await;
    create_test_user(&pool, "a@x.com", false).await;
    let app = test_app(pool, test_config());

    let response = app
        .oneshot(login_request("a@x.com", "WrongPassword123!"))
        .await
        .expect("Request should complete");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "errorMsg": "No Account Found" })
    );
}

#[tokio::test]
async fn test_unknown_email_matches_wrong_password() {
    let pool = setup_test_db().await;
    create_test_user(&pool, "a@x.com", false).await;
    let app = test_app(pool, test_config());

    let unknown = app
        .clone()
        .oneshot(login_request("nobody@x.com", TEST_PASSWORD))
        .await
        .expect("Request should complete");
    let wrong = app
        .oneshot(login_request("a@x.com", "WrongPassword123!"))
        .await
        .expect("Request should complete");

    assert_eq!(unknown.status(), wrong.status());
    assert_eq!(body_json(unknown).await, body_json(wrong).await);
}

#[tokio::test]
async fn test_login_signing_failure() {
    let pool = setup_test_db().await;
    create_test_user(&pool, "a@x.com", false).await;
    let config = Config {
        jwt_secret: String::new(),
        ..test_config()
    };
    let app = test_app(pool, config);

    let response = app
        .oneshot(login_request("a@x.com", TEST_PASSWORD))
        .await
        .expect("Request should complete");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Error signing token");
    assert!(body["raw"].is_string());
}

#[tokio::test]
async fn test_login_store_unavailable() {
    let pool = setup_test_db().await;
    let app = test_app(pool.clone(), test_config());
    pool.close().await;

    let response = app
        .oneshot(login_request("a@x.com", TEST_PASSWORD))
        .await
        .expect("Request should complete");

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_response_carries_request_id() {
    let pool = setup_test_db().await;
    let app = test_app(pool, test_config());

    let response = app
        .oneshot(login_request("nobody@x.com", TEST_PASSWORD))
        .await
        .expect("Request should complete");

    assert!(response.headers().contains_key("x-request-id"));
}
