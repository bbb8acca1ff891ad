//! # Authentication Handlers
//!
//! HTTP request handlers for the login endpoint and the bearer-protected identity endpoint.
//!
//! ## Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::{get, post}};
//! use lib_web::handlers::auth::{login, me};
//!
//! let app = Router::new()
//!     .route("/api/login", post(login))
//!     .route("/api/me", get(me));
//! ```

use std::sync::Arc;

use axum::extract::{Extension, Json, State};
use lib_core::dto::{AuthenticatedPrincipal, LoginRequest, LoginResponse};
use lib_core::AuthError;
use tracing::{info, instrument};

use crate::services::AuthService;

/// Login handler - exchanges credentials for a bearer token.
///
/// # Returns
///
/// * `200 {"success": true, "token": "<jwt>"}` - Credentials verified
/// * `401 {"errorMsg": "No Account Found"}` - Unknown email or wrong password
/// * `500 {"error": "Error signing token", "raw": ...}` - Token could not be signed
/// * `503` - User store unavailable
#[instrument(skip_all)]
pub async fn login(
    State(auth): State<Arc<AuthService>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthError> {
    info!("[LOGIN] Login attempt");

    let token = auth.login(&req).await?;

    Ok(Json(LoginResponse::new(token)))
}

/// Return the principal resolved by the auth middleware.
pub async fn me(
    Extension(principal): Extension<AuthenticatedPrincipal>,
) -> Json<AuthenticatedPrincipal> {
    Json(principal)
}

#[cfg(test)]
mod tests;
