//! # Centralized Error Handling
//!
//! Two error types live here:
//!
//! - [`AuthError`]: every way a login or a bearer-authenticated request can be refused.
//!   Each variant maps to a fixed client-facing body; internal detail only goes to the logs.
//! - [`AppError`]: startup configuration failures and unmatched routes.
//!
//! ## HTTP Mapping
//!
//! | Variant | Status | Body |
//! |---|---|---|
//! | `Authentication` | 401 | `{"errorMsg": "No Account Found"}` |
//! | `TokenSigning` | 500 | `{"error": "Error signing token", "raw": ...}` |
//! | `MissingToken`, `InvalidToken`, `SignatureInvalid`, `Expired` | 401 | `{"error": "Unauthorized"}` |
//! | `InternalLookup` | 503 | `{"error": "Service temporarily unavailable"}` |
//!
//! Token failures share one body so a client cannot tell which check failed.

use thiserror::Error;
use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde_json::json;

/// Message returned for both unknown accounts and wrong passwords.
pub const NO_ACCOUNT_FOUND: &str = "No Account Found";

/// Authentication failures, for both the login and the bearer-token path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password. Deliberately indistinguishable.
    #[error("No Account Found")]
    Authentication,

    /// The token could not be signed (server misconfiguration).
    #[error("Error signing token: {0}")]
    TokenSigning(String),

    /// No `Authorization: Bearer <token>` header on the request.
    #[error("Missing bearer token")]
    MissingToken,

    /// Malformed token, or a well-formed token whose subject no longer exists.
    #[error("Invalid token or token expired")]
    InvalidToken,

    #[error("Token signature invalid")]
    SignatureInvalid,

    #[error("Token expired")]
    Expired,

    /// The user store failed while resolving an identity.
    #[error("User lookup failed: {0}")]
    InternalLookup(String),
}

impl AuthError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Authentication
            | AuthError::MissingToken
            | AuthError::InvalidToken
            | AuthError::SignatureInvalid
            | AuthError::Expired => StatusCode::UNAUTHORIZED,
            AuthError::TokenSigning(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::InternalLookup(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// `true` for failures caused by the server rather than by the client's credentials.
    pub fn is_server_fault(&self) -> bool {
        matches!(self, AuthError::TokenSigning(_) | AuthError::InternalLookup(_))
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_server_fault() {
            tracing::error!("[AUTH] Server error: {}", self);
        } else {
            tracing::debug!("[AUTH] Rejected: {}", self);
        }

        let body = match self {
            AuthError::Authentication => json!({ "errorMsg": NO_ACCOUNT_FOUND }),
            AuthError::TokenSigning(raw) => json!({
                "error": "Error signing token",
                "raw": raw,
            }),
            AuthError::InternalLookup(_) => json!({ "error": "Service temporarily unavailable" }),
            AuthError::MissingToken
            | AuthError::InvalidToken
            | AuthError::SignatureInvalid
            | AuthError::Expired => json!({ "error": "Unauthorized" }),
        };

        (status, Json(body)).into_response()
    }
}

/// Application-wide error type for failures outside the authentication flow.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error during startup or environment loading.
    ///
    /// **HTTP Status**: 500 Internal Server Error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found.
    ///
    /// **HTTP Status**: 404 Not Found
    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a user-friendly error message.
    ///
    /// Configuration detail stays in the server log.
    pub fn user_message(&self) -> String {
        match self {
            AppError::NotFound(msg) => msg.clone(),
            AppError::Config(_) => "An internal error occurred".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.user_message();

        if status.is_server_error() {
            tracing::error!("Server error: {}", self);
        } else {
            tracing::debug!("Client error: {}", self);
        }

        let error_code = match self {
            AppError::Config(_) => "Config",
            AppError::NotFound(_) => "NotFound",
        };

        let body = Json(json!({
            "error": message,
            "code": error_code,
        }));

        (status, body).into_response()
    }
}
