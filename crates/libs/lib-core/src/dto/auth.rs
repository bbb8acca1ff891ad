//! # Authentication Data Transfer Objects
//!
//! Request and response bodies for the login endpoint and bearer-authenticated routes.
//!
//! ## Endpoints Using These DTOs
//!
//! - `POST /api/login` - [`LoginRequest`] -> [`LoginResponse`]
//! - `GET /api/me` (bearer) -> [`AuthenticatedPrincipal`]
//!
//! Failure bodies are produced by [`crate::AuthError`]'s `IntoResponse` implementation.
//!
//! ## Login Flow
//!
//! ```text
//! POST /api/login
//! Content-Type: application/json
//!
//! {
//!   "email": "a@x.com",
//!   "password": "correct horse battery"
//! }
//! ```
//!
//! Response:
//! ```text
//! {
//!   "success": true,
//!   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
//! }
//! ```
//!
//! Bad credentials, whether the email is unknown or the password is wrong:
//! ```text
//! 401 {"errorMsg": "No Account Found"}
//! ```

use serde::{Deserialize, Serialize};

use crate::model::store::User;

/// Login credentials. Transient: never persisted, never logged.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
}

impl LoginResponse {
    pub fn new(token: String) -> Self {
        Self { success: true, token }
    }
}

/// Identity attached to a request after its bearer token was validated.
///
/// Derived from the user record on every request; never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticatedPrincipal {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<&User> for AuthenticatedPrincipal {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}
