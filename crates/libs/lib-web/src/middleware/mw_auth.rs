//! # Authentication Middleware
//!
//! Axum middleware for bearer-token validation.
//!
//! Extracts the token from the `Authorization` header, resolves it through
//! [`AuthService::authenticate`], and injects the resulting [`AuthenticatedPrincipal`]
//! into the request extensions. Any failure short-circuits with the [`AuthError`]
//! response; the handler never runs.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use axum::{Router, routing::get, middleware::from_fn_with_state};
//! use lib_web::middleware::require_auth;
//!
//! let app = Router::new()
//!     .route("/api/me", get(me))
//!     .route_layer(from_fn_with_state(auth_service.clone(), require_auth));
//! ```
//!
//! Handlers then extract the principal with `Extension<AuthenticatedPrincipal>`.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use lib_core::{dto::AuthenticatedPrincipal, AuthError};
use tracing::warn;

use crate::services::AuthService;

/// Pull the token out of `Authorization: Bearer <token>`.
///
/// The scheme is matched case-insensitively.
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, AuthError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    let (scheme, token) = auth_header
        .trim()
        .split_once(' ')
        .ok_or(AuthError::MissingToken)?;

    let token = token.trim();
    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return Err(AuthError::MissingToken);
    }

    Ok(token)
}

/// Authentication middleware that validates bearer tokens.
///
/// # Behavior
///
/// - **Valid token, user exists**: continues with `AuthenticatedPrincipal` in extensions
/// - **Missing/invalid/expired token or deleted user**: `401 Unauthorized`
/// - **User store failure**: `503 Service Unavailable`
pub async fn require_auth(
    State(auth): State<Arc<AuthService>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = extract_bearer(req.headers()).inspect_err(|_| {
        warn!("[AUTH] Missing or malformed Authorization header");
    })?;

    let principal: AuthenticatedPrincipal = auth.authenticate(token).await?;

    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).expect("valid header"));
        headers
    }

    #[test]
    fn test_extract_bearer() {
        assert_eq!(extract_bearer(&headers("Bearer abc.def.ghi")), Ok("abc.def.ghi"));
        assert_eq!(extract_bearer(&headers("bearer abc")), Ok("abc"));
    }

    #[test]
    fn test_extract_bearer_rejects_other_forms() {
        assert_eq!(extract_bearer(&HeaderMap::new()), Err(AuthError::MissingToken));
        assert_eq!(extract_bearer(&headers("Basic dXNlcjpwYXNz")), Err(AuthError::MissingToken));
        assert_eq!(extract_bearer(&headers("Bearer")), Err(AuthError::MissingToken));
        assert_eq!(extract_bearer(&headers("Bearer    ")), Err(AuthError::MissingToken));
        assert_eq!(extract_bearer(&headers("abc.def.ghi")), Err(AuthError::MissingToken));
    }
}
