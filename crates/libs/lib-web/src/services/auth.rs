//! # Authentication Service
//!
//! Credential verification, token issuance, and bearer-token validation.
//!
//! The service holds the injected [`AuthConfig`] and a [`UserStore`] handle and nothing
//! else: every call is independent and stateless.
//!
//! ## Login
//!
//! ```text
//! {email, password} → find_by_email → verify Argon2 hash → sign Claims → token
//! ```
//!
//! Unknown email and wrong password both end in [`AuthError::Authentication`].
//!
//! ## Validation
//!
//! ```text
//! token → verify signature + exp → find_by_id(claims.id) → AuthenticatedPrincipal
//! ```
//!
//! Every failure is an `Err`; nothing on this path grants access by default.

use std::sync::Arc;

use lib_auth::{decode_jwt, encode_jwt, verify_dummy, verify_password, Claims, TokenError};
use lib_core::dto::{AuthenticatedPrincipal, LoginRequest};
use lib_core::model::store::{User, UserStore};
use lib_core::{AuthConfig, AuthError};
use lib_utils::{format_unix, validate_not_empty};
use tracing::{debug, error, info, instrument, warn};

#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn UserStore>,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(store: Arc<dyn UserStore>, config: AuthConfig) -> Self {
        Self { store, config }
    }

    /// Verify credentials and mint a bearer token.
    #[instrument(skip_all, fields(email = %credentials.email))]
    pub async fn login(&self, credentials: &LoginRequest) -> Result<String, AuthError> {
        if validate_not_empty(&credentials.email, "email").is_err()
            || validate_not_empty(&credentials.password, "password").is_err()
        {
            warn!("[LOGIN] Blank email or password");
            return Err(AuthError::Authentication);
        }

        let user = self
            .store
            .find_by_email(&credentials.email)
            .await
            .map_err(|e| {
                error!("[LOGIN] User lookup failed: {}", e);
                AuthError::InternalLookup(e.to_string())
            })?;

        let Some(user) = user else {
            verify_dummy(&credentials.password);
            warn!("[LOGIN] No account for email");
            return Err(AuthError::Authentication);
        };

        match verify_password(&credentials.password, &user.password_hash) {
            Ok(true) => {}
            Ok(false) => {
                warn!("[LOGIN] Wrong password for user {}", user.id);
                return Err(AuthError::Authentication);
            }
            Err(e) => {
                error!("[LOGIN] Stored hash for user {} is unusable: {}", user.id, e);
                return Err(AuthError::Authentication);
            }
        }

        let token = self.issue_token(&user)?;
        info!("[LOGIN] User {} authenticated", user.id);

        Ok(token)
    }

    /// Sign a token for `user` with the configured secret and lifetime.
    pub fn issue_token(&self, user: &User) -> Result<String, AuthError> {
        let claims = Claims::new(user.id, user.email.clone(), user.is_admin, self.config.expiry_secs);

        let token = encode_jwt(&claims, &self.config.secret).map_err(|e| {
            error!("[LOGIN] JWT signing failed: {}", e);
            AuthError::TokenSigning(e.to_string())
        })?;

        if let Ok(expires) = format_unix(claims.exp) {
            debug!("[LOGIN] Token for user {} expires at {}", user.id, expires);
        }

        Ok(token)
    }

    /// Resolve a bearer token to the user it was issued for.
    pub async fn authenticate(&self, token: &str) -> Result<AuthenticatedPrincipal, AuthError> {
        let claims = decode_jwt(token, &self.config.secret).map_err(|e| {
            debug!("[AUTH] Token rejected: {}", e);
            match e {
                TokenError::Expired => AuthError::Expired,
                TokenError::SignatureInvalid => AuthError::SignatureInvalid,
                TokenError::Malformed(_) | TokenError::Signing(_) => AuthError::InvalidToken,
            }
        })?;

        let user = self.store.find_by_id(claims.id).await.map_err(|e| {
            error!("[AUTH] User lookup failed for id {}: {}", claims.id, e);
            AuthError::InternalLookup(e.to_string())
        })?;

        match user {
            Some(user) => {
                debug!("[AUTH] Authenticated user {}", user.id);
                Ok(AuthenticatedPrincipal::from(&user))
            }
            None => {
                warn!("[AUTH] Token subject {} no longer exists", claims.id);
                Err(AuthError::InvalidToken)
            }
        }
    }
}
