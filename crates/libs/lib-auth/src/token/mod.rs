//! # JWT Token Management
//!
//! Bearer token issuance and validation (HS256).
//!
//! Validation runs with zero leeway: a token is rejected as soon as `exp` has passed.

use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use lib_utils::unix_now;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT Claims carried by every bearer token.
///
/// Wire names follow the storefront client contract (`id`, `email`, `isAdmin`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub id: i64,
    /// Email the user logged in with
    pub email: String,
    /// Admin flag at issuance time
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Build claims valid for `expiry_secs` from now.
    pub fn new(id: i64, email: impl Into<String>, is_admin: bool, expiry_secs: i64) -> Self {
        let iat = unix_now();
        Self {
            id,
            email: email.into(),
            is_admin,
            iat,
            exp: iat + expiry_secs,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to sign JWT: {0}")]
    Signing(String),

    #[error("Token expired")]
    Expired,

    #[error("Token signature invalid")]
    SignatureInvalid,

    #[error("Malformed token: {0}")]
    Malformed(String),
}

/// Sign `claims` with the shared secret.
pub fn encode_jwt(claims: &Claims, secret: &str) -> Result<String, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::Signing("signing secret is empty".to_string()));
    }

    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| TokenError::Signing(e.to_string()))
}

/// Decode and validate a JWT token.
pub fn decode_jwt(token: &str, secret: &str) -> Result<Claims, TokenError> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
        _ => TokenError::Malformed(e.to_string()),
    })?;

    Ok(token_data.claims)
}
