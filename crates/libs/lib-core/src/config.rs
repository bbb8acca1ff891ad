//! # Application Configuration
//!
//! This module manages application configuration loaded from environment variables.
//! All configuration is validated on startup to fail fast if misconfigured.
//!
//! Configuration is loaded once by the binary and handed to the components that need it.
//! Authentication code receives an [`AuthConfig`] at construction time and never reads
//! the environment itself.
//!
//! ```rust,no_run
//! use lib_core::Config;
//!
//! let config = Config::from_env()?;
//! config.validate()?;
//! let auth = config.auth();
//! # Ok::<(), String>(())
//! ```

use lib_utils::{get_env, get_env_or, get_env_parse_or, validate_min_length, validate_range};

/// Fallback signing secret used when `JWT_SECRET` is unset.
///
/// Anyone who knows this value can mint valid tokens. Deployments must set `JWT_SECRET`.
pub const INSECURE_DEFAULT_JWT_SECRET: &str = "123456";

/// Default token lifetime in seconds (10 hours).
pub const DEFAULT_JWT_EXPIRATION_SECS: i64 = 36_000;

/// Shortest accepted token lifetime (1 minute).
pub const MIN_JWT_EXPIRATION_SECS: i64 = 60;

/// Longest accepted token lifetime (30 days).
pub const MAX_JWT_EXPIRATION_SECS: i64 = 2_592_000;

/// Minimum length of an explicitly configured secret.
pub const MIN_JWT_SECRET_LEN: usize = 32;

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// SQLite database connection URL
    pub database_url: String,

    /// Secret key for JWT token signing and verification
    pub jwt_secret: String,

    /// JWT token validity period in seconds
    ///
    /// After this period, users must log in again.
    pub jwt_expiration_secs: i64,

    /// `true` when `JWT_SECRET` was unset and [`INSECURE_DEFAULT_JWT_SECRET`] is in use.
    pub insecure_secret: bool,
}

/// Signing material and token lifetime handed to the authentication service.
#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub expiry_secs: i64,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret", &"<redacted>")
            .field("expiry_secs", &self.expiry_secs)
            .finish()
    }
}

impl AuthConfig {
    pub fn new(secret: impl Into<String>, expiry_secs: i64) -> Self {
        Self {
            secret: secret.into(),
            expiry_secs,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        let database_url = get_env_or("DATABASE_URL", "sqlite:data/storefront.db");

        let (jwt_secret, insecure_secret) = match get_env("JWT_SECRET") {
            Ok(secret) => (secret, false),
            Err(_) => (INSECURE_DEFAULT_JWT_SECRET.to_string(), true),
        };

        let jwt_expiration_secs = get_env_parse_or("JWT_EXPIRATION_SECS", DEFAULT_JWT_EXPIRATION_SECS)
            .map_err(|e| format!("JWT_EXPIRATION_SECS must be a valid number: {}", e))?;

        Ok(Self {
            database_url,
            jwt_secret,
            jwt_expiration_secs,
            insecure_secret,
        })
    }

    /// Validate configuration values against security rules.
    ///
    /// The insecure fallback secret passes validation so local setups keep working;
    /// callers are expected to warn about it (see [`Config::insecure_secret`]).
    pub fn validate(&self) -> Result<(), String> {
        if !self.insecure_secret {
            validate_min_length(&self.jwt_secret, MIN_JWT_SECRET_LEN, "JWT_SECRET")?;
        }

        validate_range(
            self.jwt_expiration_secs,
            MIN_JWT_EXPIRATION_SECS,
            MAX_JWT_EXPIRATION_SECS,
            "JWT_EXPIRATION_SECS",
        )?;

        Ok(())
    }

    /// Extract the authentication settings.
    pub fn auth(&self) -> AuthConfig {
        AuthConfig::new(self.jwt_secret.clone(), self.jwt_expiration_secs)
    }
}
