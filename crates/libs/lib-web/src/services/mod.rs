//! # Services
//!
//! Business logic behind the HTTP handlers.

pub mod auth;

pub use auth::AuthService;
