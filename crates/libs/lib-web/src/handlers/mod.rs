//! # HTTP Request Handlers
//!
//! Handlers stay thin: they extract, delegate to [`crate::services`], and return.
//!
//! - **[`auth`]**
//!   - `POST /api/login` - Exchange email/password for a bearer token
//!   - `GET /api/me` - Principal behind the presented bearer token
//! - **[`health`]**
//!   - `GET /health` - Liveness probe
//!
//! Errors are returned as [`lib_core::AuthError`], which renders its own status and body.

pub mod auth;
pub mod health;
