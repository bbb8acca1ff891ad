//! # Data Transfer Objects (DTOs)
//!
//! Request and response bodies exchanged with storefront clients.

pub mod auth;

pub use auth::*;
