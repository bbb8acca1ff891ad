//! # Core Library
//!
//! Core models, database, configuration, and error types for the storefront backend.

pub mod config;
pub mod error;
pub mod model;
pub mod dto;

// Re-export commonly used types
pub use config::{AuthConfig, Config};
pub use error::{AppError, AuthError};
pub use model::store::{DbPool, create_pool};
