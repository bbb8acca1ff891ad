//! # Authentication Library
//!
//! Password hashing and JWT bearer token management.

pub mod pwd;
pub mod token;

// Re-export commonly used types
pub use pwd::{hash_password, verify_password, verify_dummy, PasswordError};
pub use token::{Claims, TokenError, encode_jwt, decode_jwt};
