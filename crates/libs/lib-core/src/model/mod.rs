//! # Model Layer
//!
//! Entities and their persistence.

pub mod store;
