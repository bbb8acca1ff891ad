//! # Web Library
//!
//! HTTP handlers, middleware, services, and server setup.

pub mod handlers;
pub mod middleware;
pub mod services;
pub mod server;

pub use server::{create_router, start_server, AppState, ServerConfig};
