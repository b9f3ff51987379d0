//! Server module for building the HTTP server
//!
//! This module provides a `ServerBuilder` that wires an `OrderStore` into:
//! - CRUD routes for orders
//! - Health check routes

pub mod builder;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::AppState;
