//! Integration test infrastructure for storage backends.
//!
//! Builds the real service router around a store so backends can be validated
//! through the full REST layer (HTTP → handler → OrderStore → response).
//!
//! # Architecture
//!
//! ```text
//! axum_test::TestServer
//!     └─ Router (built by ServerBuilder)
//!         ├─ POST   /orders        → create_order
//!         ├─ GET    /orders        → list_orders
//!         ├─ GET    /orders/{id}   → get_order
//!         ├─ PUT    /orders/{id}   → update_order
//!         └─ DELETE /orders/{id}   → delete_order
//! ```

#[macro_use]
pub mod rest_tests;

use axum::Router;
use axum_test::TestServer;
use orders::core::OrderStore;
use orders::server::ServerBuilder;

/// Build the service router around a store, orders at the root.
pub fn build_test_router(store: impl OrderStore + 'static) -> Router {
    ServerBuilder::new()
        .with_store(store)
        .build()
        .expect("router should build with a store")
}

/// Wrap `build_test_router` in an in-process test server.
pub fn test_server(store: impl OrderStore + 'static) -> TestServer {
    TestServer::try_new(build_test_router(store)).expect("test server should start")
}
