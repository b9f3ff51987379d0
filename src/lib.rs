//! # Order Service
//!
//! A small order-management REST service: one `Order` entity exposed through
//! create/read/update/delete endpoints over a pluggable persistence gateway.
//!
//! ## Features
//!
//! - **Validated bodies**: every field violation is reported in one 400
//! - **Pluggable storage**: in-memory by default, PostgreSQL behind the `postgres` feature
//! - **Explicit wiring**: the store is handed to the server at startup, no container
//! - **Configuration-Based**: YAML file plus environment overrides
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use orders::prelude::*;
//!
//! let app = ServerBuilder::new()
//!     .with_store(InMemoryOrderStore::new())
//!     .build()?;
//!
//! // POST   /orders
//! // GET    /orders
//! // GET    /orders/{id}
//! // PUT    /orders/{id}
//! // DELETE /orders/{id}
//! ```

pub mod config;
pub mod core;
pub mod seed;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        Order, OrderError, OrderPayload, OrderResult, OrderStore, Validated,
        error::{ConfigError, FieldValidationError, RequestError, StorageError, ValidationError},
    };

    // === Storage ===
    pub use crate::storage::InMemoryOrderStore;
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresOrderStore;

    // === Config ===
    pub use crate::config::{ServiceConfig, StorageBackend};

    // === Server ===
    pub use crate::server::{AppState, ServerBuilder};

    // === Seed ===
    pub use crate::seed::load_sample_orders;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::NaiveDate;
    pub use rust_decimal::Decimal;
    pub use serde::{Deserialize, Serialize};
}
