//! Core module containing the order entity, its validation and the storage contract

pub mod error;
pub mod order;
pub mod store;
pub mod validation;

pub use error::{OrderError, OrderResult};
pub use order::{Order, OrderPayload};
pub use store::OrderStore;
pub use validation::Validated;
