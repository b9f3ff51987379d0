//! HTTP handlers for order operations
//!
//! Each handler is one gateway round-trip (two for update and delete, which
//! look the order up first). Failures are `OrderError`s and render through
//! its `IntoResponse`: a lookup miss is 404, a rejected body is 400.

use axum::{
    Json,
    extract::{FromRequestParts, Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::core::validation::ensure_valid;
use crate::core::{Order, OrderError, OrderPayload, OrderResult, OrderStore, Validated};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn OrderStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }
}

/// Order id taken from the `{id}` path segment
///
/// A segment that is not an integer is rejected with a 400.
#[derive(Debug, Clone, Copy, Deserialize, FromRequestParts)]
#[from_request(via(Path), rejection(OrderError))]
pub struct OrderId(pub i64);

/// POST /orders
pub async fn create_order(
    State(state): State<AppState>,
    Validated(payload): Validated<OrderPayload>,
) -> OrderResult<(StatusCode, Json<Order>)> {
    let created = state.store.save(payload.into_order()).await?;
    tracing::debug!(id = ?created.id, "order created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    OrderId(id): OrderId,
) -> OrderResult<Json<Order>> {
    state
        .store
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or(OrderError::NotFound { id })
}

/// GET /orders
pub async fn list_orders(State(state): State<AppState>) -> OrderResult<Json<Vec<Order>>> {
    Ok(Json(state.store.find_all().await?))
}

/// PUT /orders/{id}
///
/// Replaces all four mutable fields. The path id wins over any id in the body,
/// and a missing order is a 404 whatever the body holds: update never creates
/// a row. The body is only parsed and validated once the order is found.
pub async fn update_order(
    State(state): State<AppState>,
    OrderId(id): OrderId,
    body: Result<Json<OrderPayload>, JsonRejection>,
) -> OrderResult<Json<Order>> {
    let mut existing = state
        .store
        .find_by_id(id)
        .await?
        .ok_or(OrderError::NotFound { id })?;

    let Json(payload) = body?;
    ensure_valid(&payload)?;

    existing.replace_fields(payload.into_order());
    let updated = state.store.save(existing).await?;
    tracing::debug!(id, "order updated");
    Ok(Json(updated))
}

/// DELETE /orders/{id}
pub async fn delete_order(
    State(state): State<AppState>,
    OrderId(id): OrderId,
) -> OrderResult<StatusCode> {
    let existing = state
        .store
        .find_by_id(id)
        .await?
        .ok_or(OrderError::NotFound { id })?;

    state.store.delete(&existing).await?;
    tracing::debug!(id, "order deleted");
    Ok(StatusCode::NO_CONTENT)
}
