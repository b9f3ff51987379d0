//! Axum extractor for validated request bodies
//!
//! This module provides the `Validated<T>` extractor that parses and
//! validates request payloads before they reach handlers.

use super::ensure_valid;
use crate::core::error::OrderError;
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Axum extractor that deserializes a JSON body and runs its validator
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_order(
///     Validated(payload): Validated<OrderPayload>,
/// ) -> Result<Json<Order>, OrderError> {
///     // payload already passed every field check
/// }
/// ```
///
/// Rejections are [`OrderError`]s: a body that cannot be parsed becomes
/// `RequestError::InvalidBody`, a body that parses but breaks constraints
/// becomes `ValidationError::FieldErrors` listing every violated field.
#[derive(Debug, Clone)]
pub struct Validated<T>(pub T);

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = OrderError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state).await?;

        ensure_valid(&payload)?;
        Ok(Validated(payload))
    }
}
