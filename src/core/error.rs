//! Typed error handling for the order service
//!
//! Every failure a request can hit is an [`OrderError`]. Handlers return
//! `Result<_, OrderError>` and axum renders the error through
//! [`IntoResponse`], so a bad request never escapes as a panic.
//!
//! # Error Categories
//!
//! - [`OrderError::NotFound`]: no row for the referenced id (404, empty body)
//! - [`ValidationError`]: field constraints violated (400, plain-text field list)
//! - [`RequestError`]: body or path could not be parsed (400, JSON)
//! - [`StorageError`]: the persistence gateway failed (500, JSON)
//!
//! [`ConfigError`] is separate: it only occurs while loading configuration at
//! startup and never reaches a handler.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The main error type for the order service
#[derive(Debug, Error)]
pub enum OrderError {
    /// The referenced order does not exist
    #[error("Order with id '{id}' not found")]
    NotFound { id: i64 },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl OrderError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            OrderError::NotFound { .. } => StatusCode::NOT_FOUND,
            OrderError::Validation(_) => StatusCode::BAD_REQUEST,
            OrderError::Request(e) => e.status_code(),
            OrderError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            OrderError::NotFound { .. } => "ORDER_NOT_FOUND",
            OrderError::Validation(_) => "VALIDATION_ERROR",
            OrderError::Request(e) => e.error_code(),
            OrderError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            OrderError::NotFound { .. } => status.into_response(),
            OrderError::Validation(err) => (status, err.to_string()).into_response(),
            other => {
                if status.is_server_error() {
                    tracing::error!(code = other.error_code(), error = %other, "request failed");
                }
                (status, Json(other.to_response())).into_response()
            }
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Every violated field, in field declaration order
    ///
    /// Renders as `[customerName: Customer name is required, total: ...]`.
    #[error("[{}]", format_field_errors(.0))]
    FieldErrors(Vec<FieldValidationError>),
}

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl FieldValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

fn format_field_errors(errors: &[FieldValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationError {
    /// Field-name to message pairs
    pub fn fields(&self) -> &[FieldValidationError] {
        match self {
            ValidationError::FieldErrors(errors) => errors,
        }
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to HTTP requests
#[derive(Debug, Error)]
pub enum RequestError {
    /// Body could not be parsed into an order payload
    #[error("Invalid request body: {message}")]
    InvalidBody { message: String },

    /// Path id is not an integer
    #[error("Invalid order id: {message}")]
    InvalidOrderId { message: String },
}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            RequestError::InvalidOrderId { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::InvalidBody { .. } => "INVALID_BODY",
            RequestError::InvalidOrderId { .. } => "INVALID_ORDER_ID",
        }
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to storage backends
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to connect to {backend}: {message}")]
    ConnectionError { backend: String, message: String },

    #[error("Storage operation '{operation}' failed: {message}")]
    OperationFailed { operation: String, message: String },
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {message}")]
    IoError { path: String, message: String },

    #[error("Failed to parse config{}: {message}", file_suffix(.file))]
    ParseError {
        file: Option<String>,
        message: String,
    },

    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

fn file_suffix(file: &Option<String>) -> String {
    file.as_deref()
        .map(|f| format!(" '{}'", f))
        .unwrap_or_default()
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<JsonRejection> for OrderError {
    fn from(rejection: JsonRejection) -> Self {
        OrderError::Request(RequestError::InvalidBody {
            message: rejection.body_text(),
        })
    }
}

impl From<PathRejection> for OrderError {
    fn from(rejection: PathRejection) -> Self {
        OrderError::Request(RequestError::InvalidOrderId {
            message: rejection.body_text(),
        })
    }
}

/// Gateway failures arrive as `anyhow::Error`; a wrapped `StorageError` is kept
impl From<anyhow::Error> for OrderError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<StorageError>() {
            Ok(storage) => OrderError::Storage(storage),
            Err(err) => OrderError::Storage(StorageError::OperationFailed {
                operation: "gateway".to_string(),
                message: format!("{:#}", err),
            }),
        }
    }
}

/// A specialized Result type for order service operations
pub type OrderResult<T> = Result<T, OrderError>;
