//! Typed error handling for the GrubDash API
//!
//! Every failure a handler or pipeline step can produce is an [`ApiError`].
//! Each variant knows its HTTP status, and the error renders itself as the
//! `{status, message}` body clients receive.
//!
//! # Example
//!
//! ```rust,ignore
//! use grubdash::prelude::*;
//!
//! fn check(price: i64) -> Result<(), ApiError> {
//!     if price <= 0 {
//!         return Err(ApiError::validation(
//!             "Dish must have a price that is an integer greater than 0",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use crate::core::entity::Resource;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// The main error type of the API
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A request payload failed one of the pipeline validators
    #[error("{message}")]
    Validation { message: String },

    /// The addressed resource does not exist
    #[error("{message}")]
    NotFound { message: String },

    /// The path exists but does not accept this method
    #[error("{method} not allowed for {path}")]
    MethodNotAllowed { method: String, path: String },

    /// The request body could not be parsed as JSON
    #[error("Invalid JSON: {message}")]
    InvalidJson { message: String },

    /// The request body is not declared as JSON
    #[error("Request body must have Content-Type: application/json")]
    UnsupportedMediaType,

    /// Storage or other internal failures (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Error body returned to clients
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// HTTP status code, repeated in the body
    pub status: u16,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    /// Build a 400 validation error
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
        }
    }

    /// Build a 404 not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
        }
    }

    /// Build the 404 for a missing resource of type `T`
    pub fn resource_not_found<T: Resource>(id: &str) -> Self {
        Self::not_found(format!("{} not found: {}", T::label(), id))
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InvalidJson { .. } => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert to an error response body
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            status: self.status_code().as_u16(),
            message: self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}
