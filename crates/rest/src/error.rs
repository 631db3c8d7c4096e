//! Error types for the movie catalog API.
//!
//! This module is the single place where failures become HTTP responses.
//! Every error body has the shape `{"message": "<text>"}`.
//!
//! # Error Mapping
//!
//! | Source | HTTP Status | Message |
//! |--------|-------------|---------|
//! | Validation failure | 400 | first failing field, e.g. `The year should be a valid number` |
//! | Malformed JSON body | 400 | `Invalid JSON: ...` |
//! | Missing movie / empty exact lookup | 404 | `<Entity> not found` |
//! | Query failure in the store | 500 | the store's message |
//! | Any other store failure | 500 | `Internal server error` |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use marquee_persistence::error::{BackendError, StorageError};
use std::fmt;
use tracing::error;

use crate::validation::ValidationError;

/// Message returned for store failures whose details must not leak.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// Nothing matched (HTTP 404).
    NotFound {
        /// What was looked for, e.g. "Movie" or "Genre".
        entity: String,
    },

    /// Bad request - validation error or malformed body (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Unsupported media type (HTTP 415).
    UnsupportedMediaType {
        /// The unsupported content type.
        content_type: String,
    },

    /// Request body exceeds the configured limit (HTTP 413).
    PayloadTooLarge {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

impl RestError {
    /// Creates a not-found error for the given entity name.
    pub fn not_found(entity: impl Into<String>) -> Self {
        RestError::NotFound {
            entity: entity.into(),
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            RestError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound { entity } => write!(f, "{} not found", entity),
            RestError::BadRequest { message } => write!(f, "{}", message),
            RestError::UnsupportedMediaType { content_type } => {
                write!(f, "Content type '{}' is not supported", content_type)
            }
            RestError::PayloadTooLarge { message } => write!(f, "{}", message),
            RestError::InternalError { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({ "message": self.to_string() });
        (status, Json(body)).into_response()
    }
}

// Implement conversions from storage errors

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        error!(error = %err, "Storage operation failed");

        let message = match &err {
            StorageError::Backend(BackendError::QueryError { .. }) => err.to_string(),
            _ => INTERNAL_ERROR_MESSAGE.to_string(),
        };
        RestError::InternalError { message }
    }
}

impl From<ValidationError> for RestError {
    fn from(err: ValidationError) -> Self {
        RestError::BadRequest {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for RestError {
    fn from(err: serde_json::Error) -> Self {
        RestError::BadRequest {
            message: format!("Invalid JSON: {}", err),
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;
