//! Movie payload extractor.
//!
//! Extracts the JSON body of create and update requests. Field-level checks
//! happen afterwards in [`crate::validation`], so that a well-formed body
//! with bad fields yields the field-specific message.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::error::RestError;

/// Axum extractor for movie request bodies.
///
/// # Example
///
/// ```rust,ignore
/// use marquee_rest::extractors::MovieBody;
///
/// async fn create_handler(MovieBody(body): MovieBody) {
///     println!("Title: {}", body["title"]);
/// }
/// ```
#[derive(Debug)]
pub struct MovieBody(pub Value);

impl MovieBody {
    /// Consumes the extractor and returns the inner Value.
    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Returns a reference to the inner Value.
    pub fn inner(&self) -> &Value {
        &self.0
    }
}

/// Error type for movie body extraction failures.
#[derive(Debug)]
pub enum MovieBodyRejection {
    /// The body could not be read or is not valid JSON.
    InvalidJson(String),
    /// The body exceeds the configured size limit.
    TooLarge(String),
    /// Unsupported content type.
    UnsupportedMediaType(String),
}

impl IntoResponse for MovieBodyRejection {
    fn into_response(self) -> Response {
        let error = match self {
            MovieBodyRejection::InvalidJson(msg) => RestError::BadRequest {
                message: format!("Invalid JSON: {}", msg),
            },
            MovieBodyRejection::TooLarge(msg) => RestError::PayloadTooLarge { message: msg },
            MovieBodyRejection::UnsupportedMediaType(ct) => {
                RestError::UnsupportedMediaType { content_type: ct }
            }
        };
        error.into_response()
    }
}

impl<S> FromRequest<S> for MovieBody
where
    S: Send + Sync,
{
    type Rejection = MovieBodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Check content type (must own the string before moving req)
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/json")
            .to_string();

        if !content_type.contains("json") {
            return Err(MovieBodyRejection::UnsupportedMediaType(content_type));
        }

        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                MovieBodyRejection::TooLarge(e.body_text())
            } else {
                MovieBodyRejection::InvalidJson(e.body_text())
            }
        })?;

        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|e| MovieBodyRejection::InvalidJson(e.to_string()))?;

        Ok(MovieBody(value))
    }
}
