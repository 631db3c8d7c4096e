//! Health check endpoint handlers.
//!
//! Provides simple health endpoints for monitoring and load balancers.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use marquee_persistence::core::MovieStorage;
use serde_json::Value;
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// Probes the storage backend before answering.
///
/// # HTTP Request
///
/// `GET [base]/health`
///
/// # Response
///
/// - `200 OK` - Server and storage are healthy
/// - `500 Internal Server Error` - Storage check failed
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> RestResult<Json<Value>>
where
    S: MovieStorage,
{
    debug!("Processing health check request");

    state.storage().health_check().await?;

    Ok(Json(serde_json::json!({
        "status": "healthy",
        "backend": state.storage().backend_name(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}

/// Handler for the liveness probe.
///
/// # HTTP Request
///
/// `GET [base]/_liveness`
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}
