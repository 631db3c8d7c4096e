//! Delete handler.
//!
//! `DELETE [base]/movies/{id}`

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use marquee_persistence::core::MovieStorage;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Handler for deleting a movie.
///
/// # HTTP Request
///
/// `DELETE [base]/movies/{id}`
///
/// # Response
///
/// - `204 No Content` - Movie deleted
/// - `404 Not Found` - `Movie not found`
pub async fn delete_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<StatusCode>
where
    S: MovieStorage,
{
    debug!(id = %id, "Processing delete request");

    match state.storage().delete(&id).await? {
        Some(_) => {
            debug!(id = %id, "Movie deleted");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(RestError::not_found("Movie")),
    }
}
