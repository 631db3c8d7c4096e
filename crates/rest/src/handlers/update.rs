//! Update handler.
//!
//! `PUT [base]/movies/{id}`

use axum::{
    Json,
    extract::{Path, State},
};
use marquee_persistence::core::MovieStorage;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::MovieBody;
use crate::search::MovieView;
use crate::state::AppState;

/// Handler for replacing a movie's fields.
///
/// The payload is validated exactly as for create; the ID never changes.
///
/// # HTTP Request
///
/// `PUT [base]/movies/{id}`
///
/// # Response
///
/// - `200 OK` - Returns the updated movie
/// - `400 Bad Request` - Invalid JSON or the first failing field
/// - `404 Not Found` - `Movie not found`
pub async fn update_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    MovieBody(body): MovieBody,
) -> RestResult<Json<MovieView>>
where
    S: MovieStorage,
{
    let movie = state.validator().validate(&body)?;

    debug!(id = %id, "Processing update request");

    match state.storage().update(&id, movie).await? {
        Some(updated) => {
            debug!(id = %id, version = updated.version(), "Movie updated");
            Ok(Json(MovieView::from(updated)))
        }
        None => {
            debug!(id = %id, "Movie not found for update");
            Err(RestError::not_found("Movie"))
        }
    }
}
