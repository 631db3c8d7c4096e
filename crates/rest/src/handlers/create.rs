//! Create handler.
//!
//! `POST [base]/movies`

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use marquee_persistence::core::MovieStorage;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::MovieBody;
use crate::search::MovieView;
use crate::state::AppState;

/// Handler for creating a movie.
///
/// Validates the payload and stores it. The server assigns the ID.
///
/// # HTTP Request
///
/// `POST [base]/movies`
///
/// # Response
///
/// - `201 Created` - Movie created, returns the movie with its `id`
/// - `400 Bad Request` - Invalid JSON or the first failing field
///
/// # Example
///
/// ```http
/// POST /movies HTTP/1.1
/// Content-Type: application/json
///
/// {"title": "Alien", "director": "Ridley Scott", "genre": "Horror", "year": 1979}
/// ```
pub async fn create_handler<S>(
    State(state): State<AppState<S>>,
    MovieBody(body): MovieBody,
) -> RestResult<Response>
where
    S: MovieStorage,
{
    let movie = state.validator().validate(&body)?;

    debug!(title = %movie.title, year = movie.year, "Processing create request");

    let stored = state.storage().create(movie).await?;
    let location = format!("/movies/{}", stored.id());

    debug!(id = %stored.id(), "Movie created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(MovieView::from(stored)),
    )
        .into_response())
}
