//! Single-movie read handlers.
//!
//! - `GET [base]/movies/{id}`
//! - `GET [base]/movies/title/{title}`

use axum::{
    Json,
    extract::{Path, State},
};
use marquee_persistence::core::MovieStorage;
use marquee_persistence::types::{FindOptions, MovieFilter, TextField};
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::search::MovieView;
use crate::state::AppState;

/// Handler for reading a movie by ID.
///
/// # HTTP Request
///
/// `GET [base]/movies/{id}`
///
/// # Response
///
/// - `200 OK` - Returns the movie
/// - `404 Not Found` - `Movie not found`
pub async fn read_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Json<MovieView>>
where
    S: MovieStorage,
{
    debug!(id = %id, "Processing read request");

    match state.storage().read(&id).await? {
        Some(movie) => Ok(Json(MovieView::from(movie))),
        None => {
            debug!(id = %id, "Movie not found");
            Err(RestError::not_found("Movie"))
        }
    }
}

/// Handler for finding a movie by its exact title.
///
/// Titles are compared exactly, including case. When several movies share
/// the title, the earliest created one is returned.
///
/// # HTTP Request
///
/// `GET [base]/movies/title/{title}`
///
/// # Response
///
/// - `200 OK` - Returns the movie
/// - `404 Not Found` - `Movie not found`
pub async fn read_by_title_handler<S>(
    State(state): State<AppState<S>>,
    Path(title): Path<String>,
) -> RestResult<Json<MovieView>>
where
    S: MovieStorage,
{
    debug!(title = %title, "Processing read by title request");

    let filter = MovieFilter::TextEquals(TextField::Title, title);
    let mut found = state
        .storage()
        .find_matching(&filter, &FindOptions::new().with_limit(1))
        .await?;

    found
        .pop()
        .map(|movie| Json(MovieView::from(movie)))
        .ok_or_else(|| RestError::not_found("Movie"))
}
