//! Listing handlers.
//!
//! - `GET [base]/movies` - paginated listing of every movie
//! - `GET [base]/movies/genre/{genre}` - exact genre match
//! - `GET [base]/movies/director/{director}` - exact director match
//! - `GET [base]/movies/year/{year}` - exact year match
//!
//! The exact-match lists are unpaginated and answer `404` when nothing
//! matches, unlike `/search` and `/movies`, which answer an empty page.

use axum::{
    Json,
    extract::{Path, State},
};
use marquee_persistence::core::MovieStorage;
use marquee_persistence::types::{FindOptions, MovieFilter, TextField};
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::SearchParams;
use crate::search::{self, MovieView, PageResult};
use crate::state::AppState;

/// Handler for the paginated listing.
///
/// Accepts `page` and `limit` like `/search`; any search parameters are
/// ignored.
///
/// # HTTP Request
///
/// `GET [base]/movies?page=0&limit=10`
///
/// # Response
///
/// - `200 OK` - Returns a page envelope
pub async fn list_handler<S>(
    State(state): State<AppState<S>>,
    SearchParams(raw): SearchParams,
) -> RestResult<Json<PageResult>>
where
    S: MovieStorage,
{
    let query = search::normalize(&raw, &state.page_limits()).unfiltered();

    debug!(page = query.page, limit = query.limit, "Processing list request");

    let result = search::execute(state.storage(), &query).await?;
    Ok(Json(result))
}

/// Handler for listing movies of a genre.
///
/// # HTTP Request
///
/// `GET [base]/movies/genre/{genre}`
///
/// # Response
///
/// - `200 OK` - Returns the matching movies
/// - `404 Not Found` - `Genre not found`
pub async fn list_by_genre_handler<S>(
    State(state): State<AppState<S>>,
    Path(genre): Path<String>,
) -> RestResult<Json<Vec<MovieView>>>
where
    S: MovieStorage,
{
    debug!(genre = %genre, "Processing list by genre request");
    list_exact(
        state.storage(),
        MovieFilter::TextEquals(TextField::Genre, genre),
        "Genre",
    )
    .await
}

/// Handler for listing movies by a director.
///
/// # HTTP Request
///
/// `GET [base]/movies/director/{director}`
///
/// # Response
///
/// - `200 OK` - Returns the matching movies
/// - `404 Not Found` - `Director not found`
pub async fn list_by_director_handler<S>(
    State(state): State<AppState<S>>,
    Path(director): Path<String>,
) -> RestResult<Json<Vec<MovieView>>>
where
    S: MovieStorage,
{
    debug!(director = %director, "Processing list by director request");
    list_exact(
        state.storage(),
        MovieFilter::TextEquals(TextField::Director, director),
        "Director",
    )
    .await
}

/// Handler for listing movies released in a year.
///
/// A year that is not an integer cannot match anything and answers `404`.
///
/// # HTTP Request
///
/// `GET [base]/movies/year/{year}`
///
/// # Response
///
/// - `200 OK` - Returns the matching movies
/// - `404 Not Found` - `Year not found`
pub async fn list_by_year_handler<S>(
    State(state): State<AppState<S>>,
    Path(year): Path<String>,
) -> RestResult<Json<Vec<MovieView>>>
where
    S: MovieStorage,
{
    debug!(year = %year, "Processing list by year request");

    let Ok(year) = year.trim().parse::<i32>() else {
        return Err(RestError::not_found("Year"));
    };

    list_exact(state.storage(), MovieFilter::YearEquals(year), "Year").await
}

/// Lists every movie matching `filter` in creation order, or 404s as `entity`.
async fn list_exact<S>(
    storage: &S,
    filter: MovieFilter,
    entity: &str,
) -> RestResult<Json<Vec<MovieView>>>
where
    S: MovieStorage,
{
    let movies = storage.find_matching(&filter, &FindOptions::new()).await?;

    if movies.is_empty() {
        return Err(RestError::not_found(entity));
    }

    Ok(Json(movies.into_iter().map(MovieView::from).collect()))
}
