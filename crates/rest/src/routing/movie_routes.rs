//! Movie catalog route configuration.
//!
//! Defines all routes for the REST API.

use axum::{Router, routing::get};
use marquee_persistence::core::MovieStorage;

use crate::handlers;
use crate::state::AppState;

/// Creates all movie catalog routes.
///
/// # Routes
///
/// ## System
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
///
/// ## Search
/// - `GET /search` - Composite paginated search
///
/// ## Collection
/// - `GET /movies` - Paginated listing
/// - `POST /movies` - Create
/// - `GET /movies/title/{title}` - Exact title lookup
/// - `GET /movies/genre/{genre}` - Exact genre list
/// - `GET /movies/director/{director}` - Exact director list
/// - `GET /movies/year/{year}` - Exact year list
///
/// ## Instance
/// - `GET /movies/{id}` - Read
/// - `PUT /movies/{id}` - Update
/// - `DELETE /movies/{id}` - Delete
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: MovieStorage + 'static,
{
    Router::new()
        // System routes
        .route("/health", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::liveness_handler))
        // Search
        .route("/search", get(handlers::search_handler::<S>))
        // Collection routes
        .route(
            "/movies",
            get(handlers::list_handler::<S>).post(handlers::create_handler::<S>),
        )
        .route(
            "/movies/title/{title}",
            get(handlers::read_by_title_handler::<S>),
        )
        .route(
            "/movies/genre/{genre}",
            get(handlers::list_by_genre_handler::<S>),
        )
        .route(
            "/movies/director/{director}",
            get(handlers::list_by_director_handler::<S>),
        )
        .route(
            "/movies/year/{year}",
            get(handlers::list_by_year_handler::<S>),
        )
        // Instance routes
        .route(
            "/movies/{id}",
            get(handlers::read_handler::<S>)
                .put(handlers::update_handler::<S>)
                .delete(handlers::delete_handler::<S>),
        )
        // State
        .with_state(state)
}

/// Creates a minimal set of routes for testing.
///
/// This is useful for tests that only need the read side.
pub fn create_minimal_routes<S>(state: AppState<S>) -> Router
where
    S: MovieStorage + 'static,
{
    Router::new()
        .route("/health", get(handlers::health_handler::<S>))
        .route("/search", get(handlers::search_handler::<S>))
        .route("/movies/{id}", get(handlers::read_handler::<S>))
        .with_state(state)
}
