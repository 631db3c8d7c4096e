//! # marquee-rest - Movie Catalog REST API
//!
//! This crate serves the Marquee movie catalog over HTTP: create, read,
//! update and delete movies, exact-match lists, and a composite paginated
//! search across title, director, genre and year.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use marquee_rest::{create_app, ServerConfig};
//! use marquee_persistence::backends::sqlite::SqliteBackend;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Create a storage backend
//!     let backend = SqliteBackend::open("movies.db")?;
//!     backend.init_schema()?;
//!
//!     // Create the Axum application
//!     let app = create_app(backend);
//!
//!     // Start the server
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Interaction | HTTP Method | URL Pattern |
//! |------------|-------------|-------------|
//! | search | GET | `/search?searchType=&searchTerm=&page=&limit=` |
//! | list | GET | `/movies?page=&limit=` |
//! | create | POST | `/movies` |
//! | read | GET | `/movies/{id}` |
//! | update | PUT | `/movies/{id}` |
//! | delete | DELETE | `/movies/{id}` |
//! | by title | GET | `/movies/title/{title}` |
//! | by genre | GET | `/movies/genre/{genre}` |
//! | by director | GET | `/movies/director/{director}` |
//! | by year | GET | `/movies/year/{year}` |
//! | health | GET | `/health` |
//!
//! ## Pagination
//!
//! Pages are 0-based. Paginated endpoints always answer with the envelope
//! `{"data": [...], "currentPage": n, "totalCount": n, "totalPages": n}`,
//! even when nothing matches.
//!
//! ## Error Handling
//!
//! Errors are returned as `{"message": "..."}`:
//!
//! | HTTP Status | Description |
//! |-------------|-------------|
//! | 400 | Validation failure or malformed JSON |
//! | 404 | Movie not found / empty exact-match list |
//! | 413 | Body exceeds `max_body_size` |
//! | 415 | Body is not JSON |
//! | 500 | Storage failure |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and HTTP mapping
//! - [`config`] - Server configuration
//! - [`state`] - Application state (storage, configuration)
//! - [`search`] - Normalization, dispatch, pagination and formatting for search
//! - [`validation`] - Write payload validation
//! - [`handlers`] - HTTP request handlers
//! - [`extractors`] - Axum extractors for bodies and query parameters
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routing;
pub mod search;
pub mod state;
pub mod validation;

// Re-export commonly used types
pub use config::{ServerConfig, StorageKind};
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::{Router, extract::DefaultBodyLimit};
use marquee_persistence::core::MovieStorage;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// This is a convenience function that creates the app with default settings.
/// For more control, use [`create_app_with_config`].
///
/// # Example
///
/// ```rust
/// use marquee_rest::create_app;
/// use marquee_persistence::backends::memory::MemoryBackend;
///
/// let app = create_app(MemoryBackend::new());
/// ```
pub fn create_app<S>(storage: S) -> Router
where
    S: MovieStorage + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// This function sets up all routes together with the body limit, tracing,
/// timeout and (optionally) CORS middleware.
///
/// # Example
///
/// ```rust
/// use marquee_rest::{create_app_with_config, ServerConfig};
/// use marquee_persistence::backends::memory::MemoryBackend;
///
/// let config = ServerConfig {
///     port: 3000,
///     enable_cors: true,
///     ..Default::default()
/// };
/// let app = create_app_with_config(MemoryBackend::new(), config);
/// ```
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: MovieStorage + 'static,
{
    create_app_with_shared_storage(Arc::new(storage), config)
}

/// Creates the Axum application around storage the caller keeps a handle to.
pub fn create_app_with_shared_storage<S>(storage: Arc<S>, config: ServerConfig) -> Router
where
    S: MovieStorage + 'static,
{
    info!(
        "Creating REST API server with backend: {}",
        storage.backend_name()
    );

    // Create application state
    let state = AppState::new(storage, config.clone());

    // Build the router with all movie routes
    let router = routing::movie_routes::create_routes(state);

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    let router = router.layer(DefaultBodyLimit::max(config.max_body_size));

    // Add CORS if enabled
    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    // Apply remaining middleware
    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    // Configure origins
    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    // Configure methods
    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    // Configure headers
    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG` takes
/// precedence over `level` when set.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "marquee_rest={level},marquee_persistence={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
