//! REST API test harness.
//!
//! Provides a configured test server over a storage backend.

use std::sync::Arc;

use axum_test::TestServer;
use marquee_persistence::backends::memory::MemoryBackend;
use marquee_persistence::backends::sqlite::SqliteBackend;
use marquee_persistence::core::MovieStorage;
use marquee_persistence::types::{MovieRecord, NewMovie};
use marquee_rest::{ServerConfig, create_app_with_shared_storage};

/// Test harness for REST API testing.
///
/// # Example
///
/// ```rust,ignore
/// let app = TestApp::memory();
/// app.seed(fixtures::nolan_catalog()).await;
///
/// let response = app.server.get("/search").await;
/// response.assert_status_ok();
/// ```
pub struct TestApp<S>
where
    S: MovieStorage + 'static,
{
    /// The test server instance.
    pub server: TestServer,

    /// The storage backend, shared with the server.
    pub backend: Arc<S>,
}

impl TestApp<MemoryBackend> {
    /// Creates a harness over an empty in-memory backend.
    pub fn memory() -> Self {
        Self::with_config(MemoryBackend::new(), ServerConfig::for_testing())
    }
}

impl TestApp<SqliteBackend> {
    /// Creates a harness over an empty in-memory SQLite database.
    pub fn sqlite() -> Self {
        let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
        backend.init_schema().expect("Failed to init schema");
        Self::with_config(backend, ServerConfig::for_testing())
    }
}

impl<S> TestApp<S>
where
    S: MovieStorage + 'static,
{
    /// Creates a harness over `backend` with a custom configuration.
    pub fn with_config(backend: S, config: ServerConfig) -> Self {
        let backend = Arc::new(backend);
        let app = create_app_with_shared_storage(Arc::clone(&backend), config);
        let server = TestServer::new(app).expect("Failed to create test server");

        Self { server, backend }
    }

    /// Stores movies directly, bypassing HTTP, in the given order.
    pub async fn seed(&self, movies: Vec<NewMovie>) -> Vec<MovieRecord> {
        let mut stored = Vec::with_capacity(movies.len());
        for movie in movies {
            stored.push(
                self.backend
                    .create(movie)
                    .await
                    .expect("Failed to seed movie"),
            );
        }
        stored
    }
}
