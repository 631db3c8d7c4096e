//! Integration tests for the movie CRUD and exact-match endpoints.

mod common;

use std::sync::Arc;

use axum::http::{StatusCode, header};
use axum_test::TestServer;
use marquee_persistence::backends::memory::MemoryBackend;
use marquee_persistence::backends::sqlite::SqliteBackend;
use marquee_persistence::core::MovieStorage;
use marquee_rest::routing::movie_routes::create_minimal_routes;
use marquee_rest::{AppState, ServerConfig};
use serde_json::{Value, json};

use common::fixtures::{self, payload};
use common::harness::TestApp;

fn message(body: &Value) -> &str {
    body["message"].as_str().unwrap_or_default()
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_returns_created_movie() {
    let app = TestApp::memory();

    let response = app
        .server
        .post("/movies")
        .json(&payload(&fixtures::inception()))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    let id = body["id"].as_str().expect("id should be a string").to_string();
    assert!(!id.is_empty());
    assert_eq!(body["title"], "Inception");
    assert_eq!(body["year"], 2010);
    assert!(body.get("version").is_none());

    let location = response.header(header::LOCATION);
    assert_eq!(location.to_str().unwrap(), format!("/movies/{}", id));

    assert!(app.backend.exists(&id).await.unwrap());
}

#[tokio::test]
async fn test_create_trims_text_fields() {
    let app = TestApp::memory();

    let response = app
        .server
        .post("/movies")
        .json(&json!({
            "title": "  Alien ",
            "director": "Ridley Scott ",
            "genre": " Horror",
            "year": 1979
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["title"], "Alien");
    assert_eq!(body["director"], "Ridley Scott");
    assert_eq!(body["genre"], "Horror");
}

#[tokio::test]
async fn test_create_reports_first_invalid_field() {
    let app = TestApp::memory();
    let cases = [
        (json!({}), "The title should be a valid string"),
        (
            json!({"title": "Alien", "director": "  ", "genre": "Horror", "year": 1979}),
            "The director should be a valid string",
        ),
        (
            json!({"title": "Alien", "director": "Ridley Scott", "genre": 7, "year": 1979}),
            "The genre should be a valid string",
        ),
        (
            json!({"title": "Alien", "director": "Ridley Scott", "genre": "Horror"}),
            "The year should be a valid number",
        ),
        (
            json!({"title": "Alien", "director": "Ridley Scott", "genre": "Horror", "year": "1979"}),
            "The year should be a valid number",
        ),
        (
            json!({"title": "Alien", "director": "Ridley Scott", "genre": "Horror", "year": 3000}),
            "The year should be a valid number",
        ),
        (
            json!({"title": "Alien", "director": "Ridley Scott", "genre": "Horror", "year": 1700}),
            "The year should be a valid number",
        ),
    ];

    for (body, expected) in cases {
        let response = app.server.post("/movies").json(&body).await;
        response.assert_status_bad_request();
        assert_eq!(message(&response.json::<Value>()), expected, "body: {}", body);
    }

    assert!(app.backend.is_empty());
}

#[tokio::test]
async fn test_create_rejects_malformed_json() {
    let app = TestApp::memory();

    let response = app
        .server
        .post("/movies")
        .bytes("{\"title\": ".into())
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    assert!(message(&response.json::<Value>()).starts_with("Invalid JSON"));
}

#[tokio::test]
async fn test_create_rejects_non_json_body() {
    let app = TestApp::memory();

    let response = app.server.post("/movies").text("Alien, 1979").await;

    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_create_rejects_oversized_body() {
    let config = ServerConfig {
        max_body_size: 64,
        ..ServerConfig::for_testing()
    };
    let app = TestApp::with_config(MemoryBackend::new(), config);

    let response = app
        .server
        .post("/movies")
        .json(&json!({
            "title": "A".repeat(200),
            "director": "Someone",
            "genre": "Drama",
            "year": 2000
        }))
        .await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    assert!(app.backend.is_empty());
}

// =============================================================================
// Read / Update / Delete
// =============================================================================

#[tokio::test]
async fn test_read_by_id() {
    let app = TestApp::memory();
    let stored = app.seed(vec![fixtures::alien()]).await;

    let response = app.server.get(&format!("/movies/{}", stored[0].id())).await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({
            "id": stored[0].id(),
            "title": "Alien",
            "director": "Ridley Scott",
            "genre": "Horror",
            "year": 1979
        })
    );
}

#[tokio::test]
async fn test_read_unknown_id_is_not_found() {
    let app = TestApp::memory();

    let response = app.server.get("/movies/does-not-exist").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>(), json!({"message": "Movie not found"}));
}

#[tokio::test]
async fn test_update_replaces_fields() {
    let app = TestApp::memory();
    let stored = app.seed(vec![fixtures::alien()]).await;
    let path = format!("/movies/{}", stored[0].id());

    let response = app
        .server
        .put(&path)
        .json(&json!({
            "title": "Aliens",
            "director": "James Cameron",
            "genre": "Action",
            "year": 1986
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["id"], stored[0].id());
    assert_eq!(body["title"], "Aliens");
    assert_eq!(body["director"], "James Cameron");

    let stored_now = app.backend.read(stored[0].id()).await.unwrap().unwrap();
    assert_eq!(stored_now.title(), "Aliens");
    assert_eq!(stored_now.version(), stored[0].version() + 1);
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let app = TestApp::memory();

    let response = app
        .server
        .put("/movies/missing")
        .json(&payload(&fixtures::alien()))
        .await;

    response.assert_status_not_found();
    assert_eq!(message(&response.json::<Value>()), "Movie not found");
}

#[tokio::test]
async fn test_update_validates_before_lookup() {
    let app = TestApp::memory();

    let response = app
        .server
        .put("/movies/missing")
        .json(&json!({"title": "Aliens"}))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        message(&response.json::<Value>()),
        "The director should be a valid string"
    );
}

#[tokio::test]
async fn test_delete_then_not_found() {
    let app = TestApp::memory();
    let stored = app.seed(vec![fixtures::alien()]).await;
    let path = format!("/movies/{}", stored[0].id());

    let response = app.server.delete(&path).await;
    response.assert_status(StatusCode::NO_CONTENT);

    let response = app.server.delete(&path).await;
    response.assert_status_not_found();
    assert_eq!(message(&response.json::<Value>()), "Movie not found");

    app.server.get(&path).await.assert_status_not_found();
}

// =============================================================================
// Exact-match lookups
// =============================================================================

#[tokio::test]
async fn test_title_lookup_is_exact() {
    let app = TestApp::memory();
    app.seed(fixtures::mixed_catalog()).await;

    let response = app.server.get("/movies/title/The%20Dark%20Knight").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["year"], 2008);

    let response = app.server.get("/movies/title/the%20dark%20knight").await;
    response.assert_status_not_found();
    assert_eq!(message(&response.json::<Value>()), "Movie not found");

    app.server
        .get("/movies/title/Dark")
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_genre_list_keeps_insertion_order() {
    let app = TestApp::memory();
    app.seed(fixtures::mixed_catalog()).await;

    let response = app.server.get("/movies/genre/Action").await;

    response.assert_status_ok();
    let titles: Vec<_> = response
        .json::<Vec<Value>>()
        .iter()
        .map(|movie| movie["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, vec!["The Dark Knight", "Mad Max: Fury Road"]);
}

#[tokio::test]
async fn test_exact_lists_report_missing_entity() {
    let app = TestApp::memory();
    app.seed(fixtures::mixed_catalog()).await;

    let cases = [
        ("/movies/genre/Western", "Genre not found"),
        ("/movies/genre/action", "Genre not found"),
        ("/movies/director/Stanley%20Kubrick", "Director not found"),
        ("/movies/year/1950", "Year not found"),
        ("/movies/year/abc", "Year not found"),
    ];

    for (path, expected) in cases {
        let response = app.server.get(path).await;
        response.assert_status_not_found();
        assert_eq!(message(&response.json::<Value>()), expected, "path: {}", path);
    }
}

#[tokio::test]
async fn test_director_and_year_lists() {
    let app = TestApp::memory();
    app.seed(fixtures::mixed_catalog()).await;

    let response = app.server.get("/movies/director/Ridley%20Scott").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Vec<Value>>().len(), 2);

    let response = app.server.get("/movies/year/1982").await;
    response.assert_status_ok();
    let movies = response.json::<Vec<Value>>();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0]["title"], "Blade Runner");
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_reports_backend() {
    let app = TestApp::memory();

    let response = app.server.get("/health").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["backend"], "memory");
    assert!(body["timestamp"].is_string());

    app.server.get("/_liveness").await.assert_status_ok();
}

#[tokio::test]
async fn test_minimal_routes() {
    let backend = Arc::new(MemoryBackend::new());
    let stored = backend.create(fixtures::alien()).await.unwrap();
    let router = create_minimal_routes(AppState::new(backend, ServerConfig::for_testing()));
    let server = TestServer::new(router).unwrap();

    server.get("/health").await.assert_status_ok();
    server
        .get(&format!("/movies/{}", stored.id()))
        .await
        .assert_status_ok();
    server.get("/movies").await.assert_status_not_found();
}

// =============================================================================
// SQLite
// =============================================================================

#[tokio::test]
async fn test_sqlite_crud_round() {
    let app = TestApp::sqlite();

    let response = app
        .server
        .post("/movies")
        .json(&payload(&fixtures::blade_runner()))
        .await;
    response.assert_status(StatusCode::CREATED);
    let id = response.json::<Value>()["id"].as_str().unwrap().to_string();
    let path = format!("/movies/{}", id);

    let response = app
        .server
        .put(&path)
        .json(&json!({
            "title": "Blade Runner 2049",
            "director": "Denis Villeneuve",
            "genre": "Sci-Fi",
            "year": 2017
        }))
        .await;
    response.assert_status_ok();

    let response = app.server.get("/movies/year/2017").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Vec<Value>>()[0]["id"], id);

    app.server
        .delete(&path)
        .await
        .assert_status(StatusCode::NO_CONTENT);
    app.server.get(&path).await.assert_status_not_found();

    let body = app.server.get("/health").await.json::<Value>();
    assert_eq!(body["backend"], "sqlite");
}

#[tokio::test]
async fn test_sqlite_file_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("movies.db");

    let id = {
        let backend = SqliteBackend::open(&db_path).unwrap();
        backend.init_schema().unwrap();
        let app = TestApp::with_config(backend, ServerConfig::for_testing());

        let response = app
            .server
            .post("/movies")
            .json(&payload(&fixtures::fury_road()))
            .await;
        response.assert_status(StatusCode::CREATED);
        response.json::<Value>()["id"].as_str().unwrap().to_string()
    };

    let backend = SqliteBackend::open(&db_path).unwrap();
    backend.init_schema().unwrap();
    let app = TestApp::with_config(backend, ServerConfig::for_testing());

    let response = app.server.get(&format!("/movies/{}", id)).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["title"], "Mad Max: Fury Road");
}
