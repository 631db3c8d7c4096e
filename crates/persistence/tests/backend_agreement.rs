//! Cross-backend integration tests.
//!
//! Every backend must return the same records, in the same order, as the
//! reference semantics of [`MovieFilter::matches`] and [`SortOrder::compare`].

use marquee_persistence::backends::memory::MemoryBackend;
use marquee_persistence::core::MovieStorage;
use marquee_persistence::types::{
    FindOptions, MovieFilter, MovieRecord, NewMovie, SortOrder, TextField,
};

#[cfg(feature = "sqlite")]
use marquee_persistence::backends::sqlite::SqliteBackend;

// ============================================================================
// Helper Functions
// ============================================================================

fn catalog() -> Vec<NewMovie> {
    vec![
        NewMovie::new("The Dark Knight", "Christopher Nolan", "Action", 2008),
        NewMovie::new("Alien", "Ridley Scott", "Horror", 1979),
        NewMovie::new("Mad Max: Fury Road", "George Miller", "Action", 2015),
        NewMovie::new("Inception", "Christopher Nolan", "Sci-Fi", 2010),
        NewMovie::new("Blade Runner", "Ridley Scott", "Sci-Fi", 1982),
        NewMovie::new("100% Wolf", "Alexs Stadermann", "Animation", 2020),
        NewMovie::new("Alien", "Someone Else", "Horror", 1979),
        NewMovie::new("AMÉLIE", "Jean-Pierre Jeunet", "Comédie", 2001),
    ]
}

fn filters() -> Vec<MovieFilter> {
    vec![
        MovieFilter::All,
        MovieFilter::Contains(TextField::Title, "ALIEN".to_string()),
        MovieFilter::Contains(TextField::Title, "%".to_string()),
        MovieFilter::Contains(TextField::Title, "_".to_string()),
        MovieFilter::Contains(TextField::Director, "nolan".to_string()),
        MovieFilter::Contains(TextField::Genre, "sci".to_string()),
        MovieFilter::Contains(TextField::Title, "amélie".to_string()),
        MovieFilter::Contains(TextField::Genre, "COMÉD".to_string()),
        MovieFilter::TextEquals(TextField::Genre, "Action".to_string()),
        MovieFilter::TextEquals(TextField::Genre, "action".to_string()),
        MovieFilter::TextEquals(TextField::Title, "Alien".to_string()),
        MovieFilter::YearEquals(1979),
        MovieFilter::YearEquals(1900),
    ]
}

async fn seed<S: MovieStorage>(storage: &S) -> Vec<MovieRecord> {
    let mut stored = Vec::new();
    for movie in catalog() {
        stored.push(storage.create(movie).await.expect("Failed to seed movie"));
    }
    stored
}

fn expected(stored: &[MovieRecord], filter: &MovieFilter, options: &FindOptions) -> Vec<String> {
    let mut matching: Vec<&MovieRecord> = stored.iter().filter(|m| filter.matches(m)).collect();
    matching.sort_by(|a, b| options.sort.compare(a, b));
    matching
        .into_iter()
        .skip(options.skip as usize)
        .take(options.limit.map_or(usize::MAX, |l| l as usize))
        .map(|m| m.id().to_string())
        .collect()
}

async fn assert_agrees_with_reference<S: MovieStorage>(storage: &S) {
    let stored = seed(storage).await;

    let option_sets = [
        FindOptions::new(),
        FindOptions::new().with_sort(SortOrder::TitleAscending),
        FindOptions::new()
            .with_sort(SortOrder::TitleAscending)
            .with_skip(1)
            .with_limit(2),
        FindOptions::new().with_skip(50),
    ];

    for filter in filters() {
        let total = stored.iter().filter(|m| filter.matches(m)).count() as u64;
        assert_eq!(
            storage.count(&filter).await.unwrap(),
            total,
            "{} count disagrees for {:?}",
            storage.backend_name(),
            filter
        );

        for options in &option_sets {
            let found: Vec<String> = storage
                .find_matching(&filter, options)
                .await
                .unwrap()
                .iter()
                .map(|m| m.id().to_string())
                .collect();
            assert_eq!(
                found,
                expected(&stored, &filter, options),
                "{} disagrees for {:?} with {:?}",
                storage.backend_name(),
                filter,
                options
            );
        }
    }
}

async fn assert_update_and_delete_cycle<S: MovieStorage>(storage: &S) {
    let created = storage
        .create(NewMovie::new("Alien", "Ridley Scott", "Horror", 1979))
        .await
        .unwrap();
    assert_eq!(created.version(), 1);

    let updated = storage
        .update(
            created.id(),
            NewMovie::new("Aliens", "James Cameron", "Action", 1986),
        )
        .await
        .unwrap()
        .expect("movie should exist");
    assert_eq!(updated.id(), created.id());
    assert_eq!(updated.version(), 2);
    assert_eq!(updated.title(), "Aliens");

    let deleted = storage.delete(created.id()).await.unwrap();
    assert_eq!(deleted.map(|m| m.title().to_string()).as_deref(), Some("Aliens"));

    assert!(storage.read(created.id()).await.unwrap().is_none());
    assert!(storage.delete(created.id()).await.unwrap().is_none());
    assert!(
        storage
            .update(created.id(), NewMovie::new("X", "Y", "Z", 2000))
            .await
            .unwrap()
            .is_none()
    );
}

// ============================================================================
// Memory
// ============================================================================

#[tokio::test]
async fn test_memory_agrees_with_reference() {
    assert_agrees_with_reference(&MemoryBackend::new()).await;
}

#[tokio::test]
async fn test_memory_update_and_delete() {
    assert_update_and_delete_cycle(&MemoryBackend::new()).await;
}

// ============================================================================
// SQLite
// ============================================================================

#[cfg(feature = "sqlite")]
fn create_sqlite_backend() -> SqliteBackend {
    let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
    backend.init_schema().expect("Failed to initialize schema");
    backend
}

#[cfg(feature = "sqlite")]
#[tokio::test]
async fn test_sqlite_agrees_with_reference() {
    assert_agrees_with_reference(&create_sqlite_backend()).await;
}

#[cfg(feature = "sqlite")]
#[tokio::test]
async fn test_sqlite_update_and_delete() {
    assert_update_and_delete_cycle(&create_sqlite_backend()).await;
}

#[cfg(feature = "sqlite")]
#[tokio::test]
async fn test_sqlite_dyn_storage() {
    use std::sync::Arc;

    let storage: Arc<dyn MovieStorage> = Arc::new(create_sqlite_backend());
    storage
        .create(NewMovie::new("Inception", "Christopher Nolan", "Sci-Fi", 2010))
        .await
        .unwrap();

    assert_eq!(storage.count(&MovieFilter::All).await.unwrap(), 1);
    assert!(storage.health_check().await.is_ok());
}
