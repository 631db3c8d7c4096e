//! Core movie storage trait.
//!
//! This module defines the [`MovieStorage`] trait: the write operations the
//! catalog needs plus the filtered, sliced and counted reads that paginated
//! search is built on.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::{FindOptions, MovieFilter, MovieRecord, NewMovie};

/// Storage trait for movie records.
///
/// Absent records are reported as `None` rather than as errors, so callers
/// decide what "not found" means for them.
///
/// # Consistency
///
/// `find_matching` and `count` must apply identical predicate logic for the
/// same [`MovieFilter`]. They may be awaited concurrently; they are not
/// required to be atomic with respect to concurrent writes.
///
/// # Example
///
/// ```ignore
/// use marquee_persistence::core::MovieStorage;
/// use marquee_persistence::types::{FindOptions, MovieFilter, NewMovie, SortOrder, TextField};
///
/// async fn example<S: MovieStorage>(storage: &S) -> StorageResult<()> {
///     let created = storage
///         .create(NewMovie::new("Inception", "Christopher Nolan", "Sci-Fi", 2010))
///         .await?;
///
///     let filter = MovieFilter::Contains(TextField::Title, "incep".to_string());
///     let options = FindOptions::new().with_limit(10).with_sort(SortOrder::TitleAscending);
///     let (page, total) = tokio::try_join!(
///         storage.find_matching(&filter, &options),
///         storage.count(&filter),
///     )?;
///     assert_eq!(total, 1);
///     assert_eq!(page[0].id(), created.id());
///
///     storage.delete(created.id()).await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait MovieStorage: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Persists a new movie.
    ///
    /// # Returns
    ///
    /// The stored record with its assigned identifier at version 1.
    async fn create(&self, movie: NewMovie) -> StorageResult<MovieRecord>;

    /// Reads a movie by identifier.
    async fn read(&self, id: &str) -> StorageResult<Option<MovieRecord>>;

    /// Replaces the descriptive fields of an existing movie.
    ///
    /// The identifier never changes and the version is incremented.
    ///
    /// # Returns
    ///
    /// The updated record, or `None` if no movie has this identifier.
    async fn update(&self, id: &str, movie: NewMovie) -> StorageResult<Option<MovieRecord>>;

    /// Deletes a movie.
    ///
    /// # Returns
    ///
    /// The removed record, or `None` if no movie has this identifier.
    async fn delete(&self, id: &str) -> StorageResult<Option<MovieRecord>>;

    /// Returns the records matching `filter`, sliced and ordered by `options`.
    async fn find_matching(
        &self,
        filter: &MovieFilter,
        options: &FindOptions,
    ) -> StorageResult<Vec<MovieRecord>>;

    /// Counts every record matching `filter`, ignoring any slicing.
    async fn count(&self, filter: &MovieFilter) -> StorageResult<u64>;

    /// Checks whether the backend is able to serve requests.
    async fn health_check(&self) -> StorageResult<()>;

    /// Checks if a movie exists.
    async fn exists(&self, id: &str) -> StorageResult<bool> {
        Ok(self.read(id).await?.is_some())
    }
}
