//! In-memory backend implementation.
//!
//! Records live in a vector owned by the backend instance, kept in creation
//! order. Each instance is independent; share one through an `Arc` to give
//! several handlers the same catalog.
//!
//! # Example
//!
//! ```
//! use marquee_persistence::backends::memory::MemoryBackend;
//! use marquee_persistence::core::MovieStorage;
//! use marquee_persistence::types::{MovieFilter, NewMovie};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let backend = MemoryBackend::new();
//! backend
//!     .create(NewMovie::new("Inception", "Christopher Nolan", "Sci-Fi", 2010))
//!     .await
//!     .unwrap();
//! assert_eq!(backend.count(&MovieFilter::All).await.unwrap(), 1);
//! # }
//! ```

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::core::MovieStorage;
use crate::error::StorageResult;
use crate::types::{FindOptions, MovieFilter, MovieRecord, NewMovie};

/// Movie storage held entirely in process memory.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    movies: RwLock<Vec<MovieRecord>>,
}

impl MemoryBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.movies.read().len()
    }

    /// Returns whether the backend holds no records.
    pub fn is_empty(&self) -> bool {
        self.movies.read().is_empty()
    }
}

fn to_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

#[async_trait]
impl MovieStorage for MemoryBackend {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn create(&self, movie: NewMovie) -> StorageResult<MovieRecord> {
        let record = MovieRecord::new(uuid::Uuid::new_v4().to_string(), movie);
        self.movies.write().push(record.clone());
        tracing::trace!(id = %record.id(), "Stored movie in memory");
        Ok(record)
    }

    async fn read(&self, id: &str) -> StorageResult<Option<MovieRecord>> {
        Ok(self
            .movies
            .read()
            .iter()
            .find(|movie| movie.id() == id)
            .cloned())
    }

    async fn update(&self, id: &str, movie: NewMovie) -> StorageResult<Option<MovieRecord>> {
        let mut movies = self.movies.write();
        let Some(slot) = movies.iter_mut().find(|existing| existing.id() == id) else {
            return Ok(None);
        };
        *slot = slot.replaced_with(movie);
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: &str) -> StorageResult<Option<MovieRecord>> {
        let mut movies = self.movies.write();
        Ok(movies
            .iter()
            .position(|movie| movie.id() == id)
            .map(|index| movies.remove(index)))
    }

    async fn find_matching(
        &self,
        filter: &MovieFilter,
        options: &FindOptions,
    ) -> StorageResult<Vec<MovieRecord>> {
        let mut matching: Vec<MovieRecord> = self
            .movies
            .read()
            .iter()
            .filter(|movie| filter.matches(movie))
            .cloned()
            .collect();

        // Stable sort keeps creation order for equal keys.
        matching.sort_by(|a, b| options.sort.compare(a, b));

        let limit = options.limit.map(to_usize).unwrap_or(usize::MAX);
        Ok(matching
            .into_iter()
            .skip(to_usize(options.skip))
            .take(limit)
            .collect())
    }

    async fn count(&self, filter: &MovieFilter) -> StorageResult<u64> {
        let count = self
            .movies
            .read()
            .iter()
            .filter(|movie| filter.matches(movie))
            .count();
        Ok(count as u64)
    }

    async fn health_check(&self) -> StorageResult<()> {
        Ok(())
    }
}
