//! Composite movie search.
//!
//! A search request flows through four stages:
//!
//! 1. [`normalize`] - raw query strings become a typed [`SearchQuery`]
//! 2. [`dispatch`] - the query selects a store filter, or an empty answer
//! 3. [`fetch_page`] - the store returns one page plus the total match count
//! 4. [`PageResult`] - records are reshaped into the public envelope
//!
//! No stage rejects input: malformed values degrade to defaults and an
//! unusable year term yields an empty page. Only store failures surface as
//! errors.

mod dispatch;
mod format;
mod normalize;
mod paginate;

pub use dispatch::{Dispatch, dispatch};
pub use format::{MovieView, PageResult};
pub use normalize::{PageLimits, RawSearchParams, SearchQuery, SearchType, normalize};
pub use paginate::{PageRequest, fetch_page, total_pages};

use marquee_persistence::core::MovieStorage;
use marquee_persistence::error::StorageResult;
use tracing::debug;

/// Runs a normalized query against the store.
///
/// # Example
///
/// ```
/// use marquee_persistence::backends::memory::MemoryBackend;
/// use marquee_persistence::core::MovieStorage;
/// use marquee_persistence::types::NewMovie;
/// use marquee_rest::search::{SearchQuery, SearchType, execute};
///
/// # #[tokio::main]
/// # async fn main() {
/// let backend = MemoryBackend::new();
/// backend
///     .create(NewMovie::new("Inception", "Christopher Nolan", "Sci-Fi", 2010))
///     .await
///     .unwrap();
///
/// let query = SearchQuery {
///     search_type: SearchType::Title,
///     search_term: Some("Incepti".to_string()),
///     page: 0,
///     limit: 10,
/// };
///
/// let result = execute(&backend, &query).await.unwrap();
/// assert_eq!(result.total_count, 1);
/// assert_eq!(result.data[0].title, "Inception");
/// # }
/// ```
pub async fn execute<S>(storage: &S, query: &SearchQuery) -> StorageResult<PageResult>
where
    S: MovieStorage + ?Sized,
{
    let filter = match dispatch(query) {
        Dispatch::Filter(filter) => filter,
        Dispatch::Empty => {
            debug!(
                search_type = %query.search_type,
                "Search term not usable for this field, returning empty page"
            );
            return Ok(PageResult::empty(query.page));
        }
    };

    let request = PageRequest::new(query.page, query.limit);
    let (records, total) = fetch_page(storage, &filter, &request).await?;

    Ok(PageResult::from_page(records, &request, total))
}
