//! Pagination over the record store.
//!
//! Pages are 0-based: page `n` with limit `l` skips `n * l` matching records.

use marquee_persistence::core::MovieStorage;
use marquee_persistence::error::StorageResult;
use marquee_persistence::types::{FindOptions, MovieFilter, MovieRecord, SortOrder};
use tracing::trace;

/// A logical page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl PageRequest {
    /// Creates a page request; a zero limit is raised to 1.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page,
            limit: limit.max(1),
        }
    }

    /// Returns the logical 0-based page.
    pub fn page(&self) -> u64 {
        self.page
    }

    /// Returns the page size.
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Returns how many matching records precede this page.
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.limit)
    }

    /// Returns the store options for this page, ordered by title.
    pub fn find_options(&self) -> FindOptions {
        FindOptions::new()
            .with_skip(self.offset())
            .with_limit(self.limit)
            .with_sort(SortOrder::TitleAscending)
    }
}

/// Number of pages needed for `total` records at `limit` per page.
///
/// Zero records means zero pages.
pub fn total_pages(total: u64, limit: u64) -> u64 {
    total.div_ceil(limit.max(1))
}

/// Fetches one page of matching records together with the total match count.
///
/// The fetch and the count use the same filter and run concurrently; if
/// either fails the whole call fails.
pub async fn fetch_page<S>(
    storage: &S,
    filter: &MovieFilter,
    request: &PageRequest,
) -> StorageResult<(Vec<MovieRecord>, u64)>
where
    S: MovieStorage + ?Sized,
{
    let options = request.find_options();

    let (records, total) = tokio::try_join!(
        storage.find_matching(filter, &options),
        storage.count(filter)
    )?;

    trace!(
        page = request.page(),
        limit = request.limit(),
        returned = records.len(),
        total,
        "Fetched page"
    );

    Ok((records, total))
}
