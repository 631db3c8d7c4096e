//! Public response shapes.

use marquee_persistence::types::MovieRecord;
use serde::{Deserialize, Serialize};

use super::paginate::{PageRequest, total_pages};

/// A movie as served over HTTP.
///
/// Internal bookkeeping (`version`, `last_updated`) is not included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieView {
    /// Store-assigned identifier.
    pub id: String,
    /// Movie title.
    pub title: String,
    /// Director name.
    pub director: String,
    /// Genre label.
    pub genre: String,
    /// Release year.
    pub year: i32,
}

impl From<MovieRecord> for MovieView {
    fn from(record: MovieRecord) -> Self {
        let (id, fields) = record.into_parts();
        Self {
            id,
            title: fields.title,
            director: fields.director,
            genre: fields.genre,
            year: fields.year,
        }
    }
}

/// The paginated envelope returned by every paginated query.
///
/// # Example
///
/// ```
/// use marquee_rest::search::PageResult;
///
/// let empty = PageResult::empty(3);
/// let json = serde_json::to_value(&empty).unwrap();
/// assert_eq!(
///     json,
///     serde_json::json!({"data": [], "currentPage": 3, "totalCount": 0, "totalPages": 0})
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    /// Movies on this page, ordered by title.
    pub data: Vec<MovieView>,
    /// Logical 0-based page.
    pub current_page: u64,
    /// Number of matching movies across all pages.
    pub total_count: u64,
    /// `ceil(total_count / limit)`.
    pub total_pages: u64,
}

impl PageResult {
    /// The envelope for a query with no matches.
    pub fn empty(page: u64) -> Self {
        Self {
            data: Vec::new(),
            current_page: page,
            total_count: 0,
            total_pages: 0,
        }
    }

    /// Builds the envelope for one fetched page.
    pub fn from_page(records: Vec<MovieRecord>, request: &PageRequest, total_count: u64) -> Self {
        if total_count == 0 {
            return Self::empty(request.page());
        }

        Self {
            data: records.into_iter().map(MovieView::from).collect(),
            current_page: request.page(),
            total_count,
            total_pages: total_pages(total_count, request.limit()),
        }
    }
}
