//! Query normalization.
//!
//! Turns the raw, untyped query string values of a search request into a
//! [`SearchQuery`]. Nothing here fails: malformed values fall back to their
//! documented defaults.

use std::fmt;

/// Raw search parameters exactly as they arrived in the query string.
///
/// Every field is kept as a string so that malformed numbers degrade to
/// defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSearchParams {
    /// Which field to search (`title`, `director`, `genre`, `year`).
    pub search_type: Option<String>,
    /// The value to search for.
    pub search_term: Option<String>,
    /// Logical 0-based page.
    pub page: Option<String>,
    /// Page size.
    pub limit: Option<String>,
}

/// The field a search is dispatched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchType {
    /// Substring match on title.
    Title,
    /// Substring match on director.
    Director,
    /// Substring match on genre.
    Genre,
    /// Exact match on year.
    Year,
    /// Missing or unrecognized; lists everything.
    Unfiltered,
}

impl SearchType {
    /// Parses a search type, ignoring surrounding whitespace and case.
    ///
    /// Unrecognized values map to [`SearchType::Unfiltered`].
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "title" => SearchType::Title,
            "director" => SearchType::Director,
            "genre" => SearchType::Genre,
            "year" => SearchType::Year,
            _ => SearchType::Unfiltered,
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchType::Title => "title",
            SearchType::Director => "director",
            SearchType::Genre => "genre",
            SearchType::Year => "year",
            SearchType::Unfiltered => "none",
        };
        f.write_str(name)
    }
}

/// Page size defaults applied during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    /// Used when `limit` is missing, malformed or below 1.
    pub default_limit: u64,
}

impl PageLimits {
    /// Creates limits, keeping the default at least 1.
    pub fn new(default_limit: u64) -> Self {
        Self {
            default_limit: default_limit.max(1),
        }
    }
}

impl Default for PageLimits {
    fn default() -> Self {
        Self::new(10)
    }
}

/// A normalized, typed search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Field to dispatch on.
    pub search_type: SearchType,
    /// Trimmed search term; `None` only when absent.
    pub search_term: Option<String>,
    /// Logical 0-based page.
    pub page: u64,
    /// Page size, at least 1.
    pub limit: u64,
}

impl SearchQuery {
    /// Returns the same paging with the filter dropped.
    pub fn unfiltered(self) -> Self {
        Self {
            search_type: SearchType::Unfiltered,
            search_term: None,
            ..self
        }
    }
}

/// Normalizes raw parameters into a [`SearchQuery`].
///
/// # Example
///
/// ```
/// use marquee_rest::search::{PageLimits, RawSearchParams, SearchType, normalize};
///
/// let raw = RawSearchParams {
///     search_type: Some(" TITLE ".to_string()),
///     search_term: Some(" incep ".to_string()),
///     page: Some("-2".to_string()),
///     limit: Some("abc".to_string()),
/// };
///
/// let query = normalize(&raw, &PageLimits::default());
/// assert_eq!(query.search_type, SearchType::Title);
/// assert_eq!(query.search_term.as_deref(), Some("incep"));
/// assert_eq!(query.page, 0);
/// assert_eq!(query.limit, 10);
/// ```
pub fn normalize(raw: &RawSearchParams, limits: &PageLimits) -> SearchQuery {
    let search_type = raw
        .search_type
        .as_deref()
        .map(SearchType::parse)
        .unwrap_or(SearchType::Unfiltered);

    let search_term = raw
        .search_term
        .as_deref()
        .map(|term| term.trim().to_string());

    let page = raw
        .page
        .as_deref()
        .and_then(parse_integer)
        .and_then(|page| u64::try_from(page).ok())
        .unwrap_or(0);

    let limit = raw
        .limit
        .as_deref()
        .and_then(parse_integer)
        .and_then(|limit| u64::try_from(limit).ok())
        .filter(|limit| *limit >= 1)
        .unwrap_or(limits.default_limit);

    SearchQuery {
        search_type,
        search_term,
        page,
        limit,
    }
}

/// Strict integer parse of a trimmed string.
pub(crate) fn parse_integer(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}
