//! Maps a normalized query to a store filter.

use marquee_persistence::types::{MovieFilter, TextField};

use super::normalize::{SearchQuery, SearchType, parse_integer};

/// What a search should do once its query is normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Query the store with this filter.
    Filter(MovieFilter),

    /// Answer with an empty page without touching the store.
    ///
    /// Used when a year search carries a term that is not an integer.
    Empty,
}

/// Selects the lookup for a query.
///
/// A recognized search type without a term lists everything.
///
/// # Example
///
/// ```
/// use marquee_persistence::types::{MovieFilter, TextField};
/// use marquee_rest::search::{Dispatch, SearchQuery, SearchType, dispatch};
///
/// let query = SearchQuery {
///     search_type: SearchType::Director,
///     search_term: Some("nolan".to_string()),
///     page: 0,
///     limit: 10,
/// };
///
/// assert_eq!(
///     dispatch(&query),
///     Dispatch::Filter(MovieFilter::Contains(TextField::Director, "nolan".to_string()))
/// );
/// ```
pub fn dispatch(query: &SearchQuery) -> Dispatch {
    let Some(term) = query.search_term.as_deref() else {
        return Dispatch::Filter(MovieFilter::All);
    };

    let contains = |field| Dispatch::Filter(MovieFilter::Contains(field, term.to_string()));

    match query.search_type {
        SearchType::Title => contains(TextField::Title),
        SearchType::Director => contains(TextField::Director),
        SearchType::Genre => contains(TextField::Genre),
        SearchType::Year => parse_integer(term)
            .and_then(|year| i32::try_from(year).ok())
            .map(|year| Dispatch::Filter(MovieFilter::YearEquals(year)))
            .unwrap_or(Dispatch::Empty),
        SearchType::Unfiltered => Dispatch::Filter(MovieFilter::All),
    }
}
