//! Search parameters extractor.
//!
//! Reads `searchType`, `searchTerm`, `page` and `limit` from the query string
//! as raw strings. Extraction never fails: unknown keys are ignored, and when
//! a key repeats the first occurrence wins.

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use tracing::debug;

use crate::search::RawSearchParams;

/// Axum extractor for search parameters.
///
/// # Example
///
/// ```rust,ignore
/// use marquee_rest::extractors::SearchParams;
///
/// async fn search_handler(SearchParams(raw): SearchParams) {
///     println!("searchType = {:?}", raw.search_type);
/// }
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchParams(pub RawSearchParams);

impl SearchParams {
    /// Builds search params from decoded query pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut raw = RawSearchParams::default();

        for (name, value) in pairs {
            let slot = match name.as_str() {
                "searchType" => &mut raw.search_type,
                "searchTerm" => &mut raw.search_term,
                "page" => &mut raw.page,
                "limit" => &mut raw.limit,
                _ => continue,
            };
            slot.get_or_insert(value);
        }

        SearchParams(raw)
    }

    /// Consumes the extractor and returns the raw parameters.
    pub fn into_inner(self) -> RawSearchParams {
        self.0
    }
}

impl<S> FromRequestParts<S> for SearchParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match Query::<Vec<(String, String)>>::try_from_uri(&parts.uri) {
            Ok(Query(pairs)) => Ok(SearchParams::from_pairs(pairs)),
            Err(e) => {
                debug!(error = %e, "Unreadable query string, using default search parameters");
                Ok(SearchParams::default())
            }
        }
    }
}
