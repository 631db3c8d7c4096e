//! Search handler.
//!
//! `GET [base]/search?searchType=&searchTerm=&page=&limit=`

use axum::{Json, extract::State};
use marquee_persistence::core::MovieStorage;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::SearchParams;
use crate::search::{self, PageResult};
use crate::state::AppState;

/// Handler for the composite search.
///
/// Malformed parameters degrade to defaults and no match is an empty page,
/// so the only failure is a store error.
///
/// # HTTP Request
///
/// `GET [base]/search?searchType=title&searchTerm=incep&page=0&limit=10`
///
/// # Response
///
/// - `200 OK` - Returns a page envelope
/// - `500 Internal Server Error` - The store failed
pub async fn search_handler<S>(
    State(state): State<AppState<S>>,
    SearchParams(raw): SearchParams,
) -> RestResult<Json<PageResult>>
where
    S: MovieStorage,
{
    let query = search::normalize(&raw, &state.page_limits());

    debug!(
        search_type = %query.search_type,
        search_term = ?query.search_term,
        page = query.page,
        limit = query.limit,
        "Processing search request"
    );

    let result = search::execute(state.storage(), &query).await?;

    debug!(
        returned = result.data.len(),
        total = result.total_count,
        "Search complete"
    );

    Ok(Json(result))
}
