//! Axum extractors for the movie catalog.
//!
//! - [`MovieBody`] - Extract the JSON body of write requests
//! - [`SearchParams`] - Extract raw search and paging parameters

mod movie_body;
mod search_params;

pub use movie_body::{MovieBody, MovieBodyRejection};
pub use search_params::SearchParams;
