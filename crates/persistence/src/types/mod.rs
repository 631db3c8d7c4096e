//! Core types for the persistence layer.
//!
//! - [`MovieRecord`], [`NewMovie`] - Stored movies and write payloads
//! - [`MovieFilter`], [`TextField`] - The predicate vocabulary
//! - [`FindOptions`], [`SortOrder`] - Skip / limit / ordering modifiers
//!
//! # Examples
//!
//! ```
//! use marquee_persistence::types::{FindOptions, MovieFilter, SortOrder, TextField};
//!
//! let filter = MovieFilter::Contains(TextField::Genre, "action".to_string());
//! let options = FindOptions::new()
//!     .with_skip(0)
//!     .with_limit(10)
//!     .with_sort(SortOrder::TitleAscending);
//! # let _ = (filter, options);
//! ```

mod movie;
mod query;

pub use movie::{MovieRecord, NewMovie};
pub use query::{FindOptions, MovieFilter, SortOrder, TextField};
