//! Query types for movie lookups.
//!
//! A query is a [`MovieFilter`] (which records match) plus [`FindOptions`]
//! (which slice of the matching records to return, and in what order). The
//! same filter value is handed to both `find_matching` and `count` so the two
//! always agree on what "matching" means.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::MovieRecord;

/// A text field of a movie that can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextField {
    /// The title.
    Title,
    /// The director.
    Director,
    /// The genre.
    Genre,
}

impl TextField {
    /// Returns the column / property name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextField::Title => "title",
            TextField::Director => "director",
            TextField::Genre => "genre",
        }
    }

    /// Reads this field from a record.
    pub fn value_of<'a>(&self, record: &'a MovieRecord) -> &'a str {
        match self {
            TextField::Title => record.title(),
            TextField::Director => record.director(),
            TextField::Genre => record.genre(),
        }
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Predicate selecting movie records.
///
/// # Examples
///
/// ```
/// use marquee_persistence::types::{MovieFilter, MovieRecord, NewMovie, TextField};
///
/// let record = MovieRecord::new(
///     "m1",
///     NewMovie::new("Inception", "Christopher Nolan", "Sci-Fi", 2010),
/// );
///
/// assert!(MovieFilter::All.matches(&record));
/// assert!(MovieFilter::Contains(TextField::Title, "INCEPT".into()).matches(&record));
/// assert!(!MovieFilter::TextEquals(TextField::Title, "inception".into()).matches(&record));
/// assert!(MovieFilter::YearEquals(2010).matches(&record));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovieFilter {
    /// No constraint.
    All,

    /// Case-insensitive substring match on a text field.
    ///
    /// The term is a literal: wildcard characters have no special meaning.
    Contains(TextField, String),

    /// Exact, case-sensitive equality on a text field.
    TextEquals(TextField, String),

    /// Exact equality on the release year.
    YearEquals(i32),
}

impl MovieFilter {
    /// Returns whether the record satisfies this filter.
    pub fn matches(&self, record: &MovieRecord) -> bool {
        match self {
            MovieFilter::All => true,
            MovieFilter::Contains(field, term) => field
                .value_of(record)
                .to_lowercase()
                .contains(&term.to_lowercase()),
            MovieFilter::TextEquals(field, value) => field.value_of(record) == value,
            MovieFilter::YearEquals(year) => record.year() == *year,
        }
    }
}

/// Order in which matching records are returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// The order in which records were created.
    #[default]
    Insertion,

    /// Ascending by title, ties broken by id.
    TitleAscending,
}

impl SortOrder {
    /// Compares two records under this order.
    ///
    /// Returns `Ordering::Equal` for [`SortOrder::Insertion`]; callers rely on
    /// a stable sort to keep creation order.
    pub fn compare(&self, a: &MovieRecord, b: &MovieRecord) -> Ordering {
        match self {
            SortOrder::Insertion => Ordering::Equal,
            SortOrder::TitleAscending => a
                .title()
                .cmp(b.title())
                .then_with(|| a.id().cmp(b.id())),
        }
    }
}

/// Slice and ordering modifiers for `find_matching`.
///
/// # Examples
///
/// ```
/// use marquee_persistence::types::{FindOptions, SortOrder};
///
/// let options = FindOptions::new()
///     .with_skip(20)
///     .with_limit(10)
///     .with_sort(SortOrder::TitleAscending);
///
/// assert_eq!(options.skip, 20);
/// assert_eq!(options.limit, Some(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FindOptions {
    /// Number of matching records to skip.
    pub skip: u64,

    /// Maximum number of records to return; `None` means no limit.
    pub limit: Option<u64>,

    /// Result ordering.
    pub sort: SortOrder,
}

impl FindOptions {
    /// Creates options returning every match in insertion order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of records to skip.
    pub fn with_skip(mut self, skip: u64) -> Self {
        self.skip = skip;
        self
    }

    /// Sets the maximum number of records to return.
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the result ordering.
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }
}
