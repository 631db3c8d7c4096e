//! Movie record types.
//!
//! This module defines [`MovieRecord`], a movie as it exists in the store
//! together with its persistence metadata, and [`NewMovie`], the descriptive
//! payload accepted by create and update operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The descriptive fields of a movie, as accepted by write operations.
///
/// Values are expected to be validated before they reach the store; backends
/// persist them as given.
///
/// # Examples
///
/// ```
/// use marquee_persistence::types::NewMovie;
///
/// let movie = NewMovie::new("Inception", "Christopher Nolan", "Sci-Fi", 2010);
/// assert_eq!(movie.year, 2010);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMovie {
    /// Movie title.
    pub title: String,
    /// Director name.
    pub director: String,
    /// Genre label.
    pub genre: String,
    /// Release year.
    pub year: i32,
}

impl NewMovie {
    /// Creates a new payload from its four fields.
    pub fn new(
        title: impl Into<String>,
        director: impl Into<String>,
        genre: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            title: title.into(),
            director: director.into(),
            genre: genre.into(),
            year,
        }
    }
}

/// A movie with persistence metadata.
///
/// The identifier is assigned by the store on creation and never changes.
/// `version` and `last_updated` are internal bookkeeping and are not part of
/// the public representation served over HTTP.
///
/// # Examples
///
/// ```
/// use marquee_persistence::types::{MovieRecord, NewMovie};
///
/// let record = MovieRecord::new(
///     "movie-1",
///     NewMovie::new("Inception", "Christopher Nolan", "Sci-Fi", 2010),
/// );
///
/// assert_eq!(record.id(), "movie-1");
/// assert_eq!(record.version(), 1);
/// assert_eq!(record.title(), "Inception");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Store-assigned identifier.
    id: String,

    /// Descriptive fields.
    #[serde(flatten)]
    fields: NewMovie,

    /// Write counter, starting at 1.
    version: u32,

    /// When the record was last written.
    last_updated: DateTime<Utc>,
}

impl MovieRecord {
    /// Creates a fresh record at version 1.
    pub fn new(id: impl Into<String>, fields: NewMovie) -> Self {
        Self {
            id: id.into(),
            fields,
            version: 1,
            last_updated: Utc::now(),
        }
    }

    /// Rebuilds a record from stored data.
    pub fn from_storage(
        id: impl Into<String>,
        fields: NewMovie,
        version: u32,
        last_updated: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            fields,
            version,
            last_updated,
        }
    }

    /// Returns a copy with the descriptive fields replaced and the version bumped.
    pub fn replaced_with(&self, fields: NewMovie) -> Self {
        Self {
            id: self.id.clone(),
            fields,
            version: self.version + 1,
            last_updated: Utc::now(),
        }
    }

    /// Returns the identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.fields.title
    }

    /// Returns the director.
    pub fn director(&self) -> &str {
        &self.fields.director
    }

    /// Returns the genre.
    pub fn genre(&self) -> &str {
        &self.fields.genre
    }

    /// Returns the release year.
    pub fn year(&self) -> i32 {
        self.fields.year
    }

    /// Returns the descriptive fields.
    pub fn fields(&self) -> &NewMovie {
        &self.fields
    }

    /// Returns the write counter.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Returns when the record was last written.
    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Consumes the record, returning its identifier and descriptive fields.
    pub fn into_parts(self) -> (String, NewMovie) {
        (self.id, self.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inception() -> NewMovie {
        NewMovie::new("Inception", "Christopher Nolan", "Sci-Fi", 2010)
    }

    #[test]
    fn test_new_record_starts_at_version_one() {
        let record = MovieRecord::new("m1", inception());
        assert_eq!(record.version(), 1);
        assert_eq!(record.director(), "Christopher Nolan");
        assert_eq!(record.genre(), "Sci-Fi");
        assert_eq!(record.year(), 2010);
    }

    #[test]
    fn test_replaced_with_keeps_id_and_bumps_version() {
        let record = MovieRecord::new("m1", inception());
        let updated = record.replaced_with(NewMovie::new(
            "Interstellar",
            "Christopher Nolan",
            "Sci-Fi",
            2014,
        ));

        assert_eq!(updated.id(), "m1");
        assert_eq!(updated.version(), 2);
        assert_eq!(updated.title(), "Interstellar");
        assert!(updated.last_updated() >= record.last_updated());
    }

    #[test]
    fn test_into_parts() {
        let record = MovieRecord::new("m1", inception());
        let (id, fields) = record.into_parts();
        assert_eq!(id, "m1");
        assert_eq!(fields, inception());
    }

    #[test]
    fn test_serialization_flattens_fields() {
        let record = MovieRecord::new("m1", inception());
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["id"], "m1");
        assert_eq!(json["title"], "Inception");
        assert_eq!(json["year"], 2010);
        assert_eq!(json["version"], 1);

        let parsed: MovieRecord = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, record);
    }
}
