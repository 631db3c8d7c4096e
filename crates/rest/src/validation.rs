//! Write-path validation for movie payloads.
//!
//! Checks run in a fixed order (title, director, genre, year) and stop at the
//! first failure. A successful check yields a [`NewMovie`] with trimmed text
//! fields, ready for the store.

use chrono::{Datelike, Utc};
use marquee_persistence::types::NewMovie;
use serde_json::Value;
use thiserror::Error;

/// The first field of a movie payload that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Title missing, not a string, or blank.
    #[error("The title should be a valid string")]
    Title,

    /// Director missing, not a string, or blank.
    #[error("The director should be a valid string")]
    Director,

    /// Genre missing, not a string, or blank.
    #[error("The genre should be a valid string")]
    Genre,

    /// Year missing, not an integer, or outside the accepted range.
    #[error("The year should be a valid number")]
    Year,
}

/// Validates create and update payloads.
///
/// # Example
///
/// ```
/// use marquee_rest::validation::{MovieValidator, ValidationError};
/// use serde_json::json;
///
/// let validator = MovieValidator::new(1888);
///
/// let movie = validator
///     .validate(&json!({
///         "title": " Alien ",
///         "director": "Ridley Scott",
///         "genre": "Horror",
///         "year": 1979
///     }))
///     .unwrap();
/// assert_eq!(movie.title, "Alien");
///
/// let err = validator
///     .validate(&json!({"title": "Alien", "director": "Ridley Scott", "genre": "Horror"}))
///     .unwrap_err();
/// assert_eq!(err, ValidationError::Year);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MovieValidator {
    min_year: i32,
}

impl MovieValidator {
    /// Creates a validator accepting years from `min_year` up to the current year.
    pub fn new(min_year: i32) -> Self {
        Self { min_year }
    }

    /// Returns the earliest accepted year.
    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    /// Validates a JSON payload against the current calendar year.
    pub fn validate(&self, body: &Value) -> Result<NewMovie, ValidationError> {
        self.validate_at(body, Utc::now().year())
    }

    /// Validates a JSON payload, treating `current_year` as the latest valid year.
    pub fn validate_at(&self, body: &Value, current_year: i32) -> Result<NewMovie, ValidationError> {
        let title = non_blank(body, "title").ok_or(ValidationError::Title)?;
        let director = non_blank(body, "director").ok_or(ValidationError::Director)?;
        let genre = non_blank(body, "genre").ok_or(ValidationError::Genre)?;

        let year = body
            .get("year")
            .and_then(whole_number)
            .filter(|year| (i64::from(self.min_year)..=i64::from(current_year)).contains(year))
            .and_then(|year| i32::try_from(year).ok())
            .ok_or(ValidationError::Year)?;

        Ok(NewMovie::new(title, director, genre, year))
    }
}

/// Reads a JSON number with no fractional part, so `2010.0` counts as `2010`.
fn whole_number(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|n| n.fract() == 0.0 && n.abs() <= f64::from(i32::MAX))
            .map(|n| n as i64)
    })
}

fn non_blank<'a>(body: &'a Value, field: &str) -> Option<&'a str> {
    body.get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
