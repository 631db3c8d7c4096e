//! Test fixtures for REST API testing.

use marquee_persistence::types::NewMovie;
use serde_json::{Value, json};

/// Inception (2010).
pub fn inception() -> NewMovie {
    NewMovie::new("Inception", "Christopher Nolan", "Sci-Fi", 2010)
}

/// The Dark Knight (2008).
pub fn dark_knight() -> NewMovie {
    NewMovie::new("The Dark Knight", "Christopher Nolan", "Action", 2008)
}

/// Alien (1979).
pub fn alien() -> NewMovie {
    NewMovie::new("Alien", "Ridley Scott", "Horror", 1979)
}

/// Blade Runner (1982).
pub fn blade_runner() -> NewMovie {
    NewMovie::new("Blade Runner", "Ridley Scott", "Sci-Fi", 1982)
}

/// Mad Max: Fury Road (2015).
pub fn fury_road() -> NewMovie {
    NewMovie::new("Mad Max: Fury Road", "George Miller", "Action", 2015)
}

/// Amélie (2001), upper-cased with non-ASCII letters.
pub fn amelie() -> NewMovie {
    NewMovie::new("AMÉLIE", "Jean-Pierre Jeunet", "Comédie", 2001)
}

/// The two-movie catalog used by the search scenarios.
pub fn nolan_catalog() -> Vec<NewMovie> {
    vec![inception(), dark_knight()]
}

/// A catalog spanning several directors, genres and years.
pub fn mixed_catalog() -> Vec<NewMovie> {
    vec![dark_knight(), alien(), fury_road(), inception(), blade_runner()]
}

/// `count` movies titled `Movie 000` .. in a single genre.
pub fn numbered_catalog(count: usize) -> Vec<NewMovie> {
    (0..count)
        .map(|i| NewMovie::new(format!("Movie {:03}", i), "Director", "Drama", 2000))
        .collect()
}

/// The JSON payload for a movie.
pub fn payload(movie: &NewMovie) -> Value {
    json!({
        "title": movie.title,
        "director": movie.director,
        "genre": movie.genre,
        "year": movie.year
    })
}
