//! Route configuration for the movie catalog API.
//!
//! This module contains the routing configuration that maps HTTP paths
//! to handlers.

pub mod movie_routes;

pub use movie_routes::create_routes;
