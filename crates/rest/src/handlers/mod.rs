//! HTTP request handlers for the movie catalog.
//!
//! - [`search`] - Composite paginated search
//! - [`list`] - Paginated listing and exact-match lists
//! - [`read`] - Read one movie by ID or title
//! - [`create`] - Create a movie
//! - [`update`] - Replace a movie's fields
//! - [`delete`] - Delete a movie
//! - [`health`] - Health check endpoints

pub mod create;
pub mod delete;
pub mod health;
pub mod list;
pub mod read;
pub mod search;
pub mod update;

// Re-export handlers for convenience
pub use create::create_handler;
pub use delete::delete_handler;
pub use health::{health_handler, liveness_handler};
pub use list::{list_by_director_handler, list_by_genre_handler, list_by_year_handler, list_handler};
pub use read::{read_by_title_handler, read_handler};
pub use search::search_handler;
pub use update::update_handler;
