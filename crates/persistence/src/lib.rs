//! Marquee Persistence Layer
//!
//! This crate stores movie records and answers the filtered, sliced and
//! counted queries that the catalog's paginated search is built on.
//!
//! # Backend Features
//!
//! - `sqlite` (default) - SQLite with in-memory and file modes
//!
//! The in-memory [`MemoryBackend`](backends::memory::MemoryBackend) is always
//! available.
//!
//! # Architecture
//!
//! - [`types`] - Movie records, filters and find options
//! - [`error`] - Error types for all operations
//! - [`core`] - The [`MovieStorage`] trait
//! - [`backends`] - Backend implementations
//!
//! # Quick Start
//!
//! ```
//! use marquee_persistence::types::{MovieFilter, MovieRecord, NewMovie, TextField};
//!
//! let record = MovieRecord::new(
//!     "movie-1",
//!     NewMovie::new("Alien", "Ridley Scott", "Horror", 1979),
//! );
//!
//! let filter = MovieFilter::Contains(TextField::Director, "scott".to_string());
//! assert!(filter.matches(&record));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use core::MovieStorage;
pub use error::{StorageError, StorageResult};
pub use types::{FindOptions, MovieFilter, MovieRecord, NewMovie, SortOrder, TextField};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
