//! SQLite backend implementation.
//!
//! Supports both in-memory databases (for tests and throwaway catalogs) and
//! file-based databases. The in-memory mode keeps a single pooled connection,
//! because each new connection to `:memory:` would see a different database.
//!
//! # Example
//!
//! ```no_run
//! use marquee_persistence::backends::sqlite::SqliteBackend;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Create an in-memory database
//! let backend = SqliteBackend::in_memory()?;
//!
//! // Initialize the schema
//! backend.init_schema()?;
//!
//! // Or open a file-based catalog
//! let backend = SqliteBackend::open("./movies.db")?;
//! backend.init_schema()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE movies (
//!     seq INTEGER PRIMARY KEY AUTOINCREMENT,  -- creation order
//!     id TEXT NOT NULL UNIQUE,
//!     title TEXT NOT NULL,
//!     director TEXT NOT NULL,
//!     genre TEXT NOT NULL,
//!     year INTEGER NOT NULL,
//!     version INTEGER NOT NULL DEFAULT 1,
//!     last_updated TEXT NOT NULL
//! );
//! ```

mod backend;
mod schema;
mod storage;

pub use backend::{SqliteBackend, SqliteBackendConfig};
pub use schema::SCHEMA_VERSION;
