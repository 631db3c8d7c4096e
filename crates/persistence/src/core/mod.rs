//! Core storage traits and abstractions.
//!
//! - [`MovieStorage`] - CRUD plus filtered, paginated and counted reads
//!
//! # Example: Implementing a Storage Backend
//!
//! ```ignore
//! use async_trait::async_trait;
//! use marquee_persistence::core::MovieStorage;
//! use marquee_persistence::error::StorageResult;
//! use marquee_persistence::types::{MovieRecord, NewMovie};
//!
//! struct MyBackend {
//!     // ... backend-specific fields
//! }
//!
//! #[async_trait]
//! impl MovieStorage for MyBackend {
//!     fn backend_name(&self) -> &'static str {
//!         "my-backend"
//!     }
//!
//!     async fn create(&self, movie: NewMovie) -> StorageResult<MovieRecord> {
//!         // Implementation...
//!         todo!()
//!     }
//!
//!     // ... implement other required methods
//! }
//! ```

pub mod storage;

pub use storage::MovieStorage;
