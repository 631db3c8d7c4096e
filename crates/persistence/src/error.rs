//! Error types for the persistence layer.
//!
//! Lookups that find nothing are not errors here: storage operations return
//! `Option` for absent records and reserve [`StorageError`] for failures of the
//! backend itself or for rows that cannot be decoded.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Backend-specific errors
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// Stored record errors
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Errors related to the shape of stored records.
#[derive(Error, Debug)]
pub enum RecordError {
    /// A stored row could not be turned back into a movie record.
    #[error("corrupt movie record {id}: {message}")]
    Corrupt { id: String, message: String },
}

/// Errors originating from the database backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend is currently unavailable.
    #[error("backend unavailable: {backend_name}")]
    Unavailable {
        backend_name: String,
        message: String,
    },

    /// Connection to the backend failed.
    #[error("connection failed to {backend_name}: {message}")]
    ConnectionFailed {
        backend_name: String,
        message: String,
    },

    /// Connection pool exhausted.
    #[error("connection pool exhausted for {backend_name}")]
    PoolExhausted { backend_name: String },

    /// Schema migration error.
    #[error("schema migration failed: {message}")]
    MigrationError { message: String },

    /// Internal backend error.
    #[error("internal error in {backend_name}: {message}")]
    Internal {
        backend_name: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Query execution error.
    #[error("query execution failed: {message}")]
    QueryError { message: String },
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::Backend(BackendError::Internal {
            backend_name: "sqlite".to_string(),
            message: err.to_string(),
            source: Some(Box::new(err)),
        })
    }
}

#[cfg(feature = "sqlite")]
impl From<r2d2::Error> for StorageError {
    fn from(_err: r2d2::Error) -> Self {
        StorageError::Backend(BackendError::PoolExhausted {
            backend_name: "sqlite".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_display() {
        let err = StorageError::Backend(BackendError::QueryError {
            message: "no such table: movies".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "query execution failed: no such table: movies"
        );
    }

    #[test]
    fn test_record_error_display() {
        let err: StorageError = RecordError::Corrupt {
            id: "abc".to_string(),
            message: "year out of range".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "corrupt movie record abc: year out of range"
        );
    }

    #[test]
    fn test_pool_exhausted_display() {
        let err = BackendError::PoolExhausted {
            backend_name: "sqlite".to_string(),
        };
        assert!(err.to_string().contains("pool exhausted"));
    }
}
