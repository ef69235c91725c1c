//! # Storage Error Types
//!
//! Error types for storage operations and the persisted catalog.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error) ──► DbError ─────────┐                      │
//! │                                                   ▼                      │
//! │  CoreError (validation, duplicate id) ──────► StoreError                │
//! │                                                   │                      │
//! │                                                   ▼                      │
//! │                                   ApiError (in CLI) ──► notifier        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use ministore_core::{CoreError, ValidationError};
use thiserror::Error;

// =============================================================================
// Database Error
// =============================================================================

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Writing the value would exceed the storage quota.
    ///
    /// ## When This Occurs
    /// - The catalog grew past the configured quota (5 MiB by default)
    ///
    /// Mirrors the quota error of browser local storage.
    #[error("Storage quota exceeded writing '{key}': {required} bytes needed, quota is {quota}")]
    QuotaExceeded { key: String, required: u64, quota: u64 },

    /// Database connection failed or the pool was closed.
    ///
    /// ## When This Occurs
    /// - Database file can't be created (permissions, missing directory)
    /// - Disk full
    /// - Writes after `Database::close`
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Catalog could not be serialized for storage.
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database       → DbError::QueryFailed
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// sqlx::Error::PoolClosed     → DbError::ConnectionFailed
/// sqlx::Error::Io             → DbError::ConnectionFailed
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            sqlx::Error::Io(io_err) => DbError::ConnectionFailed(io_err.to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

impl From<serde_json::Error> for DbError {
    fn from(err: serde_json::Error) -> Self {
        DbError::Serialization(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Store Error
// =============================================================================

/// Errors from [`crate::CatalogStore`] operations.
///
/// `Rejected` means nothing changed. `Persistence` means the in-memory
/// catalog may already hold the change but it was not written.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The catalog refused the change (missing field, duplicate id).
    #[error(transparent)]
    Rejected(#[from] CoreError),

    /// The durable write failed.
    #[error("Persistence failed: {0}")]
    Persistence(#[from] DbError),
}

impl StoreError {
    /// The validation error, if the change was rejected for a missing field.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            StoreError::Rejected(CoreError::Validation(err)) => Some(err),
            _ => None,
        }
    }

    pub fn is_duplicate_id(&self) -> bool {
        matches!(self, StoreError::Rejected(CoreError::DuplicateId { .. }))
    }

    pub fn is_persistence(&self) -> bool {
        matches!(self, StoreError::Persistence(_))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_closed_maps_to_connection_failed() {
        let err: DbError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, DbError::ConnectionFailed(_)));
    }

    #[test]
    fn test_store_error_classification() {
        let err: StoreError = CoreError::duplicate_id("A").into();
        assert!(err.is_duplicate_id());
        assert!(err.validation().is_none());

        let err: StoreError = CoreError::from(ValidationError::required("name")).into();
        assert_eq!(err.validation().map(|v| v.field()), Some("name"));

        let err: StoreError = DbError::PoolExhausted.into();
        assert!(err.is_persistence());
    }

    #[test]
    fn test_quota_message() {
        let err = DbError::QuotaExceeded {
            key: "k".to_string(),
            required: 12,
            quota: 10,
        };
        assert_eq!(
            err.to_string(),
            "Storage quota exceeded writing 'k': 12 bytes needed, quota is 10"
        );
    }
}
