//! # API Error Type
//!
//! Unified error type for CLI commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in MiniStore                              │
//! │                                                                         │
//! │  Command Function  ──  Result<T, ApiError>                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  StoreError::Rejected(Validation)  ──► VALIDATION_ERROR                 │
//! │  StoreError::Rejected(DuplicateId) ──► DUPLICATE_ID                     │
//! │  DbError::Serialization            ──► INTERNAL                         │
//! │  StoreError::Persistence(_)        ──► PERSISTENCE_ERROR (logged)       │
//! │  io::Error (prompt, terminal)      ──► INTERNAL                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Toast::error(api_error.message)   ──► user                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `message` is the text shown to the user as-is; details needed for
//! debugging go to the log instead.

use ministore_core::CoreError;
use ministore_db::{DbError, StoreError};
use serde::Serialize;

/// Toast text for a rejected add with a missing or invalid field.
pub const MSG_FILL_ALL_FIELDS: &str = "Please fill in all fields";

/// Toast text for a rejected add with an id already in use.
pub const MSG_DUPLICATE_ID: &str = "Product ID already exists! Please use a unique ID.";

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "DUPLICATE_ID",
///   "message": "Product ID already exists! Please use a unique ID."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A required field was empty or the price did not parse
    ValidationError,

    /// The product id is already in the catalog
    DuplicateId,

    /// The change was applied in memory but could not be saved
    PersistenceError,

    /// A bug or a broken terminal, not something the user can fix
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// Persistence failure; the cause is appended to the user message.
    pub fn persistence(cause: impl std::fmt::Display) -> Self {
        ApiError::new(
            ErrorCode::PersistenceError,
            format!("Could not save changes: {}. Changes may be lost on reload.", cause),
        )
    }
}

/// Converts catalog rejections to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::DuplicateId { id } => {
                tracing::debug!(id = %id, "Rejected duplicate id");
                ApiError::new(ErrorCode::DuplicateId, MSG_DUPLICATE_ID)
            }
            CoreError::Validation(e) => {
                tracing::debug!(field = %e.field(), "Rejected incomplete product");
                ApiError::validation(MSG_FILL_ALL_FIELDS)
            }
        }
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::QuotaExceeded { .. } => {
                tracing::error!("Storage quota exceeded: {}", err);
                ApiError::persistence("storage is full")
            }
            DbError::ConnectionFailed(ref e) => {
                tracing::error!("Database connection failed: {}", e);
                ApiError::persistence("database is unavailable")
            }
            // Nothing reached storage; the catalog itself would not encode.
            DbError::Serialization(ref e) => {
                tracing::error!("Catalog serialization failed: {}", e);
                ApiError::internal(format!("Unexpected error: {}", e))
            }
            other => {
                tracing::error!("Database write failed: {}", other);
                ApiError::persistence(other)
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Rejected(e) => e.into(),
            StoreError::Persistence(e) => e.into(),
        }
    }
}

/// Reading an answer or writing to the terminal failed.
impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("Terminal I/O failed: {}", err);
        ApiError::internal(format!("Unexpected error: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================
