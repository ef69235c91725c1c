//! # Error Types
//!
//! Domain-specific error types for ministore-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ministore-core errors (this file)                                     │
//! │  ├── CoreError        - Catalog rule violations                        │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  ministore-db errors (separate crate)                                  │
//! │  ├── DbError          - Storage failures                               │
//! │  └── StoreError       - CoreError | DbError                            │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── ApiError         - What the user sees (code + message)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → ApiError → Notifier  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Reasons the catalog refuses a change.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// A product with this id is already in the catalog.
    ///
    /// ## When This Occurs
    /// - Adding `ELEC001` twice
    /// - Adding ` ELEC001 ` when `ELEC001` exists (ids are trimmed first)
    ///
    /// Matching is case-sensitive: `elec001` and `ELEC001` are different ids.
    #[error("Product id '{id}' already exists")]
    DuplicateId { id: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates a DuplicateId error.
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        CoreError::DuplicateId { id: id.into() }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a submitted product form is incomplete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing, blank, or (for price) not a positive number.
    #[error("{field} is required")]
    Required { field: String },
}

impl ValidationError {
    /// Creates a Required error for the given field name.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::duplicate_id("ELEC001");
        assert_eq!(err.to_string(), "Product id 'ELEC001' already exists");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::required("price");
        assert_eq!(err.to_string(), "price is required");
        assert_eq!(err.field(), "price");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::required("id");
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
