//! # Error Types
//!
//! Validation errors for salesdesk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  salesdesk-core (this file)                                         │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  salesdesk-db (separate crate)                                      │
//! │  └── DbError          - Database operation failures                 │
//! │                                                                     │
//! │  salesdesk-services (separate crate)                                │
//! │  └── ServiceError     - Wraps both of the above                     │
//! │                                                                     │
//! │  Flow: ValidationError ─┐                                           │
//! │        DbError ─────────┴──► ServiceError ──► caller                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field names)
//! 3. Errors are enum variants, never bare Strings

use thiserror::Error;

/// Input validation errors.
///
/// Raised before any statement reaches the database, for input a form
/// surface should never submit.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g. malformed email, non-finite salary).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A referenced entity has not been persisted yet (its id is `None`).
    #[error("{field} must reference a persisted entity")]
    TransientReference { field: String },
}

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::TooLong {
            field: "name".to_string(),
            max: 60,
        };
        assert_eq!(err.to_string(), "name must be at most 60 characters");

        let err = ValidationError::TransientReference {
            field: "department".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "department must reference a persisted entity"
        );
    }
}
