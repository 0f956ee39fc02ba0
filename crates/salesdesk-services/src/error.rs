//! Service error type.
//!
//! What the desktop shell receives when an operation fails: either the
//! input was refused before any statement ran, or the database layer
//! reported a failure. Both keep their own messages.

use thiserror::Error;

use salesdesk_core::ValidationError;
use salesdesk_db::DbError;

/// Errors surfaced by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input refused by validation; nothing was written.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Failure reported by the database layer.
    #[error("persistence error: {0}")]
    Db(#[from] DbError),
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_messages_are_preserved() {
        let err: ServiceError = DbError::NoRowsAffected.into();
        assert_eq!(
            err.to_string(),
            "persistence error: unexpected error: no rows affected"
        );

        let err: ServiceError = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "validation error: name is required");
    }
}
