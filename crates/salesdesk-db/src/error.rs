//! # Database Error Type
//!
//! Error type for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                │
//! │                                                                     │
//! │  SQLite error (sqlx::Error)                                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  DbError (this module) ← driver message preserved as payload        │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ServiceError (salesdesk-services) ← what the caller presents       │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Repositories propagate these, they never handle them. One generic
//! `Query` variant wraps every storage failure - connectivity, constraint
//! violations, syntax - with the driver's own message; callers that need
//! finer distinctions do not exist in this system.

use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Any failure reported by the driver while executing a statement.
    /// The original driver message is the payload.
    #[error("query failed: {0}")]
    Query(String),

    /// An insert reported success but affected zero rows.
    ///
    /// ## When This Occurs
    /// The driver raises its own error for constraint violations, so zero
    /// rows on a successful insert means the server silently accepted but
    /// did not apply the statement.
    #[error("unexpected error: no rows affected")]
    NoRowsAffected,

    /// A seller write was attempted with a department that has no id yet.
    ///
    /// The repository trusts the caller for everything else about the
    /// department (including whether the row still exists), but a missing
    /// id cannot even be bound as a foreign key.
    #[error("seller department has no id")]
    MissingDepartmentId,

    /// Database connection or pool acquisition failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("migration failed: {0}")]
    MigrationFailed(String),
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database      → DbError::Query (driver message preserved)
/// sqlx::Error::PoolTimedOut  → DbError::ConnectionFailed
/// sqlx::Error::PoolClosed    → DbError::ConnectionFailed
/// Other                      → DbError::Query
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => DbError::Query(db_err.message().to_string()),

            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                DbError::ConnectionFailed(err.to_string())
            }

            other => DbError::Query(other.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DbError::NoRowsAffected;
        assert_eq!(err.to_string(), "unexpected error: no rows affected");

        let err = DbError::Query("FOREIGN KEY constraint failed".to_string());
        assert_eq!(err.to_string(), "query failed: FOREIGN KEY constraint failed");
    }

    #[test]
    fn test_sqlx_error_conversion_preserves_message() {
        let err: DbError = sqlx::Error::RowNotFound.into();
        match err {
            DbError::Query(msg) => assert!(!msg.is_empty()),
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
