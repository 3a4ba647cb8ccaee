//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Categorized: connection / constraint / shape  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CliError (in app) ← "Error deleting department: ..."                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Menu loop continues with the next choice                              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! Updating or deleting an id that does not exist affects zero rows and is
//! reported as success. Repositories log it at `warn` level only.

use std::fmt;

use thiserror::Error;

/// Which store constraint rejected a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// A reference points at a missing row, or a referenced row is being
    /// deleted (e.g. a department that still has roles).
    ForeignKey,
    /// A UNIQUE or PRIMARY KEY index.
    Unique,
    /// A NOT NULL column received NULL.
    NotNull,
    /// A CHECK constraint (e.g. `salary >= 0`).
    Check,
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConstraintKind::ForeignKey => "foreign key",
            ConstraintKind::Unique => "unique",
            ConstraintKind::NotNull => "not null",
            ConstraintKind::Check => "check",
        };
        f.write_str(name)
    }
}

/// Database operation errors.
///
/// These errors wrap sqlx errors and group them into the categories the
/// caller acts on.
#[derive(Debug, Error)]
pub enum DbError {
    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be opened or created
    /// - File permissions issue
    /// - Pool has been closed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Pool exhausted (no connection became free before the acquire timeout).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// A write violated a store constraint.
    ///
    /// ## When This Occurs
    /// - Deleting a department that still has roles
    /// - Deleting a role that still has employees
    /// - Deleting an employee who still manages others
    /// - Pointing `role_id` / `manager_id` / `department` at a missing row
    #[error("Constraint violation ({kind}): {message}")]
    ConstraintViolation { kind: ConstraintKind, message: String },

    /// A result row did not have the shape of the view it decodes into.
    #[error("Unexpected row shape: {0}")]
    RowShape(String),

    /// Schema bootstrap failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed for a reason other than a constraint.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a ConstraintViolation error.
    pub fn constraint(kind: ConstraintKind, message: impl Into<String>) -> Self {
        DbError::ConstraintViolation {
            kind,
            message: message.into(),
        }
    }

    /// The store cannot be reached or cannot hand out a connection.
    pub fn is_connection_failure(&self) -> bool {
        matches!(self, DbError::ConnectionFailed(_) | DbError::PoolExhausted)
    }

    /// A foreign-key, uniqueness, not-null or check constraint rejected the
    /// statement.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, DbError::ConstraintViolation { .. })
    }

    /// The constraint kind, when this is a constraint violation.
    pub fn constraint_kind(&self) -> Option<ConstraintKind> {
        match self {
            DbError::ConstraintViolation { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database       → kind(): FK / UNIQUE / NOT NULL / CHECK
///                               else message sniffing, else QueryFailed
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// sqlx::Error::PoolClosed     → DbError::ConnectionFailed
/// sqlx::Error::Io / Config    → DbError::ConnectionFailed
/// Column / decode errors      → DbError::RowShape
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message().to_string();

                match db_err.kind() {
                    sqlx::error::ErrorKind::ForeignKeyViolation => {
                        DbError::constraint(ConstraintKind::ForeignKey, msg)
                    }
                    sqlx::error::ErrorKind::UniqueViolation => {
                        DbError::constraint(ConstraintKind::Unique, msg)
                    }
                    sqlx::error::ErrorKind::NotNullViolation => {
                        DbError::constraint(ConstraintKind::NotNull, msg)
                    }
                    sqlx::error::ErrorKind::CheckViolation => {
                        DbError::constraint(ConstraintKind::Check, msg)
                    }
                    // SQLite builds without extended result codes only give
                    // us the message text.
                    _ => classify_by_message(msg),
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            sqlx::Error::Io(e) => DbError::ConnectionFailed(e.to_string()),

            sqlx::Error::Configuration(e) => DbError::ConnectionFailed(e.to_string()),

            sqlx::Error::ColumnNotFound(column) => {
                DbError::RowShape(format!("missing column '{}'", column))
            }

            e @ (sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::Decode(_)) => DbError::RowShape(e.to_string()),

            sqlx::Error::RowNotFound => DbError::QueryFailed("no rows returned".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

fn classify_by_message(msg: String) -> DbError {
    // SQLite messages: "FOREIGN KEY constraint failed",
    // "UNIQUE constraint failed: <table>.<column>", ...
    if msg.contains("FOREIGN KEY constraint failed") {
        DbError::constraint(ConstraintKind::ForeignKey, msg)
    } else if msg.contains("UNIQUE constraint failed") {
        DbError::constraint(ConstraintKind::Unique, msg)
    } else if msg.contains("NOT NULL constraint failed") {
        DbError::constraint(ConstraintKind::NotNull, msg)
    } else if msg.contains("CHECK constraint failed") {
        DbError::constraint(ConstraintKind::Check, msg)
    } else {
        DbError::QueryFailed(msg)
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
    fn test_classify_by_message() {
        let err = classify_by_message("FOREIGN KEY constraint failed".to_string());
        assert_eq!(err.constraint_kind(), Some(ConstraintKind::ForeignKey));

        let err = classify_by_message("CHECK constraint failed: salary >= 0".to_string());
        assert_eq!(err.constraint_kind(), Some(ConstraintKind::Check));

        let err = classify_by_message("no such table: staff".to_string());
        assert!(matches!(err, DbError::QueryFailed(_)));
        assert!(!err.is_constraint_violation());
    }

    #[test]
    fn test_pool_errors_are_connection_failures() {
        assert!(DbError::from(sqlx::Error::PoolTimedOut).is_connection_failure());
        assert!(DbError::from(sqlx::Error::PoolClosed).is_connection_failure());
        assert!(!DbError::QueryFailed("x".to_string()).is_connection_failure());
    }

    #[test]
    fn test_missing_column_is_row_shape() {
        let err = DbError::from(sqlx::Error::ColumnNotFound("budget".to_string()));
        assert!(matches!(err, DbError::RowShape(ref m) if m.contains("budget")));
    }

    #[tokio::test]
    async fn test_query_missing_view_column_is_row_shape() {
        use crate::repository::fixtures::{add_department, empty_db};
        use roster_core::DepartmentView;

        let db = empty_db().await;
        add_department(&db, "Sales").await;

        let err: DbError = sqlx::query_as::<_, DepartmentView>("SELECT id, name FROM department")
            .fetch_all(db.pool())
            .await
            .unwrap_err()
            .into();
        assert!(matches!(err, DbError::RowShape(ref m) if m.contains("budget")));
    }

    #[test]
    fn test_error_messages() {
        let err = DbError::constraint(ConstraintKind::ForeignKey, "FOREIGN KEY constraint failed");
        assert_eq!(
            err.to_string(),
            "Constraint violation (foreign key): FOREIGN KEY constraint failed"
        );
    }
}
