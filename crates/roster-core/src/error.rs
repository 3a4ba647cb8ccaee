//! # Error Types
//!
//! Domain-specific error types for roster-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  roster-core errors (this file)                                        │
//! │  └── ValidationError  - Input rejected before reaching the store       │
//! │                                                                         │
//! │  roster-db errors (separate crate)                                     │
//! │  └── DbError          - Store failures (connection, constraints)       │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── CliError         - What the terminal user sees                    │
//! │                                                                         │
//! │  Flow: ValidationError ─┐                                              │
//! │        DbError ─────────┴──► CliError → "Error adding role: ..."        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the prompt layer before a statement is issued. The store's own
/// constraints (foreign keys, `salary >= 0`) remain the final authority.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g., a salary that is not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "first name".to_string(),
        };
        assert_eq!(err.to_string(), "first name is required");

        let err = ValidationError::TooLong {
            field: "title".to_string(),
            max: 30,
        };
        assert_eq!(err.to_string(), "title must be at most 30 characters");

        let err = ValidationError::Negative {
            field: "salary".to_string(),
        };
        assert_eq!(err.to_string(), "salary must not be negative");
    }
}
