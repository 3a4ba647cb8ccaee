//! # Validation Module
//!
//! Input checks applied by the prompt layer before a write reaches the store.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Prompt (inquire validators)                                  │
//! │  └── Re-ask until the answer passes THIS MODULE                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: NewEmployee / NewRole / NewDepartment constructors           │
//! │  └── THIS MODULE: trimmed, non-empty, bounded, non-negative            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  ├── CHECK (salary >= 0)                                               │
//! │  └── Foreign key constraints (role → department, employee → role,      │
//! │      employee → manager)                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Referential checks are deliberately left to layer 3: the store reports
//! them as a constraint violation.

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::MAX_NAME_LEN;

/// Validates a name-like field (first/last name, role title, department name).
///
/// ## Rules
/// - Leading/trailing whitespace is removed
/// - Must not be empty after trimming
/// - At most [`MAX_NAME_LEN`] characters
///
/// ## Returns
/// The trimmed value.
///
/// ## Example
/// ```rust
/// use roster_core::validation::validate_name;
///
/// assert_eq!(validate_name("title", "  Engineer ").unwrap(), "Engineer");
/// assert!(validate_name("title", "   ").is_err());
/// ```
pub fn validate_name(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(value.to_string())
}

/// Validates a role salary.
///
/// ## Rules
/// - Must be non-negative; zero is allowed (unpaid roles)
pub fn validate_salary(salary: Money) -> ValidationResult<Money> {
    if salary.is_negative() {
        return Err(ValidationError::Negative {
            field: "salary".to_string(),
        });
    }

    Ok(salary)
}

/// Parses and validates a salary typed at a prompt.
///
/// ## Example
/// ```rust
/// use roster_core::validation::parse_salary;
///
/// assert_eq!(parse_salary("85,000").unwrap().cents(), 8_500_000);
/// assert!(parse_salary("-1").is_err());
/// ```
pub fn parse_salary(input: &str) -> ValidationResult<Money> {
    validate_salary(input.parse()?)
}

// =============================================================================
// Unit Tests
// =============================================================================
