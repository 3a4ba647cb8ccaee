//! # CLI Error Type
//!
//! Unified error type for menu actions.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Menu Loop                          │
//! │                                                                         │
//! │  Action ("Delete Department")                                          │
//! │       │                                                                 │
//! │       ├── Prompt: Esc             → CliError::Prompt(Canceled)         │
//! │       │                              "Cancelled." and back to menu      │
//! │       ├── Prompt: Ctrl+C          → CliError::Prompt(Interrupted)      │
//! │       │                              "Goodbye!" and exit                │
//! │       ├── Nothing to pick         → CliError::NothingToChoose(hint)    │
//! │       │                              hint and back to menu              │
//! │       ├── Bad input               → CliError::Validation               │
//! │       └── Store rejects           → CliError::Database                 │
//! │                                      "Error deleting department: ..."   │
//! │                                      and back to menu                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use inquire::InquireError;
use roster_core::ValidationError;
use roster_db::DbError;
use thiserror::Error;

/// Error returned by a menu action or a one-shot command.
#[derive(Debug, Error)]
pub enum CliError {
    /// The store rejected or failed the operation.
    #[error(transparent)]
    Database(#[from] DbError),

    /// Input did not pass validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The prompt was aborted or the terminal is unusable.
    #[error("Prompt failed: {0}")]
    Prompt(#[from] InquireError),

    /// A selection prompt would have had no entries.
    #[error("{0}")]
    NothingToChoose(&'static str),

    /// Rows could not be written as JSON.
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// The user pressed Ctrl+C.
    pub fn is_interrupted(&self) -> bool {
        matches!(self, CliError::Prompt(InquireError::OperationInterrupted))
    }

    /// The user pressed Esc.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, CliError::Prompt(InquireError::OperationCanceled))
    }
}

/// Result type for CLI actions.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_outcomes() {
        assert!(CliError::from(InquireError::OperationInterrupted).is_interrupted());
        assert!(CliError::from(InquireError::OperationCanceled).is_cancelled());
        assert!(!CliError::NothingToChoose("none").is_cancelled());
    }

    #[test]
    fn test_messages_pass_through() {
        let err = CliError::from(ValidationError::Required {
            field: "title".to_string(),
        });
        assert_eq!(err.to_string(), "title is required");

        let err = CliError::from(DbError::PoolExhausted);
        assert_eq!(err.to_string(), "Connection pool exhausted");
    }
}
