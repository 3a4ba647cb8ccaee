//! # roster-core: Pure Domain Model for Roster
//!
//! This crate holds the types shared by the data access layer and the
//! command-line front end, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Roster Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    roster (apps/cli)                            │   │
//! │  │    Menu ──► Prompts ──► Repository call ──► Table / message     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ roster-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   error   │  │ validation│  │   │
//! │  │   │ Ids,Views │  │   Money   │  │Validation │  │   names   │  │   │
//! │  │   │ Selection │  │  parsing  │  │   Error   │  │  salary   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO TERMINAL • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    roster-db (Database Layer)                   │   │
//! │  │              SQLite queries, schema, repositories               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Typed ids, write inputs, view rows, [`Selection`]
//! - [`money`] - Money type with integer cents
//! - [`error`] - Validation errors
//! - [`validation`] - Input rules
//!
//! ## Example Usage
//!
//! ```rust
//! use roster_core::{DepartmentId, Money, NewRole};
//!
//! let role = NewRole::new("Rep", "50000".parse::<Money>().unwrap(), DepartmentId::new(1)).unwrap();
//! assert_eq!(role.salary.to_string(), "$50,000.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of names, titles and department names.
///
/// Matches the `VARCHAR(30)` width the schema was first written with.
pub const MAX_NAME_LEN: usize = 30;
