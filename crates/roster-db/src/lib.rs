//! # roster-db: Database Layer for Roster
//!
//! This crate owns every conversation with the store: the SQLite pool, the
//! embedded schema, the repositories that read and write departments, roles
//! and employees, and the translation of store failures into [`DbError`].
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Roster Data Flow                                 │
//! │                                                                         │
//! │  Menu choice ("View All Departments")                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     roster-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories  │    │    Schema    │  │   │
//! │  │   │   (pool.rs)   │    │                │    │  (embedded)  │  │   │
//! │  │   │               │    │ EmployeeRepo   │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ RoleRepo       │    │ 001_initial  │  │   │
//! │  │   │ foreign keys  │    │ DepartmentRepo │    │ _schema.sql  │  │   │
//! │  │   └───────────────┘    └────────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │                     ./roster.db (default)                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded schema bootstrap
//! - [`error`] - Database error types
//! - [`repository`] - Employee, role and department repositories
//!
//! ## Usage
//!
//! ```rust,ignore
//! use roster_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./roster.db")).await?;
//!
//! for department in db.departments().list().await? {
//!     println!("{} {:?}", department.name, department.budget);
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ConstraintKind, DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::department::DepartmentRepository;
pub use repository::employee::EmployeeRepository;
pub use repository::role::RoleRepository;
