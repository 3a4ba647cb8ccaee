//! # Repository Module
//!
//! Data access for the three persisted entities.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Statement Per Call                               │
//! │                                                                         │
//! │  Menu action                                                           │
//! │       │                                                                 │
//! │       │  db.employees().by_manager(EmployeeId::new(1))                 │
//! │       ▼                                                                 │
//! │  EmployeeRepository                                                    │
//! │  ├── list / managers / by_manager / by_department                      │
//! │  ├── insert                                                            │
//! │  ├── update_role / update_manager                                      │
//! │  └── delete(Selection<EmployeeId>)                                     │
//! │       │                                                                 │
//! │       │  one parameterized statement (?1, ?2, ...)                     │
//! │       ▼                                                                 │
//! │  SQLite                                                                │
//! │                                                                         │
//! │  Reads return view rows (joined, human readable).                      │
//! │  Writes take typed ids and validated inputs.                           │
//! │  Update/delete of a missing id: Ok(()), logged at warn.                │
//! │  Delete of Selection::Cancelled: Ok(()), no statement issued.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`employee::EmployeeRepository`] - Employee views, hierarchy, reassignment
//! - [`role::RoleRepository`] - Roles with department names
//! - [`department::DepartmentRepository`] - Departments with payroll budget

pub mod department;
pub mod employee;
pub mod role;
