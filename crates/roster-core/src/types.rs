//! # Domain Types
//!
//! Typed identifiers, write inputs and the denormalized view rows produced by
//! the data access layer.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Persisted (normalized)                                │
//! │                                                                         │
//! │  department ◄──────── role ◄──────── employee ──┐                       │
//! │  id, name        id, title,      id, first_name,│ manager_id (NULL)     │
//! │                  salary,         last_name,     │                       │
//! │                  department      role_id   ◄────┘                       │
//! │                                                                         │
//! │                   Derived (views, read-only)                            │
//! │                                                                         │
//! │  EmployeeView   = employee + role.title + department.name + salary      │
//! │                   + manager "First Last" (NULL when unmanaged)          │
//! │  RoleView       = role + department.name                                │
//! │  DepartmentView = department + budget (payroll of filled roles | NULL)  │
//! │  Manager        = employee referenced by some manager_id                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! View rows derive `sqlx::FromRow` (behind the `sqlx` feature), so decoding a
//! row that lacks one of these columns fails instead of yielding a partial
//! record.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationResult;
use crate::money::Money;
use crate::validation::{validate_name, validate_salary};

// =============================================================================
// Identifiers
// =============================================================================

/// Declares an integer primary-key newtype.
///
/// Separate types keep `delete_role(employee_id)` from compiling.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
        #[cfg_attr(feature = "sqlx", sqlx(transparent))]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            #[inline]
            pub const fn new(id: i64) -> Self {
                $name(id)
            }

            #[inline]
            pub const fn get(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Primary key of a `department` row.
    DepartmentId
);
entity_id!(
    /// Primary key of a `role` row.
    RoleId
);
entity_id!(
    /// Primary key of an `employee` row.
    EmployeeId
);

// =============================================================================
// Selection
// =============================================================================

/// The outcome of a "pick a target" prompt.
///
/// ## Why not `Option<T>`?
/// A delete prompt offers "Cancel" next to the real targets. Naming that
/// outcome keeps "the user backed out" distinct from "the lookup found
/// nothing", and the repositories turn `Cancelled` into a no-op before any
/// statement is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    /// The user picked this target.
    Chosen(T),
    /// The user picked "Cancel" (or pressed Esc).
    Cancelled,
}

impl<T> Selection<T> {
    /// Whether the user backed out.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Selection::Cancelled)
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Selection::Chosen(value),
            None => Selection::Cancelled,
        }
    }
}

// =============================================================================
// Write Inputs
// =============================================================================

/// A department to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDepartment {
    pub name: String,
}

impl NewDepartment {
    /// Validates and trims the name.
    pub fn new(name: &str) -> ValidationResult<Self> {
        Ok(NewDepartment {
            name: validate_name("department name", name)?,
        })
    }
}

/// A role to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRole {
    pub title: String,
    pub salary: Money,
    pub department_id: DepartmentId,
}

impl NewRole {
    /// Validates the title and salary.
    ///
    /// The department reference is checked by the store's foreign key, not
    /// here.
    pub fn new(title: &str, salary: Money, department_id: DepartmentId) -> ValidationResult<Self> {
        Ok(NewRole {
            title: validate_name("title", title)?,
            salary: validate_salary(salary)?,
            department_id,
        })
    }
}

/// An employee to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub role_id: RoleId,
    /// `None` for the top of the hierarchy.
    pub manager_id: Option<EmployeeId>,
}

impl NewEmployee {
    pub fn new(
        first_name: &str,
        last_name: &str,
        role_id: RoleId,
        manager_id: Option<EmployeeId>,
    ) -> ValidationResult<Self> {
        Ok(NewEmployee {
            first_name: validate_name("first name", first_name)?,
            last_name: validate_name("last name", last_name)?,
            role_id,
            manager_id,
        })
    }
}

// =============================================================================
// View Rows
// =============================================================================

/// An employee joined with role, department and manager name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct EmployeeView {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    /// `role.title`
    pub title: String,
    /// `department.name` of the employee's role.
    pub department: String,
    /// `role.salary`
    pub salary: Money,
    /// Manager's "First Last"; `None` when `manager_id` is NULL.
    pub manager: Option<String>,
}

impl EmployeeView {
    /// "First Last", the form used in prompts and in other rows' `manager`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A role joined with its department name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct RoleView {
    pub id: RoleId,
    pub title: String,
    pub department: String,
    pub salary: Money,
}

/// A department with its current payroll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct DepartmentView {
    pub id: DepartmentId,
    pub name: String,
    /// Sum of salaries over filled roles; never `Some(zero)`.
    pub budget: Option<Money>,
}

/// An employee that manages at least one other employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Manager {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
}

impl Manager {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
