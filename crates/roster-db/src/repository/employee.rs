//! # Employee Repository
//!
//! Employees, their reporting line and their reassignment.
//!
//! ## Employee View
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Reconstructing an Employee Row                       │
//! │                                                                         │
//! │  employee e ──role_id──► role r ──department──► department d           │
//! │      │                                                                  │
//! │      └──manager_id──► employee m   (LEFT JOIN: may be NULL)            │
//! │                                                                         │
//! │  id │ first │ last │ title │ department │ salary │ manager             │
//! │  ───┼───────┼──────┼───────┼────────────┼────────┼────────────         │
//! │  1  │ Ann   │ Lee  │ Rep   │ Sales      │ 50,000 │ NULL                │
//! │  2  │ Bo    │ Park │ Rep   │ Sales      │ 50,000 │ Ann Lee             │
//! │                                                                         │
//! │  manager is "First Last" of m, NULL when there is no m.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Hierarchy
//! `manager_id` points back into `employee`. The store only checks that it
//! resolves; it does not stop an employee from managing themselves.

use sqlx::SqlitePool;
use tracing::{debug, warn};

use crate::error::DbResult;
use roster_core::{
    DepartmentId, EmployeeId, EmployeeView, Manager, NewEmployee, RoleId, Selection,
};

/// Expands to the employee view query followed by any extra clauses.
///
/// Every read in this module shares the same select list and joins, so the
/// filters only differ in their WHERE clause.
macro_rules! employee_view_sql {
    ($($tail:literal)*) => {
        concat!(
            "SELECT e.id, e.first_name, e.last_name, r.title, d.name AS department, r.salary, ",
            "CASE WHEN m.id IS NOT NULL THEN m.first_name || ' ' || m.last_name END AS manager ",
            "FROM employee e ",
            "INNER JOIN role r ON r.id = e.role_id ",
            "INNER JOIN department d ON d.id = r.department ",
            "LEFT JOIN employee m ON m.id = e.manager_id ",
            $($tail, " ",)*
            "ORDER BY e.id"
        )
    };
}

/// Repository for employee database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.employees();
///
/// let ann = repo.insert(&NewEmployee::new("Ann", "Lee", rep, None)?).await?;
/// repo.update_manager(bo, Some(ann)).await?;
///
/// let reports = repo.by_manager(ann).await?;
/// ```
#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    pool: SqlitePool,
}

impl EmployeeRepository {
    /// Creates a new EmployeeRepository.
    pub fn new(pool: SqlitePool) -> Self {
        EmployeeRepository { pool }
    }

    /// Lists every employee with title, department, salary and manager name,
    /// ordered by id.
    pub async fn list(&self) -> DbResult<Vec<EmployeeView>> {
        debug!("Listing employees");

        let employees = sqlx::query_as::<_, EmployeeView>(employee_view_sql!())
            .fetch_all(&self.pool)
            .await?;

        debug!(count = employees.len(), "Listed employees");
        Ok(employees)
    }

    /// Lists the employees that manage at least one other employee.
    ///
    /// An employee recorded as their own manager is included.
    pub async fn managers(&self) -> DbResult<Vec<Manager>> {
        debug!("Listing managers");

        let managers = sqlx::query_as::<_, Manager>(
            r#"
            SELECT m.id, m.first_name, m.last_name
            FROM employee m
            WHERE EXISTS (SELECT 1 FROM employee e WHERE e.manager_id = m.id)
            ORDER BY m.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = managers.len(), "Listed managers");
        Ok(managers)
    }

    /// Lists the direct reports of `manager_id`.
    ///
    /// Empty when nobody reports to that id, including when the id does not
    /// exist.
    pub async fn by_manager(&self, manager_id: EmployeeId) -> DbResult<Vec<EmployeeView>> {
        debug!(manager_id = %manager_id, "Listing employees by manager");

        let employees =
            sqlx::query_as::<_, EmployeeView>(employee_view_sql!("WHERE e.manager_id = ?1"))
                .bind(manager_id)
                .fetch_all(&self.pool)
                .await?;

        debug!(count = employees.len(), "Listed employees by manager");
        Ok(employees)
    }

    /// Lists the employees whose role belongs to `department_id`.
    pub async fn by_department(&self, department_id: DepartmentId) -> DbResult<Vec<EmployeeView>> {
        debug!(department_id = %department_id, "Listing employees by department");

        let employees = sqlx::query_as::<_, EmployeeView>(employee_view_sql!("WHERE d.id = ?1"))
            .bind(department_id)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = employees.len(), "Listed employees by department");
        Ok(employees)
    }

    /// Inserts an employee and returns their id.
    ///
    /// ## Returns
    /// * `Ok(EmployeeId)` - The new employee
    /// * `Err(DbError::ConstraintViolation)` - The role or manager does not exist
    pub async fn insert(&self, employee: &NewEmployee) -> DbResult<EmployeeId> {
        debug!(
            first_name = %employee.first_name,
            last_name = %employee.last_name,
            role_id = %employee.role_id,
            manager_id = ?employee.manager_id,
            "Inserting employee"
        );

        let result = sqlx::query(
            "INSERT INTO employee (first_name, last_name, role_id, manager_id) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(employee.role_id)
        .bind(employee.manager_id)
        .execute(&self.pool)
        .await?;

        let id = EmployeeId::new(result.last_insert_rowid());
        debug!(id = %id, "Employee inserted");
        Ok(id)
    }

    /// Moves an employee to another role.
    ///
    /// ## Returns
    /// * `Ok(())` - Updated, or no such employee
    /// * `Err(DbError::ConstraintViolation)` - The role does not exist
    pub async fn update_role(&self, employee_id: EmployeeId, role_id: RoleId) -> DbResult<()> {
        debug!(id = %employee_id, role_id = %role_id, "Updating employee role");

        let result = sqlx::query("UPDATE employee SET role_id = ?1 WHERE id = ?2")
            .bind(role_id)
            .bind(employee_id)
            .execute(&self.pool)
            .await?;

        debug!(rows_affected = result.rows_affected(), "Employee role updated");
        if result.rows_affected() == 0 {
            warn!(id = %employee_id, "No employee matched role update");
        }

        Ok(())
    }

    /// Sets or clears (`None`) an employee's manager.
    ///
    /// ## Returns
    /// * `Ok(())` - Updated, or no such employee
    /// * `Err(DbError::ConstraintViolation)` - The manager does not exist
    pub async fn update_manager(
        &self,
        employee_id: EmployeeId,
        manager_id: Option<EmployeeId>,
    ) -> DbResult<()> {
        debug!(id = %employee_id, manager_id = ?manager_id, "Updating employee manager");

        let result = sqlx::query("UPDATE employee SET manager_id = ?1 WHERE id = ?2")
            .bind(manager_id)
            .bind(employee_id)
            .execute(&self.pool)
            .await?;

        debug!(rows_affected = result.rows_affected(), "Employee manager updated");
        if result.rows_affected() == 0 {
            warn!(id = %employee_id, "No employee matched manager update");
        }

        Ok(())
    }

    /// Deletes the selected employee.
    ///
    /// Fails with a foreign key violation while others still report to them.
    pub async fn delete(&self, target: Selection<EmployeeId>) -> DbResult<()> {
        let Selection::Chosen(id) = target else {
            debug!("Employee deletion cancelled");
            return Ok(());
        };

        debug!(id = %id, "Deleting employee");

        let result = sqlx::query("DELETE FROM employee WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            warn!(id = %id, "No employee matched delete");
        }

        Ok(())
    }

    /// Counts employees (for diagnostics and seeding).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employee")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
