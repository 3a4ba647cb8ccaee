//! # Department Repository
//!
//! Departments and their payroll budget.
//!
//! ## Budget
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How the Budget Is Computed                           │
//! │                                                                         │
//! │  department ⟕ role ⟕ employee, grouped by department                   │
//! │                                                                         │
//! │  Sales  │ Rep   50,000 │ Ann Lee   → counts  50,000                     │
//! │  Sales  │ Rep   50,000 │ Bo Park   → counts  50,000                     │
//! │  Sales  │ Lead  90,000 │ (nobody)  → ignored                            │
//! │  ─────────────────────────────────────────────                          │
//! │  Sales budget = 100,000                                                │
//! │                                                                         │
//! │  Eng    │ (no roles)   │           → budget NULL                        │
//! │  Ops    │ Intern     0 │ Cy Diaz   → sum is 0 → budget NULL             │
//! │                                                                         │
//! │  The budget is never zero: NULL means "no paid, filled role".          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::{debug, warn};

use crate::error::DbResult;
use roster_core::{DepartmentId, DepartmentView, NewDepartment, Selection};

/// Repository for department database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.departments();
///
/// let id = repo.insert(&NewDepartment::new("Eng")?).await?;
/// let departments = repo.list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct DepartmentRepository {
    pool: SqlitePool,
}

impl DepartmentRepository {
    /// Creates a new DepartmentRepository.
    pub fn new(pool: SqlitePool) -> Self {
        DepartmentRepository { pool }
    }

    /// Lists every department with its budget, ordered by id.
    ///
    /// Departments without roles or without employees are included with a
    /// `None` budget.
    pub async fn list(&self) -> DbResult<Vec<DepartmentView>> {
        debug!("Listing departments");

        let departments = sqlx::query_as::<_, DepartmentView>(
            r#"
            SELECT
                d.id,
                d.name,
                NULLIF(SUM(CASE WHEN e.id IS NOT NULL THEN r.salary END), 0) AS budget
            FROM department d
            LEFT JOIN role r ON r.department = d.id
            LEFT JOIN employee e ON e.role_id = r.id
            GROUP BY d.id, d.name
            ORDER BY d.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = departments.len(), "Listed departments");
        Ok(departments)
    }

    /// Inserts a department and returns its id.
    ///
    /// Names are not unique: inserting "Eng" twice creates two departments.
    pub async fn insert(&self, department: &NewDepartment) -> DbResult<DepartmentId> {
        debug!(name = %department.name, "Inserting department");

        let result = sqlx::query("INSERT INTO department (name) VALUES (?1)")
            .bind(&department.name)
            .execute(&self.pool)
            .await?;

        let id = DepartmentId::new(result.last_insert_rowid());
        debug!(id = %id, "Department inserted");
        Ok(id)
    }

    /// Deletes the selected department.
    ///
    /// ## Returns
    /// * `Ok(())` - Deleted, cancelled, or no such department
    /// * `Err(DbError::ConstraintViolation)` - Roles still reference it
    pub async fn delete(&self, target: Selection<DepartmentId>) -> DbResult<()> {
        let Selection::Chosen(id) = target else {
            debug!("Department deletion cancelled");
            return Ok(());
        };

        debug!(id = %id, "Deleting department");

        let result = sqlx::query("DELETE FROM department WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            warn!(id = %id, "No department matched delete");
        }

        Ok(())
    }

    /// Counts departments (for diagnostics and seeding).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM department")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::error::ConstraintKind;
    use crate::repository::fixtures::*;
    use roster_core::{Money, Selection};

    #[tokio::test]
    async fn test_new_department_has_null_budget() {
        let db = empty_db().await;
        let id = add_department(&db, "Eng").await;

        let departments = db.departments().list().await.unwrap();
        assert_eq!(departments.len(), 1);
        assert_eq!(departments[0].id, id);
        assert_eq!(departments[0].name, "Eng");
        assert_eq!(departments[0].budget, None);
    }

    #[tokio::test]
    async fn test_budget_counts_filled_roles_only() {
        let db = empty_db().await;
        let sales = add_department(&db, "Sales").await;
        let rep = add_role(&db, "Rep", 50_000, sales).await;
        add_role(&db, "Lead", 90_000, sales).await;
        add_employee(&db, "Ann", "Lee", rep, None).await;
        add_employee(&db, "Bo", "Park", rep, None).await;

        let departments = db.departments().list().await.unwrap();
        assert_eq!(departments[0].budget, Some(Money::from_dollars(100_000)));
    }

    #[tokio::test]
    async fn test_budget_is_null_for_unfilled_and_zero_payroll() {
        let db = empty_db().await;
        let empty = add_department(&db, "Empty").await;
        let unfilled = add_department(&db, "Unfilled").await;
        let unpaid = add_department(&db, "Unpaid").await;
        add_role(&db, "Ghost", 70_000, unfilled).await;
        let intern = add_role(&db, "Intern", 0, unpaid).await;
        add_employee(&db, "Cy", "Diaz", intern, None).await;

        let departments = db.departments().list().await.unwrap();
        let ids: Vec<_> = departments.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![empty, unfilled, unpaid]);
        assert!(departments.iter().all(|d| d.budget.is_none()));
    }

    #[tokio::test]
    async fn test_names_are_not_unique() {
        let db = empty_db().await;
        let first = add_department(&db, "Eng").await;
        let second = add_department(&db, "Eng").await;

        assert_ne!(first, second);
        assert_eq!(db.departments().count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_delete_department() {
        let db = empty_db().await;
        let id = add_department(&db, "Eng").await;

        db.departments().delete(Selection::Chosen(id)).await.unwrap();
        assert_eq!(db.departments().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_cancelled_is_noop() {
        let db = empty_db().await;
        add_department(&db, "Eng").await;

        db.departments().delete(Selection::Cancelled).await.unwrap();
        assert_eq!(db.departments().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete_department_with_roles_is_rejected() {
        let db = empty_db().await;
        let sales = add_department(&db, "Sales").await;
        add_role(&db, "Rep", 50_000, sales).await;

        let err = db
            .departments()
            .delete(Selection::Chosen(sales))
            .await
            .unwrap_err();

        assert_eq!(err.constraint_kind(), Some(ConstraintKind::ForeignKey));
        assert_eq!(db.departments().count().await.unwrap(), 1);
    }
}
