//! # Role Repository
//!
//! Roles joined with the name of the department they belong to.

use sqlx::SqlitePool;
use tracing::{debug, warn};

use crate::error::DbResult;
use roster_core::{NewRole, RoleId, RoleView, Selection};

/// Repository for role database operations.
#[derive(Debug, Clone)]
pub struct RoleRepository {
    pool: SqlitePool,
}

impl RoleRepository {
    /// Creates a new RoleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        RoleRepository { pool }
    }

    /// Lists every role with its department name, ordered by id.
    pub async fn list(&self) -> DbResult<Vec<RoleView>> {
        debug!("Listing roles");

        let roles = sqlx::query_as::<_, RoleView>(
            r#"
            SELECT
                r.id,
                r.title,
                d.name AS department,
                r.salary
            FROM role r
            INNER JOIN department d ON d.id = r.department
            ORDER BY r.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = roles.len(), "Listed roles");
        Ok(roles)
    }

    /// Inserts a role and returns its id.
    ///
    /// ## Returns
    /// * `Ok(RoleId)` - The new role
    /// * `Err(DbError::ConstraintViolation)` - The department does not exist
    pub async fn insert(&self, role: &NewRole) -> DbResult<RoleId> {
        debug!(
            title = %role.title,
            salary = %role.salary,
            department_id = %role.department_id,
            "Inserting role"
        );

        let result = sqlx::query("INSERT INTO role (title, salary, department) VALUES (?1, ?2, ?3)")
            .bind(&role.title)
            .bind(role.salary)
            .bind(role.department_id)
            .execute(&self.pool)
            .await?;

        let id = RoleId::new(result.last_insert_rowid());
        debug!(id = %id, "Role inserted");
        Ok(id)
    }

    /// Deletes the selected role.
    ///
    /// Fails with a foreign key violation while employees still hold it.
    pub async fn delete(&self, target: Selection<RoleId>) -> DbResult<()> {
        let Selection::Chosen(id) = target else {
            debug!("Role deletion cancelled");
            return Ok(());
        };

        debug!(id = %id, "Deleting role");

        let result = sqlx::query("DELETE FROM role WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            warn!(id = %id, "No role matched delete");
        }

        Ok(())
    }

    /// Counts roles (for diagnostics and seeding).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM role")
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
    use roster_core::{DepartmentId, Money, NewRole, RoleId, Selection};

    #[tokio::test]
    async fn test_list_roles_joins_department() {
        let db = empty_db().await;
        let sales = add_department(&db, "Sales").await;
        let eng = add_department(&db, "Eng").await;
        add_role(&db, "Rep", 50_000, sales).await;
        add_role(&db, "Engineer", 120_000, eng).await;

        let roles = db.roles().list().await.unwrap();
        assert_eq!(roles.len(), 2);
        assert_eq!(roles[0].title, "Rep");
        assert_eq!(roles[0].department, "Sales");
        assert_eq!(roles[0].salary, Money::from_dollars(50_000));
        assert_eq!(roles[1].department, "Eng");
    }

    #[tokio::test]
    async fn test_salary_keeps_cents() {
        let db = empty_db().await;
        let sales = add_department(&db, "Sales").await;
        let salary: Money = "45,250.75".parse().unwrap();
        db.roles()
            .insert(&NewRole::new("Clerk", salary, sales).unwrap())
            .await
            .unwrap();

        let roles = db.roles().list().await.unwrap();
        assert_eq!(roles[0].salary.cents(), 4_525_075);
    }

    #[tokio::test]
    async fn test_insert_role_for_missing_department() {
        let db = empty_db().await;
        let role = NewRole::new("Rep", Money::from_dollars(1), DepartmentId::new(42)).unwrap();

        let err = db.roles().insert(&role).await.unwrap_err();
        assert_eq!(err.constraint_kind(), Some(ConstraintKind::ForeignKey));
    }

    #[tokio::test]
    async fn test_delete_role_held_by_employee_is_rejected() {
        let db = empty_db().await;
        let sales = add_department(&db, "Sales").await;
        let rep = add_role(&db, "Rep", 50_000, sales).await;
        add_employee(&db, "Ann", "Lee", rep, None).await;

        let err = db.roles().delete(Selection::Chosen(rep)).await.unwrap_err();
        assert!(err.is_constraint_violation());
        assert_eq!(db.roles().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_role_succeeds() {
        let db = empty_db().await;

        db.roles().delete(Selection::Chosen(RoleId::new(999))).await.unwrap();
        db.roles().delete(Selection::Cancelled).await.unwrap();
    }
}
