//! # Menu Actions
//!
//! Each menu entry is: fetch what the prompts need, ask, make one repository
//! call, report.
//!
//! ```text
//! MenuAction::DeleteRole
//!      │
//!      ├── db.roles().list()              (choices)
//!      ├── prompts::pick_for_delete(..)   → Selection<RoleId>
//!      ├── db.roles().delete(target)      (no-op when Cancelled)
//!      ▼
//! Outcome::Message("Role deleted successfully." | "Deletion cancelled.")
//! ```

use roster_core::Selection;
use roster_db::Database;
use tracing::debug;

use crate::display::{render_table, TableRow};
use crate::error::CliResult;
use crate::menu::MenuAction;
use crate::prompts;

/// What the menu loop prints after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A rendered table.
    Table(String),
    /// A one-line status message.
    Message(&'static str),
    /// Leave the loop.
    Quit,
}

/// Runs one menu action against the store.
pub async fn perform(db: &Database, action: MenuAction) -> CliResult<Outcome> {
    debug!(action = %action, "Performing menu action");

    match action {
        MenuAction::ViewAllEmployees => table(db.employees().list().await?),

        MenuAction::AddEmployee => {
            let roles = db.roles().list().await?;
            let employees = db.employees().list().await?;
            let employee = prompts::new_employee(&roles, &employees)?;
            db.employees().insert(&employee).await?;
            done(action)
        }

        MenuAction::DeleteEmployee => {
            let employees = db.employees().list().await?;
            let target = prompts::pick_for_delete(
                "Select an employee to delete:",
                prompts::employee_choices(&employees),
                "No employees to delete.",
            )?;
            db.employees().delete(target).await?;
            deleted(action, target)
        }

        MenuAction::UpdateEmployeeRole => {
            let employees = db.employees().list().await?;
            let roles = db.roles().list().await?;
            let (employee, role) = prompts::role_update(&employees, &roles)?;
            db.employees().update_role(employee, role).await?;
            done(action)
        }

        MenuAction::ViewEmployeesByManager => {
            let managers = db.employees().managers().await?;
            let manager = prompts::pick(
                "Select a manager to view their direct reports:",
                prompts::manager_choices(&managers),
                "No employee has a manager yet.",
            )?;
            table(db.employees().by_manager(manager).await?)
        }

        MenuAction::UpdateEmployeeManager => {
            let employees = db.employees().list().await?;
            let (employee, manager) = prompts::manager_update(&employees)?;
            db.employees().update_manager(employee, manager).await?;
            done(action)
        }

        MenuAction::ViewAllRoles => table(db.roles().list().await?),

        MenuAction::AddRole => {
            let departments = db.departments().list().await?;
            let role = prompts::new_role(&departments)?;
            db.roles().insert(&role).await?;
            done(action)
        }

        MenuAction::DeleteRole => {
            let roles = db.roles().list().await?;
            let target = prompts::pick_for_delete(
                "Select a role to delete:",
                prompts::role_choices(&roles),
                "No roles to delete.",
            )?;
            db.roles().delete(target).await?;
            deleted(action, target)
        }

        MenuAction::ViewAllDepartments => table(db.departments().list().await?),

        MenuAction::ViewEmployeesByDepartment => {
            let departments = db.departments().list().await?;
            let department = prompts::pick(
                "Select a department to view employees:",
                prompts::department_choices(&departments),
                "No departments yet. Add a department first.",
            )?;
            table(db.employees().by_department(department).await?)
        }

        MenuAction::AddDepartment => {
            let department = prompts::new_department()?;
            db.departments().insert(&department).await?;
            done(action)
        }

        MenuAction::DeleteDepartment => {
            let departments = db.departments().list().await?;
            let target = prompts::pick_for_delete(
                "Select a department to delete:",
                prompts::department_choices(&departments),
                "No departments to delete.",
            )?;
            db.departments().delete(target).await?;
            deleted(action, target)
        }

        MenuAction::Quit => Ok(Outcome::Quit),
    }
}

fn table<R: TableRow>(rows: Vec<R>) -> CliResult<Outcome> {
    Ok(Outcome::Table(render_table(&rows)))
}

fn done(action: MenuAction) -> CliResult<Outcome> {
    Ok(Outcome::Message(action.success_message().unwrap_or("Done.")))
}

/// Status line for a delete. A cancelled target never reached the store.
fn deleted<T>(action: MenuAction, target: Selection<T>) -> CliResult<Outcome> {
    if target.is_cancelled() {
        Ok(Outcome::Message("Deletion cancelled."))
    } else {
        done(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{DepartmentId, NewDepartment};
    use roster_db::DbConfig;

    async fn db_with_department() -> (Database, DepartmentId) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let id = db
            .departments()
            .insert(&NewDepartment::new("Sales").unwrap())
            .await
            .unwrap();
        (db, id)
    }

    #[tokio::test]
    async fn test_view_actions_render_tables() {
        owo_colors::set_override(false);
        let (db, _) = db_with_department().await;

        let outcome = perform(&db, MenuAction::ViewAllDepartments).await.unwrap();
        let Outcome::Table(table) = outcome else {
            panic!("expected a table");
        };
        assert!(table.contains("Sales"));
        assert!(table.contains("null"));

        let outcome = perform(&db, MenuAction::ViewAllEmployees).await.unwrap();
        assert_eq!(outcome, Outcome::Table("No rows.\n".to_string()));
    }

    #[tokio::test]
    async fn test_quit() {
        let (db, _) = db_with_department().await;
        assert_eq!(perform(&db, MenuAction::Quit).await.unwrap(), Outcome::Quit);
    }

    #[test]
    fn test_delete_messages() {
        let outcome = deleted(MenuAction::DeleteDepartment, Selection::<DepartmentId>::Cancelled);
        assert_eq!(outcome.unwrap(), Outcome::Message("Deletion cancelled."));

        let outcome = deleted(MenuAction::DeleteDepartment, Selection::Chosen(DepartmentId::new(1)));
        assert_eq!(outcome.unwrap(), Outcome::Message("Department deleted successfully."));
    }

    #[tokio::test]
    async fn test_prompted_actions_with_nothing_to_pick() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let err = perform(&db, MenuAction::DeleteRole).await.unwrap_err();
        assert_eq!(err.to_string(), "No roles to delete.");

        let err = perform(&db, MenuAction::AddEmployee).await.unwrap_err();
        assert_eq!(err.to_string(), "No roles yet. Add a role first.");
    }
}
