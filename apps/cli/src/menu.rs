//! Main menu entries.

use std::fmt;

/// One entry of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ViewAllEmployees,
    AddEmployee,
    DeleteEmployee,
    UpdateEmployeeRole,
    ViewEmployeesByManager,
    UpdateEmployeeManager,
    ViewAllRoles,
    AddRole,
    DeleteRole,
    ViewAllDepartments,
    ViewEmployeesByDepartment,
    AddDepartment,
    DeleteDepartment,
    Quit,
}

impl MenuAction {
    /// Every entry, in the order the menu shows them.
    pub const ALL: [MenuAction; 14] = [
        MenuAction::ViewAllEmployees,
        MenuAction::AddEmployee,
        MenuAction::DeleteEmployee,
        MenuAction::UpdateEmployeeRole,
        MenuAction::ViewEmployeesByManager,
        MenuAction::UpdateEmployeeManager,
        MenuAction::ViewAllRoles,
        MenuAction::AddRole,
        MenuAction::DeleteRole,
        MenuAction::ViewAllDepartments,
        MenuAction::ViewEmployeesByDepartment,
        MenuAction::AddDepartment,
        MenuAction::DeleteDepartment,
        MenuAction::Quit,
    ];

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::ViewAllEmployees => "View All Employees",
            MenuAction::AddEmployee => "Add Employee",
            MenuAction::DeleteEmployee => "Delete Employee",
            MenuAction::UpdateEmployeeRole => "Update Employee Role",
            MenuAction::ViewEmployeesByManager => "View Employees by Manager",
            MenuAction::UpdateEmployeeManager => "Update Employee Manager",
            MenuAction::ViewAllRoles => "View All Roles",
            MenuAction::AddRole => "Add Role",
            MenuAction::DeleteRole => "Delete Role",
            MenuAction::ViewAllDepartments => "View All Departments",
            MenuAction::ViewEmployeesByDepartment => "View Employees by Department",
            MenuAction::AddDepartment => "Add Department",
            MenuAction::DeleteDepartment => "Delete Department",
            MenuAction::Quit => "Quit",
        }
    }

    /// What the action was doing, for "Error <activity>: ..." lines.
    pub fn activity(&self) -> &'static str {
        match self {
            MenuAction::ViewAllEmployees => "viewing employees",
            MenuAction::AddEmployee => "adding employee",
            MenuAction::DeleteEmployee => "deleting employee",
            MenuAction::UpdateEmployeeRole => "updating employee role",
            MenuAction::ViewEmployeesByManager => "viewing employees by manager",
            MenuAction::UpdateEmployeeManager => "updating employee manager",
            MenuAction::ViewAllRoles => "viewing roles",
            MenuAction::AddRole => "adding role",
            MenuAction::DeleteRole => "deleting role",
            MenuAction::ViewAllDepartments => "viewing departments",
            MenuAction::ViewEmployeesByDepartment => "viewing employees by department",
            MenuAction::AddDepartment => "adding department",
            MenuAction::DeleteDepartment => "deleting department",
            MenuAction::Quit => "quitting",
        }
    }

    /// Line printed when a write completes.
    pub fn success_message(&self) -> Option<&'static str> {
        match self {
            MenuAction::AddEmployee => Some("Employee added successfully."),
            MenuAction::DeleteEmployee => Some("Employee deleted successfully."),
            MenuAction::UpdateEmployeeRole => Some("Employee role updated successfully."),
            MenuAction::UpdateEmployeeManager => Some("Employee manager updated successfully."),
            MenuAction::AddRole => Some("Role added successfully."),
            MenuAction::DeleteRole => Some("Role deleted successfully."),
            MenuAction::AddDepartment => Some("Department added successfully."),
            MenuAction::DeleteDepartment => Some("Department deleted successfully."),
            _ => None,
        }
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_order() {
        let labels: Vec<_> = MenuAction::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(labels.first(), Some(&"View All Employees"));
        assert_eq!(labels.last(), Some(&"Quit"));
        assert_eq!(labels[4], "View Employees by Manager");
        assert_eq!(labels[10], "View Employees by Department");
    }

    #[test]
    fn test_only_writes_have_success_messages() {
        for action in MenuAction::ALL {
            let is_write = action.label().starts_with("Add")
                || action.label().starts_with("Delete")
                || action.label().starts_with("Update");
            assert_eq!(action.success_message().is_some(), is_write, "{action}");
        }
    }
}
