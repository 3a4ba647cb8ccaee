//! Interactive prompts.
//!
//! Choice lists show names and carry ids. Building a list is separate from
//! asking, so the lists can be checked without a terminal.
//!
//! ```text
//! ? Select an employee to delete:
//! > Cancel
//!   Ann Lee
//!   Bo Park
//! ```

use std::fmt;

use inquire::validator::Validation;
use inquire::{CustomUserError, Select, Text};

use crate::error::{CliError, CliResult};
use roster_core::validation::{parse_salary, validate_name};
use roster_core::{
    DepartmentId, DepartmentView, EmployeeId, EmployeeView, Manager, NewDepartment, NewEmployee,
    NewRole, RoleId, RoleView, Selection,
};

const PAGE_SIZE: usize = 12;

// =============================================================================
// Choices
// =============================================================================

/// A labelled option whose value is hidden from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice<T> {
    pub label: String,
    pub value: T,
}

impl<T> Choice<T> {
    fn new(label: impl Into<String>, value: T) -> Self {
        Choice {
            label: label.into(),
            value,
        }
    }
}

impl<T> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

pub fn employee_choices(employees: &[EmployeeView]) -> Vec<Choice<EmployeeId>> {
    employees
        .iter()
        .map(|e| Choice::new(e.full_name(), e.id))
        .collect()
}

pub fn role_choices(roles: &[RoleView]) -> Vec<Choice<RoleId>> {
    roles.iter().map(|r| Choice::new(&r.title, r.id)).collect()
}

pub fn department_choices(departments: &[DepartmentView]) -> Vec<Choice<DepartmentId>> {
    departments
        .iter()
        .map(|d| Choice::new(&d.name, d.id))
        .collect()
}

pub fn manager_choices(managers: &[Manager]) -> Vec<Choice<EmployeeId>> {
    managers
        .iter()
        .map(|m| Choice::new(m.full_name(), m.id))
        .collect()
}

/// Candidate managers for `subject`: every other employee, then "None".
///
/// `subject` is `None` while adding an employee who does not exist yet.
pub fn manager_options(
    employees: &[EmployeeView],
    subject: Option<EmployeeId>,
) -> Vec<Choice<Option<EmployeeId>>> {
    employees
        .iter()
        .filter(|e| Some(e.id) != subject)
        .map(|e| Choice::new(e.full_name(), Some(e.id)))
        .chain(std::iter::once(Choice::new("None", None)))
        .collect()
}

/// "Cancel" followed by the deletable entries.
pub fn delete_options<T>(choices: Vec<Choice<T>>) -> Vec<Choice<Option<T>>> {
    std::iter::once(Choice::new("Cancel", None))
        .chain(choices.into_iter().map(|c| Choice::new(c.label, Some(c.value))))
        .collect()
}

// =============================================================================
// Primitive prompts
// =============================================================================

/// Asks the user to pick one of `choices`.
///
/// ## Returns
/// * `Err(CliError::NothingToChoose(hint))` - `choices` is empty
pub fn pick<T>(message: &str, choices: Vec<Choice<T>>, hint: &'static str) -> CliResult<T> {
    if choices.is_empty() {
        return Err(CliError::NothingToChoose(hint));
    }

    let choice = Select::new(message, choices)
        .with_page_size(PAGE_SIZE)
        .prompt()?;
    Ok(choice.value)
}

/// Asks which entry to delete. "Cancel" and Esc both give
/// [`Selection::Cancelled`].
pub fn pick_for_delete<T>(
    message: &str,
    choices: Vec<Choice<T>>,
    hint: &'static str,
) -> CliResult<Selection<T>> {
    if choices.is_empty() {
        return Err(CliError::NothingToChoose(hint));
    }

    let picked = Select::new(message, delete_options(choices))
        .with_page_size(PAGE_SIZE)
        .prompt_skippable()?;
    Ok(Selection::from(picked.and_then(|choice| choice.value)))
}

/// Asks for a name-like value, re-asking until it passes validation.
fn ask_name(message: &str, field: &'static str) -> CliResult<String> {
    let answer = Text::new(message)
        .with_validator(move |input: &str| -> Result<Validation, CustomUserError> {
            Ok(match validate_name(field, input) {
                Ok(_) => Validation::Valid,
                Err(e) => Validation::Invalid(e.to_string().into()),
            })
        })
        .prompt()?;
    Ok(answer)
}

// =============================================================================
// Action prompts
// =============================================================================

/// Add Employee: names, role, manager.
pub fn new_employee(roles: &[RoleView], employees: &[EmployeeView]) -> CliResult<NewEmployee> {
    if roles.is_empty() {
        return Err(CliError::NothingToChoose("No roles yet. Add a role first."));
    }

    let first_name = ask_name("Enter employee first name:", "first name")?;
    let last_name = ask_name("Enter employee last name:", "last name")?;
    let role_id = pick("Select employee role:", role_choices(roles), "No roles yet.")?;
    let manager_id = pick(
        "Select employee manager:",
        manager_options(employees, None),
        "No employees yet.",
    )?;

    Ok(NewEmployee::new(&first_name, &last_name, role_id, manager_id)?)
}

/// Add Role: title, salary, department.
pub fn new_role(departments: &[DepartmentView]) -> CliResult<NewRole> {
    if departments.is_empty() {
        return Err(CliError::NothingToChoose(
            "No departments yet. Add a department first.",
        ));
    }

    let title = ask_name("Enter role title:", "title")?;
    let salary = Text::new("Enter role salary:")
        .with_placeholder("50000")
        .with_validator(|input: &str| -> Result<Validation, CustomUserError> {
            Ok(match parse_salary(input) {
                Ok(_) => Validation::Valid,
                Err(e) => Validation::Invalid(e.to_string().into()),
            })
        })
        .prompt()?;
    let department_id = pick(
        "Select department:",
        department_choices(departments),
        "No departments yet.",
    )?;

    Ok(NewRole::new(&title, parse_salary(&salary)?, department_id)?)
}

/// Add Department: name.
pub fn new_department() -> CliResult<NewDepartment> {
    let name = ask_name("Enter department name:", "department name")?;
    Ok(NewDepartment::new(&name)?)
}

/// Update Employee Role: employee, then role.
pub fn role_update(
    employees: &[EmployeeView],
    roles: &[RoleView],
) -> CliResult<(EmployeeId, RoleId)> {
    if roles.is_empty() {
        return Err(CliError::NothingToChoose("No roles yet. Add a role first."));
    }

    let employee = pick(
        "Which employee's role do you want to update?",
        employee_choices(employees),
        "No employees yet. Add an employee first.",
    )?;
    let role = pick(
        "Which role do you want to assign to the selected employee?",
        role_choices(roles),
        "No roles yet.",
    )?;
    Ok((employee, role))
}

/// Update Employee Manager: employee, then one of the others or "None".
pub fn manager_update(employees: &[EmployeeView]) -> CliResult<(EmployeeId, Option<EmployeeId>)> {
    let employee = pick(
        "Which employee's manager do you want to update?",
        employee_choices(employees),
        "No employees yet. Add an employee first.",
    )?;
    let manager = pick(
        "Select the new manager for the selected employee:",
        manager_options(employees, Some(employee)),
        "No employees yet.",
    )?;
    Ok((employee, manager))
}

// =============================================================================
// Unit Tests
// =============================================================================
