//! # roster
//!
//! Interactive manager for an organisation's departments, roles and
//! employees.
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  parse flags ─► init tracing ─► load config ─► open database           │
//! │                                                (schema bootstrap)       │
//! │                                                      │                  │
//! │                     ┌────────────────────────────────┤                  │
//! │                     ▼                                ▼                  │
//! │            roster list <what>                 banner + menu loop        │
//! │            (table or --json, exit)            (until Quit / Ctrl+C)     │
//! │                                                                         │
//! │  Any startup failure exits non-zero.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod actions;
mod config;
mod display;
mod error;
mod logging;
mod menu;
mod prompts;

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use inquire::{InquireError, Select};
use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};
use serde::Serialize;
use tracing::{error, info};

use crate::actions::Outcome;
use crate::config::AppConfig;
use crate::display::{render_table, TableRow};
use crate::error::{CliError, CliResult};
use crate::menu::MenuAction;
use roster_core::{DepartmentId, EmployeeId};
use roster_db::Database;

#[derive(Parser)]
#[command(name = "roster", version)]
#[command(about = "Manage departments, roles and employees", long_about = None)]
struct Cli {
    /// SQLite database file (created if missing)
    #[arg(long, global = true, env = "ROSTER_DATABASE_PATH")]
    db: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Run one command and exit instead of opening the menu
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print a list and exit
    List {
        /// What to list
        #[arg(value_enum)]
        what: ListTarget,

        /// Print rows as a JSON array
        #[arg(long)]
        json: bool,

        /// Only direct reports of this employee id (employees only)
        #[arg(long, conflicts_with = "department")]
        manager: Option<i64>,

        /// Only employees of this department id (employees only)
        #[arg(long)]
        department: Option<i64>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ListTarget {
    Employees,
    Roles,
    Departments,
    Managers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_tracing(cli.verbose)?;

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    if let Some(path) = cli.db {
        config.database_path = path;
    }
    if cli.no_color {
        config.color = Some(false);
    }
    if let Some(enabled) = config.color {
        owo_colors::set_override(enabled);
    }

    info!(path = %config.database_path.display(), "Configuration loaded");

    let db = Database::new(config.db_config())
        .await
        .with_context(|| format!("Failed to open {}", config.database_path.display()))?;

    let result = match cli.command {
        Some(Command::List {
            what,
            json,
            manager,
            department,
        }) => list(&db, what, json, manager, department).await,
        None => {
            run_menu(&db).await;
            Ok(())
        }
    };

    db.close().await;
    result
}

// =============================================================================
// Menu Loop
// =============================================================================

async fn run_menu(db: &Database) {
    print!("{}", display::banner());

    loop {
        let action = match Select::new("What do you want to do?", MenuAction::ALL.to_vec())
            .with_page_size(MenuAction::ALL.len())
            .prompt()
        {
            Ok(action) => action,
            // Ctrl+C or Esc at the menu
            Err(InquireError::OperationInterrupted | InquireError::OperationCanceled) => {
                MenuAction::Quit
            }
            Err(err) => {
                error!(error = %err, "Menu prompt failed");
                eprintln!("Error reading menu choice: {err}");
                MenuAction::Quit
            }
        };

        match actions::perform(db, action).await {
            Ok(Outcome::Table(table)) => print!("{table}"),
            Ok(Outcome::Message(message)) => println!("{message}"),
            Ok(Outcome::Quit) => break,
            Err(err) if err.is_interrupted() => break,
            Err(err) if err.is_cancelled() => println!("Cancelled."),
            Err(CliError::NothingToChoose(hint)) => {
                println!("{}", hint.if_supports_color(Stdout, |t| t.dimmed()));
            }
            Err(err) => {
                error!(action = %action, error = %err, "Menu action failed");
                eprintln!(
                    "{} {}: {}",
                    "Error".if_supports_color(Stderr, |t| t.red()),
                    action.activity(),
                    err
                );
            }
        }
    }

    println!("Goodbye!");
}

// =============================================================================
// One-shot Commands
// =============================================================================

async fn list(
    db: &Database,
    what: ListTarget,
    json: bool,
    manager: Option<i64>,
    department: Option<i64>,
) -> anyhow::Result<()> {
    if what != ListTarget::Employees && (manager.is_some() || department.is_some()) {
        bail!("--manager and --department only apply to `list employees`");
    }

    let output = match what {
        ListTarget::Employees => {
            let employees = db.employees();
            let rows = match (manager, department) {
                (Some(id), _) => employees.by_manager(EmployeeId::new(id)).await?,
                (None, Some(id)) => employees.by_department(DepartmentId::new(id)).await?,
                (None, None) => employees.list().await?,
            };
            format_rows(&rows, json)?
        }
        ListTarget::Roles => format_rows(&db.roles().list().await?, json)?,
        ListTarget::Departments => format_rows(&db.departments().list().await?, json)?,
        ListTarget::Managers => format_rows(&db.employees().managers().await?, json)?,
    };

    print!("{output}");
    Ok(())
}

fn format_rows<R: TableRow + Serialize>(rows: &[R], json: bool) -> CliResult<String> {
    if json {
        Ok(format!("{}\n", serde_json::to_string_pretty(rows)?))
    } else {
        Ok(render_table(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{DepartmentView, Money};

    #[test]
    fn test_cli_parses_list_command() {
        let cli = Cli::try_parse_from([
            "roster", "list", "employees", "--manager", "3", "--json", "--db", "/tmp/x.db",
        ])
        .unwrap();

        assert_eq!(cli.db, Some(PathBuf::from("/tmp/x.db")));
        match cli.command {
            Some(Command::List {
                what,
                json,
                manager,
                department,
            }) => {
                assert_eq!(what, ListTarget::Employees);
                assert!(json);
                assert_eq!(manager, Some(3));
                assert_eq!(department, None);
            }
            None => panic!("expected list command"),
        }
    }

    #[test]
    fn test_manager_and_department_conflict() {
        let result = Cli::try_parse_from([
            "roster", "list", "employees", "--manager", "1", "--department", "2",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_subcommand_opens_menu() {
        let cli = Cli::try_parse_from(["roster", "--no-color"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.no_color);
    }

    #[test]
    fn test_format_rows_json() {
        let rows = vec![DepartmentView {
            id: DepartmentId::new(1),
            name: "Sales".to_string(),
            budget: Some(Money::from_dollars(50_000)),
        }];

        let json = format_rows(&rows, true).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!([{"id": 1, "name": "Sales", "budget": 5_000_000}])
        );
    }
}
