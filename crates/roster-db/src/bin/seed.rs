//! # Seed Data Generator
//!
//! Populates an empty database with a small demo organisation.
//!
//! ## Usage
//! ```bash
//! # Seed ./roster.db (default)
//! cargo run -p roster-db --bin seed
//!
//! # Specify database path
//! cargo run -p roster-db --bin seed -- --db ./data/roster.db
//! ```
//!
//! ## Generated Organisation
//! - Four departments (Sales, Engineering, Finance, Legal)
//! - Two roles per department, each with a salary
//! - Eight employees; the first hire of each department leads it and the
//!   department leads report to the CEO's stand-in, the Sales lead

use std::env;

use roster_core::{DepartmentId, EmployeeId, Money, NewDepartment, NewEmployee, NewRole, RoleId};
use roster_db::{Database, DbConfig};

/// Departments with their roles as (title, yearly salary in dollars).
/// The first role of each department is its lead role.
const ORGANISATION: &[(&str, &[(&str, i64)])] = &[
    ("Sales", &[("Sales Lead", 100_000), ("Salesperson", 80_000)]),
    ("Engineering", &[("Lead Engineer", 150_000), ("Software Engineer", 120_000)]),
    ("Finance", &[("Account Manager", 160_000), ("Accountant", 125_000)]),
    ("Legal", &[("Legal Team Lead", 250_000), ("Lawyer", 190_000)]),
];

/// Employees as (first name, last name, department index, role index).
const PEOPLE: &[(&str, &str, usize, usize)] = &[
    ("John", "Doe", 0, 0),
    ("Mike", "Chan", 0, 1),
    ("Ashley", "Rodriguez", 1, 0),
    ("Kevin", "Tupik", 1, 1),
    ("Kunal", "Singh", 2, 0),
    ("Malia", "Brown", 2, 1),
    ("Sarah", "Lourd", 3, 0),
    ("Tom", "Allen", 3, 1),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./roster.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Roster Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./roster.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Roster Seed Data Generator");
    println!("==========================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Schema ready");

    let existing = db.employees().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} employees", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    // Departments and roles
    let mut roles: Vec<Vec<RoleId>> = Vec::with_capacity(ORGANISATION.len());
    for (name, titles) in ORGANISATION {
        let department = db.departments().insert(&NewDepartment::new(name)?).await?;
        roles.push(seed_roles(&db, department, titles).await?);
    }

    // Employees: leads first, so reports can point at them
    let mut leads: Vec<Option<EmployeeId>> = vec![None; ORGANISATION.len()];
    let mut hired = 0;
    for &(first, last, department, role) in PEOPLE {
        let manager = if role == 0 {
            // Department leads report to the first lead hired.
            leads.iter().flatten().next().copied()
        } else {
            leads[department]
        };

        let employee = NewEmployee::new(first, last, roles[department][role], manager)?;
        let id = db.employees().insert(&employee).await?;
        if role == 0 {
            leads[department] = Some(id);
        }
        hired += 1;
    }

    println!();
    println!(
        "✓ Seeded {} departments, {} roles, {} employees",
        db.departments().count().await?,
        db.roles().count().await?,
        hired
    );

    for department in db.departments().list().await? {
        let budget = department
            .budget
            .map(|b| b.to_string())
            .unwrap_or_else(|| "null".to_string());
        println!("  {:<12} budget {}", department.name, budget);
    }

    db.close().await;
    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Inserts the roles of one department, in order.
async fn seed_roles(
    db: &Database,
    department: DepartmentId,
    titles: &[(&str, i64)],
) -> Result<Vec<RoleId>, Box<dyn std::error::Error>> {
    let mut ids = Vec::with_capacity(titles.len());
    for &(title, dollars) in titles {
        let role = NewRole::new(title, Money::from_dollars(dollars), department)?;
        ids.push(db.roles().insert(&role).await?);
    }
    Ok(ids)
}
