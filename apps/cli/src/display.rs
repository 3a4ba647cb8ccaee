//! # Terminal Output
//!
//! The startup banner and the table renderer used by every "View ..." action.
//!
//! ```text
//! ┌────┬────────┬──────────┐
//! │ id │ name   │ budget   │   ← header (cyan when color is on)
//! ├────┼────────┼──────────┤
//! │ 1  │ Sales  │ $50,000… │
//! │ 2  │ Eng    │ null     │   ← absent values print as "null"
//! └────┴────────┴──────────┘
//! ```

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use roster_core::{DepartmentView, EmployeeView, Manager, RoleView};

// =============================================================================
// Banner
// =============================================================================

const BANNER_ART: &[&str] = &[
    r" _____                 _                       ",
    r"| ____|_ __ ___  _ __ | | ___  _   _  ___  ___ ",
    r"|  _| | '_ ` _ \| '_ \| |/ _ \| | | |/ _ \/ _ \",
    r"| |___| | | | | | |_) | | (_) | |_| |  __/  __/",
    r"|_____|_| |_| |_| .__/|_|\___/ \__, |\___|\___|",
    r"                |_|            |___/           ",
    r" __  __                                   ",
    r"|  \/  | __ _ _ __   __ _  __ _  ___ _ __ ",
    r"| |\/| |/ _` | '_ \ / _` |/ _` |/ _ \ '__|",
    r"| |  | | (_| | | | | (_| | (_| |  __/ |   ",
    r"|_|  |_|\__,_|_| |_|\__,_|\__, |\___|_|   ",
    r"                          |___/           ",
];

/// "Employee Manager" in ASCII art inside a border sized to the widest line.
pub fn banner() -> String {
    let width = BANNER_ART
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let border = format!("+{}+", "-".repeat(width));

    let mut out = String::new();
    out.push('\n');
    out.push_str(&border);
    out.push('\n');
    for line in BANNER_ART {
        let padded = format!("{line:<width$}");
        out.push_str(&format!(
            "|{}|\n",
            padded.if_supports_color(Stdout, |t| t.bright_blue())
        ));
    }
    out.push_str(&border);
    out.push('\n');
    out
}

// =============================================================================
// Tables
// =============================================================================

/// A row that can be shown in a table.
pub trait TableRow {
    /// Column names, in display order.
    fn headers() -> &'static [&'static str];

    /// Cell text, one per header. Absent values are `None`.
    fn cells(&self) -> Vec<Option<String>>;
}

impl TableRow for EmployeeView {
    fn headers() -> &'static [&'static str] {
        &["id", "first_name", "last_name", "title", "department", "salary", "manager"]
    }

    fn cells(&self) -> Vec<Option<String>> {
        vec![
            Some(self.id.to_string()),
            Some(self.first_name.clone()),
            Some(self.last_name.clone()),
            Some(self.title.clone()),
            Some(self.department.clone()),
            Some(self.salary.to_string()),
            self.manager.clone(),
        ]
    }
}

impl TableRow for RoleView {
    fn headers() -> &'static [&'static str] {
        &["id", "title", "department", "salary"]
    }

    fn cells(&self) -> Vec<Option<String>> {
        vec![
            Some(self.id.to_string()),
            Some(self.title.clone()),
            Some(self.department.clone()),
            Some(self.salary.to_string()),
        ]
    }
}

impl TableRow for DepartmentView {
    fn headers() -> &'static [&'static str] {
        &["id", "name", "budget"]
    }

    fn cells(&self) -> Vec<Option<String>> {
        vec![
            Some(self.id.to_string()),
            Some(self.name.clone()),
            self.budget.map(|budget| budget.to_string()),
        ]
    }
}

impl TableRow for Manager {
    fn headers() -> &'static [&'static str] {
        &["id", "first_name", "last_name"]
    }

    fn cells(&self) -> Vec<Option<String>> {
        vec![
            Some(self.id.to_string()),
            Some(self.first_name.clone()),
            Some(self.last_name.clone()),
        ]
    }
}

/// Renders rows as a boxed table, or "No rows." when there are none.
pub fn render_table<R: TableRow>(rows: &[R]) -> String {
    if rows.is_empty() {
        return "No rows.\n".to_string();
    }

    let headers = R::headers();
    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            row.cells()
                .into_iter()
                .map(|cell| cell.unwrap_or_else(|| "null".to_string()))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{left}{}{right}\n", segments.join(mid))
    };

    let mut out = rule("┌", "┬", "┐");

    let header_cells: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| {
            let padded = pad(header, *width);
            format!(" {} ", padded.if_supports_color(Stdout, |t| t.cyan()))
        })
        .collect();
    out.push_str(&format!("│{}│\n", header_cells.join("│")));
    out.push_str(&rule("├", "┼", "┤"));

    for row in &body {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!(" {} ", pad(cell, *width)))
            .collect();
        out.push_str(&format!("│{}│\n", cells.join("│")));
    }

    out.push_str(&rule("└", "┴", "┘"));
    out
}

/// Left-aligns `text` in `width` characters.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.chars().count());
    format!("{text}{}", " ".repeat(fill))
}

// =============================================================================
// Unit Tests
// =============================================================================
