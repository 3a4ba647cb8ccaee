//! # Money Module
//!
//! Provides the `Money` type used for role salaries and department budgets.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing salaries as floats:                                           │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A department budget is a SUM() over many salaries, so the error       │
//! │  accumulates with every filled role.                                   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    role.salary is stored as INTEGER cents, SUM() stays exact           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use roster_core::money::Money;
//!
//! let salary: Money = "50,000".parse().unwrap();
//! assert_eq!(salary, Money::from_dollars(50_000));
//! assert_eq!(salary.to_string(), "$50,000.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  "Enter role salary:" ──► Money::from_str ──► role.salary (INTEGER)     │
/// │                                                     │                   │
/// │                     ┌───────────────────────────────┤                   │
/// │                     ▼                               ▼                   │
/// │           RoleView.salary                 SUM() ──► DepartmentView      │
/// │           EmployeeView.salary                       .budget             │
/// │                     │                               │                   │
/// │                     └──────► "$50,000.00" in tables ◄┘                  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use roster_core::money::Money;
    ///
    /// let salary = Money::from_cents(5_000_050); // $50,000.50
    /// assert_eq!(salary.cents(), 5_000_050);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole dollars.
    #[inline]
    pub const fn from_dollars(dollars: i64) -> Self {
        Money(dollars * 100)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses user-typed salaries.
///
/// ## Accepted Forms
/// ```text
/// 50000        → $50,000.00
/// 50000.5      → $50,000.50
/// 50,000.50    → $50,000.50
/// $50000       → $50,000.00
/// -12          → -$12.00 (parses; rejected later by validate_salary)
/// ```
///
/// More than two fractional digits is an error rather than a silent rounding.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "salary".to_string(),
            reason: reason.to_string(),
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Required {
                field: "salary".to_string(),
            });
        }

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);
        let cleaned: String = rest.chars().filter(|c| *c != ',' && *c != '_').collect();

        let (whole, fraction) = match cleaned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (cleaned.as_str(), ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid("must contain digits"));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("must be a number like 50000 or 50000.00"));
        }
        if fraction.len() > 2 {
            return Err(invalid("at most two decimal places"));
        }

        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid("amount is too large"))?
        };
        let cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid("bad cents"))? * 10,
            _ => fraction.parse().map_err(|_| invalid("bad cents"))?,
        };

        let total = dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .ok_or_else(|| invalid("amount is too large"))?;

        Ok(Money(if negative { -total } else { total }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Displays as `$50,000.00` with thousands separators.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let digits = self.dollars().unsigned_abs().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        write!(f, "{}${}.{:02}", sign, grouped, self.cents_part())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_dollars(50_000).to_string(), "$50,000.00");
        assert_eq!(Money::from_cents(1099).to_string(), "$10.99");
        assert_eq!(Money::from_cents(100_000_000).to_string(), "$1,000,000.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_parse_accepted_forms() {
        assert_eq!("50000".parse::<Money>().unwrap(), Money::from_dollars(50_000));
        assert_eq!("50000.5".parse::<Money>().unwrap().cents(), 5_000_050);
        assert_eq!("50,000.50".parse::<Money>().unwrap().cents(), 5_000_050);
        assert_eq!(" $120000 ".parse::<Money>().unwrap(), Money::from_dollars(120_000));
        assert_eq!(".75".parse::<Money>().unwrap().cents(), 75);
        assert_eq!("-12".parse::<Money>().unwrap().cents(), -1200);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            "".parse::<Money>(),
            Err(ValidationError::Required { .. })
        ));
        assert!("abc".parse::<Money>().is_err());
        assert!("12.345".parse::<Money>().is_err());
        assert!("1.2.3".parse::<Money>().is_err());
        assert!("$".parse::<Money>().is_err());
        assert!("99999999999999999999".parse::<Money>().is_err());
    }
}
