//! A single recorded expense.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::Category;
use crate::errors::{LedgerError, Result};

/// Date format used for entry dates both in memory labels and on disk.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One expense in the current period. Entries have no id; their position in
/// the ledger identifies them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseEntry {
    pub date: NaiveDate,
    pub amount: f64,
    pub category: Category,
}

impl ExpenseEntry {
    pub fn new(date: NaiveDate, amount: f64, category: Category) -> Self {
        Self {
            date,
            amount,
            category,
        }
    }

    pub fn date_label(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// Parses user-supplied money text into a finite, non-negative amount.
pub fn parse_amount(raw: &str) -> Result<f64> {
    parse_decimal(raw, "amount")
}

/// Like [`parse_amount`], naming `field` in validation messages.
pub fn parse_decimal(raw: &str, field: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::Validation(format!("{} is required", field)));
    }
    let value: f64 = trimmed.parse().map_err(|_| {
        LedgerError::Validation(format!("{} `{}` is not a number", field, trimmed))
    })?;
    validate_amount(value)?;
    Ok(value)
}

pub fn validate_amount(value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(LedgerError::Validation(format!(
            "amount `{}` must be a finite number",
            value
        )));
    }
    if value < 0.0 {
        return Err(LedgerError::Validation(format!(
            "amount `{}` must not be negative",
            value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_accepts_decimals() {
        assert_eq!(parse_amount(" 12.50 ").unwrap(), 12.5);
        assert_eq!(parse_amount("0").unwrap(), 0.0);
    }

    #[test]
    fn parse_amount_rejects_bad_input() {
        for raw in ["", "abc", "-3", "inf", "NaN"] {
            assert!(
                matches!(parse_amount(raw), Err(LedgerError::Validation(_))),
                "expected validation error for {raw:?}"
            );
        }
    }

    #[test]
    fn date_label_is_iso() {
        let entry = ExpenseEntry::new(
            NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(),
            5.0,
            Category::Study,
        );
        assert_eq!(entry.date_label(), "2024-03-07");
    }
}
