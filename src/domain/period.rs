//! Accounting period identifiers (calendar months).

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// A calendar month, rendered as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Result<Self, LedgerError> {
        if !(1..=12).contains(&month) {
            return Err(LedgerError::Format(format!(
                "month {} is outside 1..=12",
                month
            )));
        }
        if !(0..=9999).contains(&year) {
            return Err(LedgerError::Format(format!("year {} is not four digits", year)));
        }
        Ok(Self { year, month })
    }

    /// Truncates a date to its month.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn label(&self) -> String {
        self.to_string()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::containing(date) == *self
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let invalid = || LedgerError::Format(format!("`{}` is not a YYYY-MM label", trimmed));
        let (year, month) = trimmed.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Period::new(year, month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_zero_padded() {
        let period = Period::containing(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(period.label(), "2024-02");
    }

    #[test]
    fn parses_labels() {
        let period: Period = "2023-11\n".parse().unwrap();
        assert_eq!(period.year(), 2023);
        assert_eq!(period.month(), 11);
    }

    #[test]
    fn rejects_malformed_labels() {
        for raw in ["", "2024", "2024-13", "24-01", "2024-1", "abcd-ef", "2024-01-05"] {
            assert!(raw.parse::<Period>().is_err(), "{raw:?} should not parse");
        }
    }

    #[test]
    fn contains_checks_month() {
        let period: Period = "2024-01".parse().unwrap();
        assert!(period.contains(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()));
        assert!(!period.contains(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
    }
}
