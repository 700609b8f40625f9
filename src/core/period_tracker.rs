//! Month rollover detection.

use crate::core::time::Clock;
use crate::domain::Period;
use crate::errors::Result;
use crate::storage::{PeriodStore, RecordStore};

/// Outcome of checking the persisted period against the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Same period as before, or the very first run.
    Stable,
    /// The month changed and the ledger was cleared.
    Rolled { previous: Option<Period> },
}

impl Transition {
    pub fn rolled(&self) -> bool {
        matches!(self, Transition::Rolled { .. })
    }
}

/// Computes the active period and clears expenses when it differs from the
/// persisted one.
pub struct PeriodTracker<'a> {
    clock: &'a dyn Clock,
}

impl<'a> PeriodTracker<'a> {
    pub fn new(clock: &'a dyn Clock) -> Self {
        Self { clock }
    }

    pub fn current(&self) -> Period {
        Period::containing(self.clock.today())
    }

    pub fn transition(
        &self,
        periods: &dyn PeriodStore,
        records: &dyn RecordStore,
    ) -> Result<(Period, Transition)> {
        let current = self.current();
        let Some(label) = periods.load_label()? else {
            periods.save(current)?;
            tracing::debug!(period = %current, "recorded first period");
            return Ok((current, Transition::Stable));
        };

        let previous = match label.parse::<Period>() {
            Ok(previous) if previous == current => return Ok((current, Transition::Stable)),
            Ok(previous) => Some(previous),
            Err(err) => {
                tracing::warn!(label = %label, error = %err, "unreadable period label; starting a new month");
                None
            }
        };

        records.clear()?;
        periods.save(current)?;
        tracing::info!(
            from = %previous.map(|p| p.label()).unwrap_or_else(|| label.clone()),
            to = %current,
            "month changed; expense ledger reset"
        );
        Ok((current, Transition::Rolled { previous }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::time::FixedClock;
    use crate::domain::{Category, ExpenseEntry};
    use crate::storage::{CsvRecordStore, TextPeriodStore};
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::tempdir;

    fn seeded(dir: &std::path::Path) -> (CsvRecordStore, TextPeriodStore) {
        let records = CsvRecordStore::new(dir.join("expenses.csv"));
        records
            .append(&ExpenseEntry::new(
                NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
                40.0,
                Category::Food,
            ))
            .unwrap();
        (records, TextPeriodStore::new(dir.join("month.txt")))
    }

    #[test]
    fn first_run_records_period_and_keeps_records() {
        let dir = tempdir().unwrap();
        let (records, periods) = seeded(dir.path());
        let clock = FixedClock::ymd(2024, 1, 25);
        let (period, transition) = PeriodTracker::new(&clock)
            .transition(&periods, &records)
            .unwrap();
        assert_eq!(transition, Transition::Stable);
        assert_eq!(period.label(), "2024-01");
        assert_eq!(periods.load_label().unwrap().as_deref(), Some("2024-01"));
        assert_eq!(records.len().unwrap(), 1);
    }

    #[test]
    fn month_change_clears_records() {
        let dir = tempdir().unwrap();
        let (records, periods) = seeded(dir.path());
        fs::write(periods.path(), "2024-01").unwrap();
        let clock = FixedClock::ymd(2024, 2, 1);
        let (_, transition) = PeriodTracker::new(&clock)
            .transition(&periods, &records)
            .unwrap();
        assert_eq!(
            transition,
            Transition::Rolled {
                previous: Some(Period::new(2024, 1).unwrap())
            }
        );
        assert!(records.is_empty().unwrap());
        assert_eq!(periods.load_label().unwrap().as_deref(), Some("2024-02"));
    }

    #[test]
    fn second_check_in_same_month_is_noop() {
        let dir = tempdir().unwrap();
        let (records, periods) = seeded(dir.path());
        fs::write(periods.path(), "2023-12").unwrap();
        let clock = FixedClock::ymd(2024, 1, 3);
        let tracker = PeriodTracker::new(&clock);
        assert!(tracker.transition(&periods, &records).unwrap().1.rolled());
        records
            .append(&ExpenseEntry::new(clock.today(), 9.0, Category::Study))
            .unwrap();
        let (_, again) = tracker.transition(&periods, &records).unwrap();
        assert_eq!(again, Transition::Stable);
        assert_eq!(records.len().unwrap(), 1);
    }

    #[test]
    fn garbage_label_rolls_over() {
        let dir = tempdir().unwrap();
        let (records, periods) = seeded(dir.path());
        fs::write(periods.path(), "someday").unwrap();
        let clock = FixedClock::ymd(2024, 1, 3);
        let (_, transition) = PeriodTracker::new(&clock)
            .transition(&periods, &records)
            .unwrap();
        assert_eq!(transition, Transition::Rolled { previous: None });
        assert!(records.is_empty().unwrap());
    }
}
