use std::path::PathBuf;

use chrono::NaiveDate;

use crate::config::{EngineConfig, LimitRecovery};
use crate::core::aggregator::Aggregator;
use crate::core::period_tracker::{PeriodTracker, Transition};
use crate::core::time::{Clock, SystemClock};
use crate::domain::{
    parse_amount, parse_decimal, Category, CategoryBreakdown, ExpenseEntry, Period, Summary,
};
use crate::errors::{LedgerError, Result};
use crate::storage::{
    ensure_dir, CsvRecordStore, LimitStore, PeriodStore, RecordStore, TextLimitStore,
    TextPeriodStore,
};

/// Period state fixed by [`LedgerEngine::initialize`] for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineState {
    pub period: Period,
    pub transition: Transition,
}

/// Facade that owns the expense, limit and period stores and answers every
/// question the presentation layer asks.
pub struct LedgerEngine {
    records: Box<dyn RecordStore>,
    limit: Box<dyn LimitStore>,
    periods: Box<dyn PeriodStore>,
    clock: Box<dyn Clock>,
    data_dir: Option<PathBuf>,
    limit_recovery: LimitRecovery,
    state: Option<EngineState>,
}

impl LedgerEngine {
    /// Engine over the flat files named by `config`, reading the system clock.
    pub fn open(config: &EngineConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    pub fn with_clock(config: &EngineConfig, clock: impl Clock + 'static) -> Self {
        let mut engine = Self::from_parts(
            Box::new(CsvRecordStore::new(&config.expenses_path)),
            Box::new(TextLimitStore::new(&config.limit_path)),
            Box::new(TextPeriodStore::new(&config.period_path)),
            Box::new(clock),
        );
        engine.data_dir = Some(config.data_dir.clone());
        engine.limit_recovery = config.limit_recovery;
        engine
    }

    /// Engine over arbitrary store implementations.
    pub fn from_parts(
        records: Box<dyn RecordStore>,
        limit: Box<dyn LimitStore>,
        periods: Box<dyn PeriodStore>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            records,
            limit,
            periods,
            clock,
            data_dir: None,
            limit_recovery: LimitRecovery::default(),
            state: None,
        }
    }

    pub fn set_limit_recovery(&mut self, policy: LimitRecovery) {
        self.limit_recovery = policy;
    }

    /// Resolves the active period, clearing last month's expenses when the
    /// month changed, and returns the current totals.
    pub fn initialize(&mut self) -> Result<Summary> {
        if let Some(dir) = &self.data_dir {
            ensure_dir(dir)?;
        }
        let (period, transition) = PeriodTracker::new(self.clock.as_ref())
            .transition(self.periods.as_ref(), self.records.as_ref())?;
        self.limit.ensure_exists()?;
        self.records.ensure_exists()?;
        self.state = Some(EngineState { period, transition });
        tracing::debug!(period = %period, rolled = transition.rolled(), "ledger initialized");
        self.get_summary()
    }

    pub fn state(&self) -> Option<EngineState> {
        self.state
    }

    pub fn period(&self) -> Result<Period> {
        Ok(self.require_state()?.period)
    }

    pub fn last_transition(&self) -> Result<Transition> {
        Ok(self.require_state()?.transition)
    }

    /// Entries of the current period in insertion order.
    pub fn entries(&self) -> Result<Vec<ExpenseEntry>> {
        self.require_state()?;
        self.records.list_all()
    }

    /// Records an expense dated `date`, or today when `None`, and returns the
    /// refreshed listing.
    pub fn add_expense(
        &self,
        amount: &str,
        category: &str,
        date: Option<NaiveDate>,
    ) -> Result<Vec<ExpenseEntry>> {
        let state = self.require_state()?;
        let amount = parse_amount(amount)?;
        let category: Category = category.parse()?;
        let date = match date {
            Some(date) if !state.period.contains(date) => {
                return Err(LedgerError::Validation(format!(
                    "date {} is outside the current month {}",
                    date, state.period
                )))
            }
            Some(date) => date,
            None => {
                let today = self.clock.today();
                if !state.period.contains(today) {
                    return Err(LedgerError::PeriodEnded {
                        period: state.period,
                        today,
                    });
                }
                today
            }
        };
        self.records.append(&ExpenseEntry::new(date, amount, category))?;
        self.records.list_all()
    }

    /// Deletes the entry at `position` (zero-based). `None` means nothing was selected.
    pub fn delete_expense(&self, position: Option<usize>) -> Result<Vec<ExpenseEntry>> {
        self.require_state()?;
        let position = position.ok_or(LedgerError::Selection)?;
        let removed = self.records.delete_at(position)?;
        tracing::debug!(position, amount = removed.amount, category = %removed.category, "expense removed");
        self.records.list_all()
    }

    pub fn set_limit(&self, amount: &str) -> Result<Summary> {
        self.require_state()?;
        let amount = parse_decimal(amount, "limit")?;
        self.limit.save(amount)?;
        self.get_summary()
    }

    /// The saved monthly limit, self-healing corruption when configured to.
    pub fn limit(&self) -> Result<f64> {
        self.require_state()?;
        self.load_limit()
    }

    pub fn get_summary(&self) -> Result<Summary> {
        self.require_state()?;
        let entries = self.records.list_all()?;
        let limit = self.load_limit()?;
        Ok(Aggregator::summarize(&entries, limit))
    }

    /// Per-category totals. An empty ledger yields [`LedgerError::EmptyLedger`].
    pub fn get_category_breakdown(&self) -> Result<CategoryBreakdown> {
        self.require_state()?;
        let entries = self.records.list_all()?;
        if entries.is_empty() {
            return Err(LedgerError::EmptyLedger);
        }
        Ok(Aggregator::by_category(&entries))
    }

    fn require_state(&self) -> Result<EngineState> {
        self.state.ok_or(LedgerError::NotInitialized)
    }

    fn load_limit(&self) -> Result<f64> {
        match self.limit.load() {
            Ok(limit) => Ok(limit),
            Err(LedgerError::Format(message)) if self.limit_recovery == LimitRecovery::Reset => {
                tracing::warn!(%message, "monthly limit unreadable; resetting to 0");
                self.limit.save(0.0)?;
                Ok(0.0)
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::time::FixedClock;
    use std::fs;
    use tempfile::tempdir;

    fn engine_at(dir: &std::path::Path, clock: FixedClock) -> LedgerEngine {
        LedgerEngine::with_clock(&EngineConfig::in_dir(dir), clock)
    }

    #[test]
    fn operations_require_initialize() {
        let dir = tempdir().unwrap();
        let engine = engine_at(dir.path(), FixedClock::ymd(2024, 6, 1));
        assert!(matches!(
            engine.get_summary(),
            Err(LedgerError::NotInitialized)
        ));
        assert!(matches!(
            engine.add_expense("1", "Food", None),
            Err(LedgerError::NotInitialized)
        ));
    }

    #[test]
    fn initialize_creates_artifacts() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("data");
        let mut engine = engine_at(&data, FixedClock::ymd(2024, 6, 1));
        let summary = engine.initialize().unwrap();
        assert_eq!(summary.total_spent, 0.0);
        assert_eq!(summary.limit, 0.0);
        assert_eq!(fs::read_to_string(data.join("expenses.csv")).unwrap(), "");
        assert_eq!(fs::read_to_string(data.join("limit.txt")).unwrap(), "0");
        assert_eq!(fs::read_to_string(data.join("month.txt")).unwrap(), "2024-06");
        assert_eq!(engine.period().unwrap().label(), "2024-06");
        assert_eq!(engine.last_transition().unwrap(), Transition::Stable);
    }

    #[test]
    fn add_expense_defaults_to_clock_date() {
        let dir = tempdir().unwrap();
        let mut engine = engine_at(dir.path(), FixedClock::ymd(2024, 6, 14));
        engine.initialize().unwrap();
        let entries = engine.add_expense("19.99", "study", None).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].date, NaiveDate::from_ymd_opt(2024, 6, 14).unwrap());
        assert_eq!(entries[0].category, Category::Study);
    }

    #[test]
    fn add_expense_rejects_dates_outside_period() {
        let dir = tempdir().unwrap();
        let mut engine = engine_at(dir.path(), FixedClock::ymd(2024, 6, 14));
        engine.initialize().unwrap();
        let earlier = NaiveDate::from_ymd_opt(2024, 5, 31).unwrap();
        assert!(matches!(
            engine.add_expense("5", "Food", Some(earlier)),
            Err(LedgerError::Validation(_))
        ));
        let same_month = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        let entries = engine.add_expense("5", "Food", Some(same_month)).unwrap();
        assert_eq!(entries[0].date, same_month);
    }

    /// Clock whose date the test can move while the engine holds it.
    #[derive(Clone)]
    struct SharedClock(std::sync::Arc<std::sync::Mutex<NaiveDate>>);

    impl SharedClock {
        fn set(&self, date: NaiveDate) {
            *self.0.lock().unwrap() = date;
        }
    }

    impl Clock for SharedClock {
        fn now(&self) -> chrono::DateTime<chrono::Utc> {
            FixedClock::new(self.today()).now()
        }

        fn today(&self) -> NaiveDate {
            *self.0.lock().unwrap()
        }
    }

    #[test]
    fn default_date_after_month_end_reports_period_ended() {
        let dir = tempdir().unwrap();
        let clock = SharedClock(std::sync::Arc::new(std::sync::Mutex::new(
            NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        )));
        let mut engine = LedgerEngine::with_clock(&EngineConfig::in_dir(dir.path()), clock.clone());
        engine.initialize().unwrap();
        engine.add_expense("5", "Food", None).unwrap();

        clock.set(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
        let err = engine.add_expense("5", "Food", None).unwrap_err();
        assert!(matches!(err, LedgerError::PeriodEnded { .. }));
        assert_ne!(err.kind(), crate::errors::ErrorKind::BadInput);
        assert_eq!(engine.entries().unwrap().len(), 1);
    }

    #[test]
    fn invalid_input_writes_nothing() {
        let dir = tempdir().unwrap();
        let mut engine = engine_at(dir.path(), FixedClock::ymd(2024, 6, 14));
        engine.initialize().unwrap();
        assert!(matches!(
            engine.add_expense("ten", "Food", None),
            Err(LedgerError::Validation(_))
        ));
        assert!(matches!(
            engine.add_expense("10", "Groceries", None),
            Err(LedgerError::Validation(_))
        ));
        assert!(matches!(
            engine.set_limit("a lot"),
            Err(LedgerError::Validation(_))
        ));
        assert!(engine.entries().unwrap().is_empty());
        assert_eq!(engine.limit().unwrap(), 0.0);
    }

    #[test]
    fn delete_without_selection_is_selection_error() {
        let dir = tempdir().unwrap();
        let mut engine = engine_at(dir.path(), FixedClock::ymd(2024, 6, 14));
        engine.initialize().unwrap();
        engine.add_expense("5", "Food", None).unwrap();
        assert!(matches!(
            engine.delete_expense(None),
            Err(LedgerError::Selection)
        ));
        assert!(matches!(
            engine.delete_expense(Some(3)),
            Err(LedgerError::Index { position: 3, len: 1 })
        ));
        assert!(engine.delete_expense(Some(0)).unwrap().is_empty());
    }

    #[test]
    fn corrupt_limit_resets_by_default() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("limit.txt"), "oops").unwrap();
        let mut engine = engine_at(dir.path(), FixedClock::ymd(2024, 6, 14));
        let summary = engine.initialize().unwrap();
        assert_eq!(summary.limit, 0.0);
        assert_eq!(fs::read_to_string(dir.path().join("limit.txt")).unwrap(), "0");
    }

    #[test]
    fn corrupt_limit_fails_when_strict() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("limit.txt"), "oops").unwrap();
        let config = EngineConfig::in_dir(dir.path()).with_limit_recovery(LimitRecovery::Fail);
        let mut engine = LedgerEngine::with_clock(&config, FixedClock::ymd(2024, 6, 14));
        assert!(matches!(engine.initialize(), Err(LedgerError::Format(_))));
    }
}
