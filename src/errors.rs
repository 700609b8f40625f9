use std::result::Result as StdResult;

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::Period;

/// Error type covering every failure the ledger engine can report.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("No expense selected")]
    Selection,
    #[error("No expense at position {position} (ledger holds {len})")]
    Index { position: usize, len: usize },
    #[error("No expenses recorded this month")]
    EmptyLedger,
    #[error("Corrupt ledger data: {0}")]
    Format(String),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Ledger not initialized")]
    NotInitialized,
    /// The clock moved past the period fixed at start-up.
    #[error("Month {period} has ended (today is {today}); restart to open the new month")]
    PeriodEnded { period: Period, today: NaiveDate },
}

pub type Result<T> = StdResult<T, LedgerError>;

/// Coarse grouping that tells the presentation layer how to react to a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The user typed something unusable and may retry.
    BadInput,
    /// The user must pick an entry first.
    NothingSelected,
    /// Informational: there is nothing to show.
    NoData,
    Fatal,
}

impl LedgerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::Validation(_) | LedgerError::Index { .. } => ErrorKind::BadInput,
            LedgerError::Selection => ErrorKind::NothingSelected,
            LedgerError::EmptyLedger => ErrorKind::NoData,
            LedgerError::Format(_)
            | LedgerError::Storage(_)
            | LedgerError::NotInitialized
            | LedgerError::PeriodEnded { .. } => ErrorKind::Fatal,
        }
    }

    pub fn is_recoverable(&self) -> bool {
        self.kind() != ErrorKind::Fatal
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Storage(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        LedgerError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Storage(err.to_string())
    }
}
