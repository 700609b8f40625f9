//! Durable flat-file stores behind the ledger engine.
//!
//! Each artifact has its own trait so the persistence format can change without
//! touching aggregation or facade logic.

pub mod limit_store;
pub mod period_store;
pub mod record_store;

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::domain::{ExpenseEntry, Period};
use crate::errors::Result;

pub use limit_store::TextLimitStore;
pub use period_store::TextPeriodStore;
pub use record_store::CsvRecordStore;

const TMP_SUFFIX: &str = "tmp";

/// Ordered collection of the current period's expenses.
pub trait RecordStore {
    /// Returns well-formed entries in insertion order.
    fn list_all(&self) -> Result<Vec<ExpenseEntry>>;
    /// Persists `entry` at the end of the ledger before returning.
    fn append(&self, entry: &ExpenseEntry) -> Result<()>;
    /// Removes the entry at `position`, shifting later entries down by one.
    fn delete_at(&self, position: usize) -> Result<ExpenseEntry>;
    fn clear(&self) -> Result<()>;

    /// Creates an empty backing artifact when none exists yet.
    fn ensure_exists(&self) -> Result<()> {
        Ok(())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.list_all()?.len())
    }

    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

/// Single scalar spending ceiling.
pub trait LimitStore {
    fn load(&self) -> Result<f64>;
    fn save(&self, amount: f64) -> Result<()>;

    /// Persists the default limit of 0 when nothing has been saved yet.
    fn ensure_exists(&self) -> Result<()> {
        Ok(())
    }
}

/// Label of the period the record store currently belongs to.
pub trait PeriodStore {
    /// Returns the raw persisted label, `None` when nothing has been recorded.
    fn load_label(&self) -> Result<Option<String>>;
    fn save(&self, period: Period) -> Result<()>;
}

pub(crate) fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Replaces `path` with `data` by staging to a sibling temp file first.
pub(crate) fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data)?;
    file.flush()?;
    file.sync_all()?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Reads `path`, treating a missing file as `None`.
pub(crate) fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(data) => Ok(Some(data)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

pub(crate) fn ensure_dir(path: &Path) -> Result<()> {
    if !path.as_os_str().is_empty() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
