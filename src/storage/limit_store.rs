use std::path::{Path, PathBuf};

use crate::domain::validate_amount;
use crate::errors::{LedgerError, Result};
use crate::storage::{read_optional, write_atomic, LimitStore};

/// Monthly limit stored as a bare number in a text file.
#[derive(Debug, Clone)]
pub struct TextLimitStore {
    path: PathBuf,
}

impl TextLimitStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LimitStore for TextLimitStore {
    fn load(&self) -> Result<f64> {
        let Some(raw) = read_optional(&self.path)? else {
            return Ok(0.0);
        };
        let trimmed = raw.trim();
        let value: f64 = trimmed.parse().map_err(|_| {
            LedgerError::Format(format!(
                "limit file {} holds `{}`, not a number",
                self.path.display(),
                trimmed
            ))
        })?;
        if !value.is_finite() {
            return Err(LedgerError::Format(format!(
                "limit file {} holds a non-finite value",
                self.path.display()
            )));
        }
        Ok(value)
    }

    fn save(&self, amount: f64) -> Result<()> {
        validate_amount(amount)?;
        write_atomic(&self.path, amount.to_string().as_bytes())?;
        tracing::debug!(amount, "saved monthly limit");
        Ok(())
    }

    fn ensure_exists(&self) -> Result<()> {
        if !self.path.exists() {
            write_atomic(&self.path, b"0")?;
        }
        Ok(())
    }
}
