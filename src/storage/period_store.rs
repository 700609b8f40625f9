use std::path::{Path, PathBuf};

use crate::domain::Period;
use crate::errors::Result;
use crate::storage::{read_optional, write_atomic, PeriodStore};

/// Active period label (`YYYY-MM`) kept in a text file.
#[derive(Debug, Clone)]
pub struct TextPeriodStore {
    path: PathBuf,
}

impl TextPeriodStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PeriodStore for TextPeriodStore {
    fn load_label(&self) -> Result<Option<String>> {
        Ok(read_optional(&self.path)?
            .map(|raw| raw.trim().to_string())
            .filter(|label| !label.is_empty()))
    }

    fn save(&self, period: Period) -> Result<()> {
        write_atomic(&self.path, period.label().as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn blank_file_counts_as_unset() {
        let dir = tempdir().unwrap();
        let store = TextPeriodStore::new(dir.path().join("month.txt"));
        assert_eq!(store.load_label().unwrap(), None);
        fs::write(store.path(), "  \n").unwrap();
        assert_eq!(store.load_label().unwrap(), None);
    }

    #[test]
    fn save_overwrites_label() {
        let dir = tempdir().unwrap();
        let store = TextPeriodStore::new(dir.path().join("month.txt"));
        store.save(Period::new(2024, 1).unwrap()).unwrap();
        store.save(Period::new(2024, 2).unwrap()).unwrap();
        assert_eq!(store.load_label().unwrap().as_deref(), Some("2024-02"));
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "2024-02");
    }
}
