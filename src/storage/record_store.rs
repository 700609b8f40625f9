//! CSV-backed record store.
//!
//! Rows are `date,amount,category` without a header. Reads are permissive: a
//! row that does not hold exactly three usable fields is skipped and left in
//! the file untouched.

use std::{
    fs::{File, OpenOptions},
    io::{Read, Seek, SeekFrom, Write},
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use csv::{ByteRecord, ReaderBuilder, WriterBuilder};

use crate::domain::{validate_amount, Category, ExpenseEntry, DATE_FORMAT};
use crate::errors::{LedgerError, Result};
use crate::storage::{ensure_dir, write_atomic, RecordStore};

const FIELD_COUNT: usize = 3;

/// Expense rows persisted in a single comma-delimited file.
#[derive(Debug, Clone)]
pub struct CsvRecordStore {
    path: PathBuf,
}

impl CsvRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every raw row in the file, well-formed or not. Rows stay as bytes so
    /// that rewriting the file never loses one that is not valid UTF-8.
    fn raw_records(&self) -> Result<Vec<ByteRecord>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);
        let mut rows = Vec::new();
        for (line, record) in reader.byte_records().enumerate() {
            match record {
                Ok(record) => rows.push(record),
                Err(err) if err.is_io_error() => return Err(err.into()),
                Err(err) => {
                    tracing::warn!(line = line + 1, error = %err, "skipping unreadable expense row");
                }
            }
        }
        Ok(rows)
    }

    fn write_records(&self, records: &[ByteRecord]) -> Result<()> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_writer(Vec::new());
        for record in records {
            writer.write_record(record)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|err| LedgerError::Storage(err.to_string()))?;
        write_atomic(&self.path, &bytes)
    }

    /// Whether the existing file ends mid-line, so an append needs a line break first.
    fn needs_line_break(file: &mut File) -> Result<bool> {
        let len = file.metadata()?.len();
        if len == 0 {
            return Ok(false);
        }
        file.seek(SeekFrom::Start(len - 1))?;
        let mut last = [0u8; 1];
        file.read_exact(&mut last)?;
        Ok(last[0] != b'\n')
    }
}

impl RecordStore for CsvRecordStore {
    fn list_all(&self) -> Result<Vec<ExpenseEntry>> {
        Ok(self
            .raw_records()?
            .iter()
            .enumerate()
            .filter_map(|(index, record)| {
                let entry = parse_row(record);
                if entry.is_none() && record.len() == FIELD_COUNT {
                    tracing::warn!(row = index + 1, "skipping expense row with unusable values");
                }
                entry
            })
            .collect())
    }

    fn append(&self, entry: &ExpenseEntry) -> Result<()> {
        validate_amount(entry.amount)?;
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)?;
        if Self::needs_line_break(&mut file)? {
            file.write_all(b"\n")?;
        }
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record(entry_fields(entry))?;
        writer.flush()?;
        tracing::debug!(date = %entry.date, amount = entry.amount, category = %entry.category, "appended expense");
        Ok(())
    }

    fn delete_at(&self, position: usize) -> Result<ExpenseEntry> {
        let records = self.raw_records()?;
        let mut valid_seen = 0usize;
        let mut target = None;
        for (index, record) in records.iter().enumerate() {
            if let Some(entry) = parse_row(record) {
                if valid_seen == position {
                    target = Some((index, entry));
                    break;
                }
                valid_seen += 1;
            }
        }
        let Some((raw_index, removed)) = target else {
            let len = records.iter().filter(|record| parse_row(record).is_some()).count();
            return Err(LedgerError::Index { position, len });
        };
        let remaining: Vec<ByteRecord> = records
            .into_iter()
            .enumerate()
            .filter(|(index, _)| *index != raw_index)
            .map(|(_, record)| record)
            .collect();
        self.write_records(&remaining)?;
        tracing::debug!(position, "deleted expense");
        Ok(removed)
    }

    fn clear(&self) -> Result<()> {
        write_atomic(&self.path, b"")?;
        tracing::debug!(path = %self.path.display(), "cleared expense ledger");
        Ok(())
    }

    fn ensure_exists(&self) -> Result<()> {
        if !self.path.exists() {
            write_atomic(&self.path, b"")?;
        }
        Ok(())
    }
}

fn entry_fields(entry: &ExpenseEntry) -> [String; FIELD_COUNT] {
    [
        entry.date_label(),
        entry.amount.to_string(),
        entry.category.name().to_string(),
    ]
}

fn parse_row(record: &ByteRecord) -> Option<ExpenseEntry> {
    if record.len() != FIELD_COUNT {
        return None;
    }
    let date = NaiveDate::parse_from_str(field(record, 0)?, DATE_FORMAT).ok()?;
    let amount: f64 = field(record, 1)?.parse().ok()?;
    validate_amount(amount).ok()?;
    let category: Category = field(record, 2)?.parse().ok()?;
    Some(ExpenseEntry::new(date, amount, category))
}

fn field(record: &ByteRecord, index: usize) -> Option<&str> {
    std::str::from_utf8(record.get(index)?).ok().map(str::trim)
}
