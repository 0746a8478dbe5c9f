//! JSONL storage for status records
//!
//! Records are stored in `updates.jsonl` with one JSON object per line.
//! Later lines win over earlier ones for the same date, so quick changes
//! can be appended without rewriting the file.
//! Uses file locking for concurrent access safety.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{Days, NaiveDate, Utc};
use fs2::FileExt;

use super::store::{StatusStore, StoreError};
use crate::domain::{EditResult, ItemKind, StatusItem, StatusRecord};

/// Upper bound for `recent` lookups
pub const MAX_RECENT_DAYS: u32 = 30;

/// Result of removing the last item of a record
#[derive(Debug, Clone, PartialEq)]
pub enum UndoOutcome {
    /// An item was removed and the record still has items
    RemovedItem(StatusItem),
    /// The last remaining item was removed, taking the record with it
    RemovedRecord(StatusItem),
    /// No record or no items for the date
    NothingToUndo,
}

/// Store for status records in JSONL format
pub struct JsonlStore {
    path: PathBuf,
}

impl JsonlStore {
    /// Creates a new store at the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates the default store inside a home directory
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join("updates.jsonl"))
    }

    /// Returns the path to the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all records, keyed by date
    pub fn read_all(&self) -> Result<BTreeMap<NaiveDate, StatusRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let file = File::open(&self.path).map_err(|e| StoreError::io(&self.path, e))?;

        // Acquire shared lock for reading
        file.lock_shared().map_err(StoreError::Lock)?;

        let reader = BufReader::new(&file);
        let mut records = BTreeMap::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| StoreError::io(&self.path, e))?;

            if line.trim().is_empty() {
                continue;
            }

            let record: StatusRecord = serde_json::from_str(&line).map_err(|source| StoreError::Corrupt {
                line: line_num + 1,
                source,
            })?;

            records.insert(record.date, record);
        }

        // Lock is released when file is dropped
        Ok(records)
    }

    /// Writes all records to the store (full rewrite)
    pub fn write_all(&self, records: &BTreeMap<NaiveDate, StatusRecord>) -> Result<(), StoreError> {
        self.ensure_parent()?;

        // Write to temp file first
        let temp_path = self.path.with_extension("jsonl.tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .map_err(|e| StoreError::io(&temp_path, e))?;

            // Acquire exclusive lock
            file.lock_exclusive().map_err(StoreError::Lock)?;

            let mut writer = BufWriter::new(&file);

            // BTreeMap keeps output sorted by date
            for record in records.values() {
                let line = serde_json::to_string(record)?;
                writeln!(writer, "{}", line).map_err(|e| StoreError::io(&temp_path, e))?;
            }

            writer.flush().map_err(|e| StoreError::io(&temp_path, e))?;
        }

        // Atomic rename
        fs::rename(&temp_path, &self.path).map_err(|e| StoreError::io(&self.path, e))?;

        Ok(())
    }

    /// Appends a single record, superseding any earlier line for its date
    pub fn append(&self, record: &StatusRecord) -> Result<(), StoreError> {
        self.ensure_parent()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::io(&self.path, e))?;

        // Acquire exclusive lock
        file.lock_exclusive().map_err(StoreError::Lock)?;

        let mut writer = BufWriter::new(&file);
        let line = serde_json::to_string(record)?;
        writeln!(writer, "{}", line).map_err(|e| StoreError::io(&self.path, e))?;

        writer.flush().map_err(|e| StoreError::io(&self.path, e))?;

        Ok(())
    }

    /// Adds one item at the end of the record for `date`
    pub fn add_item(&self, date: NaiveDate, kind: ItemKind, content: &str) -> Result<StatusRecord, StoreError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(StoreError::EmptyContent);
        }
        if content.contains('\n') {
            return Err(StoreError::MultilineContent);
        }

        let mut record = self.fetch(date)?.unwrap_or_else(|| StatusRecord::new(date));
        let order = record.next_order();
        record.items.push(StatusItem::new(kind, content, order));
        record.updated_at = Utc::now();

        self.append(&record)?;
        Ok(record)
    }

    /// Removes the highest-ordered item of the record for `date`
    pub fn undo_last(&self, date: NaiveDate) -> Result<UndoOutcome, StoreError> {
        let mut records = self.read_all()?;

        let Some(record) = records.get_mut(&date) else {
            return Ok(UndoOutcome::NothingToUndo);
        };

        let Some(last) = record
            .items
            .iter()
            .enumerate()
            .max_by_key(|(_, item)| item.order)
            .map(|(index, _)| index)
        else {
            return Ok(UndoOutcome::NothingToUndo);
        };

        let removed = record.items.remove(last);
        let outcome = if record.is_empty() {
            records.remove(&date);
            UndoOutcome::RemovedRecord(removed)
        } else {
            record.updated_at = Utc::now();
            UndoOutcome::RemovedItem(removed)
        };

        self.write_all(&records)?;
        Ok(outcome)
    }

    /// Returns records from the last `days` days up to `today`, newest first
    pub fn recent(&self, today: NaiveDate, days: u32) -> Result<Vec<StatusRecord>, StoreError> {
        if days == 0 || days > MAX_RECENT_DAYS {
            return Err(StoreError::InvalidRange {
                days,
                max: MAX_RECENT_DAYS,
            });
        }

        let start = today
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);

        Ok(self
            .read_all()?
            .into_values()
            .rev()
            .filter(|r| r.date > start && r.date <= today)
            .collect())
    }

    /// Compacts the store (drops superseded lines, rewrites clean)
    ///
    /// Returns the number of lines removed.
    pub fn compact(&self) -> Result<usize, StoreError> {
        if !self.path.exists() {
            return Ok(0);
        }

        let before = fs::read_to_string(&self.path)
            .map_err(|e| StoreError::io(&self.path, e))?
            .lines()
            .filter(|line| !line.trim().is_empty())
            .count();

        let records = self.read_all()?;
        self.write_all(&records)?;
        Ok(before.saturating_sub(records.len()))
    }

    fn ensure_parent(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }
        Ok(())
    }
}

impl StatusStore for JsonlStore {
    fn fetch(&self, date: NaiveDate) -> Result<Option<StatusRecord>, StoreError> {
        Ok(self.read_all()?.remove(&date))
    }

    fn submit(&self, date: NaiveDate, edit: &EditResult) -> Result<StatusRecord, StoreError> {
        let mut record = self.fetch(date)?.unwrap_or_else(|| StatusRecord::new(date));
        record.apply(edit);

        self.append(&record)?;
        Ok(record)
    }
}
