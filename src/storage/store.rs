//! Status store contract
//!
//! The edit workflow only needs to read one record and replace one record,
//! both keyed by date. Anything that can do that can back a session.

use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{EditResult, StatusRecord};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access status store {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to lock status store")]
    Lock(#[source] io::Error),

    #[error("Corrupt status record at line {line}")]
    Corrupt {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize status record")]
    Encode(#[from] serde_json::Error),

    #[error("Status item content cannot be empty")]
    EmptyContent,

    #[error("Status item content must be a single line")]
    MultilineContent,

    #[error("Days must be between 1 and {max}, got {days}")]
    InvalidRange { days: u32, max: u32 },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Read and replace status records by date
pub trait StatusStore {
    /// Returns the record for `date`, or `None` if nothing was recorded yet
    fn fetch(&self, date: NaiveDate) -> Result<Option<StatusRecord>, StoreError>;

    /// Replaces items, mood and notes of the record for `date`
    ///
    /// Creates the record when it does not exist. Returns the stored record.
    fn submit(&self, date: NaiveDate, edit: &EditResult) -> Result<StatusRecord, StoreError>;
}
