//! # Edit Sessions
//!
//! One interactive edit of a day's status update:
//!
//! ```text
//! Start -> Fetched -> DocumentWritten -> EditorRun -> Parsed -> NoChange | Submitted -> Cleaned
//! ```
//!
//! The session is strictly sequential. The only blocking step is the
//! editor, which is waited on without a timeout. Once the temporary
//! document exists it is removed on every exit path, and nothing reaches
//! the store unless the edited document parsed and differs from the
//! original.

mod editor;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tempfile::TempPath;
use thiserror::Error;

pub use editor::{
    resolve_editor, resolve_system_editor, EditorCommand, EditorError, EditorLauncher, EditorSources,
    SystemEditor, EDITOR_ENV,
};

use crate::document::{self, ParseError};
use crate::domain::date::{display_label, LONG_FORMAT};
use crate::domain::{EditResult, StatusRecord};
use crate::storage::{StatusStore, StoreError};

const TEMP_PREFIX: &str = "standup-edit-";
const TEMP_SUFFIX: &str = ".txt";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to fetch status update")]
    Fetch(#[source] StoreError),

    #[error("Failed to prepare temporary document")]
    TempResource(#[source] io::Error),

    #[error("Failed to remove temporary document {}", .path.display())]
    Cleanup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to open editor")]
    Editor(#[from] EditorError),

    #[error("Failed to parse edited file")]
    Parse(#[from] ParseError),

    #[error("Failed to save status update; the stored update was not changed")]
    Submission(#[source] StoreError),
}

/// Steps of an edit session, in the order they are reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Start,
    Fetched,
    DocumentWritten,
    EditorRun,
    Parsed,
    NoChange,
    Submitted,
    Cleaned,
}

/// How a successful session ended
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// The edited document matched the stored update
    NoChange,
    /// The edit replaced the stored update
    Submitted(StatusRecord),
}

/// Label for the document header
///
/// Today's date is spelled out when there is already something recorded.
pub fn document_label(date: NaiveDate, today: NaiveDate, record: Option<&StatusRecord>) -> String {
    match record {
        Some(record) if date == today => record.date.format(LONG_FORMAT).to_string(),
        _ => display_label(date, today),
    }
}

/// An interactive edit of the status update for one date
pub struct EditSession<'a, S, E> {
    store: &'a S,
    editor: &'a E,
    date: NaiveDate,
    today: NaiveDate,
    temp_dir: Option<PathBuf>,
    trail: Vec<SessionState>,
}

impl<'a, S: StatusStore, E: EditorLauncher> EditSession<'a, S, E> {
    pub fn new(store: &'a S, editor: &'a E, date: NaiveDate, today: NaiveDate) -> Self {
        Self {
            store,
            editor,
            date,
            today,
            temp_dir: None,
            trail: vec![SessionState::Start],
        }
    }

    /// Creates the temporary document in `dir` instead of the system temp dir
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    /// Current state
    pub fn state(&self) -> SessionState {
        self.trail.last().copied().unwrap_or(SessionState::Start)
    }

    /// Every state visited so far
    pub fn trail(&self) -> &[SessionState] {
        &self.trail
    }

    /// Runs the session to completion
    pub fn run(&mut self) -> Result<SessionOutcome, SessionError> {
        let original = self.store.fetch(self.date).map_err(SessionError::Fetch)?;
        self.advance(SessionState::Fetched);

        let label = document_label(self.date, self.today, original.as_ref());
        let text = document::render(original.as_ref(), &label);
        let document = self.write_document(&text)?;
        self.advance(SessionState::DocumentWritten);

        let result = self.edit(&document, original.as_ref());

        let path = document.to_path_buf();
        let cleanup = match document.close() {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        };
        self.advance(SessionState::Cleaned);

        match (result, cleanup) {
            (result, Ok(())) => result,
            (Ok(SessionOutcome::Submitted(record)), Err(e)) => {
                // The update is saved; a stray temp file is not worth failing over
                tracing::warn!(path = %path.display(), error = %e, "failed to remove temporary document");
                Ok(SessionOutcome::Submitted(record))
            }
            (Ok(SessionOutcome::NoChange), Err(source)) => Err(SessionError::Cleanup { path, source }),
            (Err(err), Err(e)) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to remove temporary document");
                Err(err)
            }
        }
    }

    fn write_document(&self, text: &str) -> Result<TempPath, SessionError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(TEMP_PREFIX).suffix(TEMP_SUFFIX);

        let mut file = match &self.temp_dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
        .map_err(SessionError::TempResource)?;

        file.write_all(text.as_bytes()).map_err(SessionError::TempResource)?;
        file.flush().map_err(SessionError::TempResource)?;

        // Close our handle so the editor has the file to itself
        Ok(file.into_temp_path())
    }

    /// Editor, parse, diff and submit; everything between write and cleanup
    fn edit(&mut self, path: &Path, original: Option<&StatusRecord>) -> Result<SessionOutcome, SessionError> {
        self.editor.launch(path)?;
        self.advance(SessionState::EditorRun);

        let text = fs::read_to_string(path).map_err(SessionError::TempResource)?;
        let edited = document::parse(&text)?;
        self.advance(SessionState::Parsed);

        if !document::has_changed(original, &edited) {
            self.advance(SessionState::NoChange);
            return Ok(SessionOutcome::NoChange);
        }

        let record = self.submit(&edited)?;
        self.advance(SessionState::Submitted);
        Ok(SessionOutcome::Submitted(record))
    }

    fn submit(&self, edited: &EditResult) -> Result<StatusRecord, SessionError> {
        tracing::debug!(
            date = %self.date,
            items = edited.items.len(),
            mood = edited.mood.is_some(),
            notes = edited.notes.is_some(),
            "submitting edited status update"
        );
        self.store.submit(self.date, edited).map_err(SessionError::Submission)
    }

    fn advance(&mut self, next: SessionState) {
        tracing::debug!(from = ?self.state(), to = ?next, date = %self.date, "edit session");
        self.trail.push(next);
    }
}
