//! # Editable Document
//!
//! The plain-text format a status record is round-tripped through when the
//! user edits it in their own editor.
//!
//! ## Line Grammar
//!
//! Lines are trimmed before matching. Keywords are case-sensitive.
//!
//! | Line | Meaning |
//! |------|---------|
//! | blank, or starting with `#` | ignored |
//! | `done <text>` | completed item |
//! | `progress <text>` | item in progress |
//! | `blocker <text>` | blocked item |
//! | `mood <text>` | one line of mood (repeatable) |
//! | `notes <text>` | one line of notes (repeatable) |
//!
//! Any other line rejects the whole document.
//!
//! ## Key Functions
//!
//! - [`render`] - Record to document text
//! - [`parse`] - Document text to [`EditResult`](crate::domain::EditResult)
//! - [`has_changed`] - Positional diff between a record and an edit result

mod diff;
mod parse;
mod render;

pub use diff::has_changed;
pub use parse::{parse, ParseError};
pub use render::render;

/// Keywords for the two free-text fields
pub(crate) const MOOD_KEYWORD: &str = "mood";
pub(crate) const NOTES_KEYWORD: &str = "notes";

/// Mood/notes lines as they appear in a document: trimmed, blanks dropped
pub(crate) fn text_lines(value: Option<&str>) -> impl Iterator<Item = &str> {
    value
        .unwrap_or_default()
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
}
