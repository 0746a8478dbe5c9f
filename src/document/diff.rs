//! Change detection between a stored record and an edit result

use super::text_lines;
use crate::domain::{EditResult, StatusRecord};

/// Returns true if submitting `edited` would change `original`
///
/// Items are compared by position (kind and content), so reordering counts
/// as a change. Mood and notes compare line by line as a document shows
/// them, so absent, empty and whitespace-only values are all equal.
pub fn has_changed(original: Option<&StatusRecord>, edited: &EditResult) -> bool {
    let original = match original {
        Some(record) if !record.is_empty() => record,
        other => {
            // Nothing to line items up against
            if !edited.items.is_empty() {
                return true;
            }
            let (mood, notes) = other.map_or((None, None), |r| (r.mood.as_deref(), r.notes.as_deref()));
            return text_differs(mood, edited.mood.as_deref())
                || text_differs(notes, edited.notes.as_deref());
        }
    };

    if original.items.len() != edited.items.len() {
        return true;
    }

    let items_differ = original
        .items
        .iter()
        .zip(&edited.items)
        .any(|(before, after)| before.kind.keyword() != after.kind.keyword() || before.content != after.content);
    if items_differ {
        return true;
    }

    text_differs(original.mood.as_deref(), edited.mood.as_deref())
        || text_differs(original.notes.as_deref(), edited.notes.as_deref())
}

fn text_differs(before: Option<&str>, after: Option<&str>) -> bool {
    text_lines(before).ne(text_lines(after))
}
