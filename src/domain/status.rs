//! Status update domain model
//!
//! A status record holds one day's worth of items (done, in progress,
//! blocked) plus optional mood and notes. Edit results are what comes back
//! from the editable document and carry the same shape without timestamps.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a status item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Completed work
    #[default]
    Done,
    /// Work in progress
    Progress,
    /// Blocked work
    Blocker,
}

impl ItemKind {
    /// All kinds, in document keyword order
    pub const ALL: [ItemKind; 3] = [ItemKind::Done, ItemKind::Progress, ItemKind::Blocker];

    /// Returns the document keyword for this kind
    pub fn keyword(&self) -> &'static str {
        match self {
            ItemKind::Done => "done",
            ItemKind::Progress => "progress",
            ItemKind::Blocker => "blocker",
        }
    }

    /// Looks up a kind by its exact (case-sensitive) keyword
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.keyword() == keyword)
    }

    /// Heading used when grouping items for display
    pub fn heading(&self) -> &'static str {
        match self {
            ItemKind::Done => "completed",
            ItemKind::Progress => "in progress",
            ItemKind::Blocker => "blocked",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A single line of a status update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusItem {
    /// Item text, single line
    pub content: String,

    /// Done, progress or blocker
    pub kind: ItemKind,

    /// Display position, 1-based
    pub order: u32,
}

impl StatusItem {
    pub fn new(kind: ItemKind, content: impl Into<String>, order: u32) -> Self {
        Self {
            content: content.into(),
            kind,
            order,
        }
    }
}

/// The stored status update for one calendar date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusRecord {
    /// Date the update pertains to
    pub date: NaiveDate,

    /// Items in display order
    #[serde(default)]
    pub items: Vec<StatusItem>,

    /// Mood, possibly multi-line
    #[serde(default)]
    pub mood: Option<String>,

    /// Free-form notes, possibly multi-line
    #[serde(default)]
    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl StatusRecord {
    /// Creates an empty record for the given date
    pub fn new(date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            date,
            items: Vec::new(),
            mood: None,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns true if the record carries no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the next free order value
    pub fn next_order(&self) -> u32 {
        self.items.iter().map(|i| i.order).max().unwrap_or(0) + 1
    }

    /// Returns items of the given kind, in display order
    pub fn items_of(&self, kind: ItemKind) -> impl Iterator<Item = &StatusItem> {
        self.items.iter().filter(move |i| i.kind == kind)
    }

    /// Replaces items, mood and notes with an edit result
    pub fn apply(&mut self, edit: &EditResult) {
        self.items = edit.items.clone();
        self.mood = edit.mood.clone();
        self.notes = edit.notes.clone();
        self.updated_at = Utc::now();
    }
}

/// Structured content recovered from an edited document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditResult {
    /// Items with dense order starting at 1
    pub items: Vec<StatusItem>,

    /// Concatenated mood lines, `None` when no mood line was present
    pub mood: Option<String>,

    /// Concatenated notes lines, `None` when no notes line was present
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn keyword_lookup() {
        for kind in ItemKind::ALL {
            assert_eq!(ItemKind::from_keyword(kind.keyword()), Some(kind));
        }
        assert_eq!(ItemKind::from_keyword("Done"), None);
        assert_eq!(ItemKind::from_keyword("mood"), None);
    }

    #[test]
    fn kind_serializes_as_keyword() {
        let json = serde_json::to_string(&ItemKind::Progress).unwrap();
        assert_eq!(json, "\"progress\"");
    }

    #[test]
    fn next_order_follows_max() {
        let mut record = StatusRecord::new(date());
        assert_eq!(record.next_order(), 1);

        record.items.push(StatusItem::new(ItemKind::Done, "a", 4));
        record.items.push(StatusItem::new(ItemKind::Done, "b", 2));
        assert_eq!(record.next_order(), 5);
    }

    #[test]
    fn apply_replaces_everything() {
        let mut record = StatusRecord::new(date());
        record.items.push(StatusItem::new(ItemKind::Done, "old", 1));
        record.mood = Some("fine".to_string());

        let edit = EditResult {
            items: vec![StatusItem::new(ItemKind::Blocker, "new", 1)],
            mood: None,
            notes: Some("n".to_string()),
        };
        record.apply(&edit);

        assert_eq!(record.items, edit.items);
        assert_eq!(record.mood, None);
        assert_eq!(record.notes.as_deref(), Some("n"));
    }

    #[test]
    fn record_json_tolerates_missing_optional_fields() {
        let json = r#"{"date":"2024-01-15","created_at":"2024-01-15T09:00:00Z","updated_at":"2024-01-15T09:00:00Z"}"#;
        let record: StatusRecord = serde_json::from_str(json).unwrap();
        assert!(record.is_empty());
        assert!(record.mood.is_none());
    }
}
