//! Quick item commands: `done`, `progress`, `blocker` and `undo`

use anyhow::{Context, Result};
use chrono::NaiveDate;

use super::output::Output;
use crate::domain::ItemKind;
use crate::storage::{Home, UndoOutcome};

/// Appends one item to the record for `today`
pub fn add(output: &Output, home: &Home, today: NaiveDate, kind: ItemKind, message: &str) -> Result<()> {
    let store = home.store();
    output.verbose_ctx(kind.keyword(), &format!("Adding item to {}", today));

    let record = store
        .add_item(today, kind, message)
        .with_context(|| format!("Failed to add {} item", kind))?;

    let item = record
        .items
        .last()
        .context("Stored record is missing the new item")?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "date": record.date,
            "item": item,
            "items": record.items.len(),
        }));
    } else {
        println!("{}: {}", kind, item.content);
        println!("  saved");
    }

    Ok(())
}

/// Removes the most recently added item for `today`
pub fn undo(output: &Output, home: &Home, today: NaiveDate) -> Result<()> {
    let store = home.store();
    output.verbose_ctx("undo", &format!("Undoing last item for {}", today));

    let outcome = store.undo_last(today).context("Failed to undo last item")?;

    if output.is_json() {
        let (removed, record_removed) = match &outcome {
            UndoOutcome::RemovedItem(item) => (Some(item), false),
            UndoOutcome::RemovedRecord(item) => (Some(item), true),
            UndoOutcome::NothingToUndo => (None, false),
        };
        output.data(&serde_json::json!({
            "date": today,
            "removed": removed,
            "record_removed": record_removed,
        }));
        return Ok(());
    }

    match outcome {
        UndoOutcome::RemovedItem(item) => {
            output.success(&format!("Removed last item ({}: {})", item.kind, item.content));
        }
        UndoOutcome::RemovedRecord(item) => {
            output.success(&format!("Removed entire status update ({}: {})", item.kind, item.content));
        }
        UndoOutcome::NothingToUndo => {
            output.success("Nothing to undo for today");
        }
    }

    Ok(())
}
