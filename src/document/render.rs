//! Rendering a status record into its editable document

use crate::domain::{ItemKind, StatusRecord};

use super::{text_lines, MOOD_KEYWORD, NOTES_KEYWORD};

const HELP: &str = "\
#
# Commands:
#   done <text>     = completed task
#   progress <text> = work in progress
#   blocker <text>  = blocked task
#
# Special fields:
#   mood <mood>     = your current mood
#   notes <text>    = additional notes
#
# Lines starting with # are ignored
# You can reorder lines to change the order
# Delete lines to remove items
# Add new lines to add items
#
# Example:
#   done Implemented user authentication
#   progress Working on payment integration
#   blocker Waiting for API keys
#   mood productive
#   notes Great progress today, team collaboration was excellent
";

/// Renders a record (or its absence) as an editable document
///
/// `label` names the date being edited in the header comment.
pub fn render(record: Option<&StatusRecord>, label: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("# Edit your status update for {}\n", label));
    out.push('\n');

    match record.filter(|r| !r.is_empty()) {
        Some(record) => {
            for item in &record.items {
                push_directive(&mut out, item.kind.keyword(), &item.content);
            }
        }
        None => {
            out.push_str("# No existing items. Add your status items below:\n");
            out.push_str(&format!("# {} Example completed task\n", ItemKind::Done.keyword()));
            out.push_str(&format!("# {} Example work in progress\n", ItemKind::Progress.keyword()));
        }
    }

    out.push('\n');
    if let Some(record) = record {
        push_multiline(&mut out, MOOD_KEYWORD, record.mood.as_deref());
        push_multiline(&mut out, NOTES_KEYWORD, record.notes.as_deref());
    }

    out.push('\n');
    out.push_str(HELP);

    out
}

fn push_directive(out: &mut String, keyword: &str, text: &str) {
    out.push_str(keyword);
    out.push(' ');
    out.push_str(text);
    out.push('\n');
}

/// One directive per non-blank line of `value`
fn push_multiline(out: &mut String, keyword: &str, value: Option<&str>) {
    for line in text_lines(value) {
        push_directive(out, keyword, line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StatusItem;
    use chrono::NaiveDate;

    fn record() -> StatusRecord {
        let mut record = StatusRecord::new(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        record.items = vec![
            StatusItem::new(ItemKind::Done, "Shipped the fix", 1),
            StatusItem::new(ItemKind::Progress, "Reviewing PRs", 2),
            StatusItem::new(ItemKind::Blocker, "Waiting on keys", 3),
        ];
        record
    }

    fn directive_lines(doc: &str) -> Vec<&str> {
        doc.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .collect()
    }

    #[test]
    fn header_names_label() {
        let doc = render(None, "Monday, January 15, 2024");
        assert!(doc.starts_with("# Edit your status update for Monday, January 15, 2024\n"));
    }

    #[test]
    fn items_in_order() {
        let doc = render(Some(&record()), "today");
        assert_eq!(
            directive_lines(&doc),
            vec!["done Shipped the fix", "progress Reviewing PRs", "blocker Waiting on keys"]
        );
    }

    #[test]
    fn missing_record_only_has_commented_examples() {
        let doc = render(None, "today");
        assert!(doc.contains("# done Example completed task"));
        assert!(directive_lines(&doc).is_empty());
    }

    #[test]
    fn empty_record_keeps_mood_and_notes() {
        let mut record = StatusRecord::new(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        record.mood = Some("calm".to_string());

        let doc = render(Some(&record), "today");
        assert!(doc.contains("# No existing items."));
        assert_eq!(directive_lines(&doc), vec!["mood calm"]);
    }

    #[test]
    fn multiline_fields_split_and_trim() {
        let mut record = record();
        record.mood = Some("tired\n  but ok  \n\n".to_string());
        record.notes = Some("line one\nline two".to_string());

        let doc = render(Some(&record), "today");
        let lines = directive_lines(&doc);
        assert_eq!(
            &lines[3..],
            &["mood tired", "mood but ok", "notes line one", "notes line two"]
        );
    }

    #[test]
    fn empty_strings_render_nothing() {
        let mut record = record();
        record.mood = Some(String::new());
        record.notes = Some("   ".to_string());

        let doc = render(Some(&record), "today");
        assert_eq!(directive_lines(&doc).len(), 3);
    }

    #[test]
    fn help_block_is_all_comments() {
        assert!(HELP.lines().all(|l| l.starts_with('#')));
    }
}
