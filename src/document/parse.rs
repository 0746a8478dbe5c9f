//! Parsing an edited document back into structured content

use thiserror::Error;

use crate::domain::{EditResult, ItemKind, StatusItem};

use super::{MOOD_KEYWORD, NOTES_KEYWORD};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error(
        "Invalid line {line_number}: {line}\n\
         Expected format: 'done|progress|blocker <description>', 'mood <mood>', or 'notes <text>'"
    )]
    MalformedLine { line_number: usize, line: String },

    #[error("Empty content for item on line {line_number}: {line}")]
    EmptyItemContent { line_number: usize, line: String },
}

impl ParseError {
    /// Raw text of the offending line
    pub fn line(&self) -> &str {
        match self {
            ParseError::MalformedLine { line, .. } | ParseError::EmptyItemContent { line, .. } => line,
        }
    }

    /// 1-based line number of the offending line
    pub fn line_number(&self) -> usize {
        match self {
            ParseError::MalformedLine { line_number, .. }
            | ParseError::EmptyItemContent { line_number, .. } => *line_number,
        }
    }
}

/// Parses an edited document
///
/// Single top-to-bottom pass. Items get dense orders starting at 1; mood
/// and notes lines accumulate independently, joined by newlines. The first
/// line matching no directive rejects the whole document.
pub fn parse(text: &str) -> Result<EditResult, ParseError> {
    let mut result = EditResult::default();
    let mut order = 1;

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // A bare keyword leaves an empty remainder
        let (keyword, rest) = line
            .split_once(|c: char| c.is_ascii_whitespace())
            .unwrap_or((line, ""));
        let rest = rest.trim();

        if let Some(kind) = ItemKind::from_keyword(keyword) {
            if rest.is_empty() {
                return Err(ParseError::EmptyItemContent {
                    line_number: index + 1,
                    line: raw.to_string(),
                });
            }

            result.items.push(StatusItem::new(kind, rest, order));
            order += 1;
            continue;
        }

        match keyword {
            MOOD_KEYWORD if !rest.is_empty() => accumulate(&mut result.mood, rest),
            NOTES_KEYWORD if !rest.is_empty() => accumulate(&mut result.notes, rest),
            _ => {
                return Err(ParseError::MalformedLine {
                    line_number: index + 1,
                    line: raw.to_string(),
                })
            }
        }
    }

    Ok(result)
}

fn accumulate(field: &mut Option<String>, line: &str) {
    match field {
        Some(value) => {
            value.push('\n');
            value.push_str(line);
        }
        None => *field = Some(line.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_items_with_dense_order() {
        let result = parse("done shipped the fix\nprogress reviewing\nblocker keys\n").unwrap();

        assert_eq!(
            result.items,
            vec![
                StatusItem::new(ItemKind::Done, "shipped the fix", 1),
                StatusItem::new(ItemKind::Progress, "reviewing", 2),
                StatusItem::new(ItemKind::Blocker, "keys", 3),
            ]
        );
        assert_eq!(result.mood, None);
        assert_eq!(result.notes, None);
    }

    #[test]
    fn single_done_line() {
        let result = parse("done shipped the fix").unwrap();
        assert_eq!(result.items, vec![StatusItem::new(ItemKind::Done, "shipped the fix", 1)]);
    }

    #[test]
    fn trims_lines_and_content() {
        let result = parse("   done    spaced   out   \n\tprogress\ttabbed").unwrap();
        assert_eq!(result.items[0].content, "spaced   out");
        assert_eq!(result.items[1].content, "tabbed");
    }

    #[test]
    fn skips_comments_and_blanks() {
        let result = parse("# header\n\n   # indented comment\n\ndone x\n#done y\n").unwrap();
        assert_eq!(result.items.len(), 1);
    }

    #[test]
    fn only_comments_is_blank() {
        let result = parse("# one\n\n#two\n   \n").unwrap();
        assert_eq!(result, EditResult::default());
    }

    #[test]
    fn mood_lines_concatenate() {
        let result = parse("mood tired\nmood but ok").unwrap();
        assert_eq!(result.mood.as_deref(), Some("tired\nbut ok"));
    }

    #[test]
    fn mood_and_notes_are_independent() {
        let result = parse("notes first\ndone a\nmood happy\nnotes second\nprogress b").unwrap();

        assert_eq!(result.mood.as_deref(), Some("happy"));
        assert_eq!(result.notes.as_deref(), Some("first\nsecond"));
        assert_eq!(result.items[0].order, 1);
        assert_eq!(result.items[1].order, 2);
    }

    #[test]
    fn bare_mood_or_notes_keyword_fails() {
        let err = parse("mood ok\nmood ").unwrap_err();
        assert!(matches!(err, ParseError::MalformedLine { line_number: 2, .. }));

        assert!(matches!(parse("mood"), Err(ParseError::MalformedLine { .. })));
        assert!(matches!(parse("done x\nnotes"), Err(ParseError::MalformedLine { .. })));
        assert!(matches!(parse("notes \t "), Err(ParseError::MalformedLine { .. })));
    }

    #[test]
    fn keyword_separator_is_ascii_whitespace() {
        assert!(matches!(parse("done\u{a0}x"), Err(ParseError::MalformedLine { .. })));
        assert!(matches!(parse("mood\u{2003}calm"), Err(ParseError::MalformedLine { .. })));

        // Non-ASCII spaces inside content are kept
        let result = parse("done a\u{a0}b").unwrap();
        assert_eq!(result.items[0].content, "a\u{a0}b");
    }

    #[test]
    fn keyword_without_content_fails() {
        let err = parse("done x\ndone ").unwrap_err();
        assert_eq!(
            err,
            ParseError::EmptyItemContent {
                line_number: 2,
                line: "done ".to_string()
            }
        );
    }

    #[test]
    fn unknown_line_fails() {
        let err = parse("done x\nfoo bar\ndone y").unwrap_err();
        assert!(matches!(err, ParseError::MalformedLine { .. }));
        assert_eq!(err.line(), "foo bar");
        assert_eq!(err.line_number(), 2);
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert!(matches!(parse("Done x"), Err(ParseError::MalformedLine { .. })));
        assert!(matches!(parse("MOOD x"), Err(ParseError::MalformedLine { .. })));
    }

    #[test]
    fn keyword_must_be_a_whole_word() {
        assert!(matches!(parse("donex y"), Err(ParseError::MalformedLine { .. })));
        assert!(matches!(parse("moody day"), Err(ParseError::MalformedLine { .. })));
    }

    #[test]
    fn error_message_includes_line() {
        let err = parse("whatever").unwrap_err();
        assert!(err.to_string().contains("whatever"));
    }
}
