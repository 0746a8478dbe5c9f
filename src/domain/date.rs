//! Date arguments
//!
//! Commands accept relative dates (`yesterday`, `3 days ago`) as well as
//! ISO dates. Everything is resolved against an explicit `today` so the
//! logic stays testable.

use chrono::{Days, Months, NaiveDate};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DateError {
    #[error("Unsupported date format: {0}. Use YYYY-MM-DD, 'yesterday', or 'N days ago'")]
    Unsupported(String),

    #[error("Invalid date: {0}")]
    Invalid(String),

    #[error("Date out of range: {0}")]
    OutOfRange(String),
}

/// Long display format, e.g. `Monday, January 15, 2024`
pub const LONG_FORMAT: &str = "%A, %B %-d, %Y";

/// Resolves a date argument relative to `today`
///
/// Accepts an empty string or `today`, `yesterday`, `N day(s) ago`,
/// `N week(s) ago`, `N month(s) ago` and `YYYY-MM-DD`.
pub fn parse_date_arg(input: &str, today: NaiveDate) -> Result<NaiveDate, DateError> {
    let input = input.trim();

    match input {
        "" | "today" => return Ok(today),
        "yesterday" => return sub_days(today, 1, input),
        _ => {}
    }

    if let Some(date) = parse_relative(input, today)? {
        return Ok(date);
    }

    if is_iso_shape(input) {
        return NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .map_err(|_| DateError::Invalid(input.to_string()));
    }

    Err(DateError::Unsupported(input.to_string()))
}

/// Parses `N <unit> ago`; returns `Ok(None)` when the shape does not match
fn parse_relative(input: &str, today: NaiveDate) -> Result<Option<NaiveDate>, DateError> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let [count, unit, "ago"] = parts.as_slice() else {
        return Ok(None);
    };

    let Ok(count) = count.parse::<u32>() else {
        return Ok(None);
    };

    let date = match *unit {
        "day" | "days" => sub_days(today, u64::from(count), input)?,
        "week" | "weeks" => sub_days(today, u64::from(count) * 7, input)?,
        "month" | "months" => today
            .checked_sub_months(Months::new(count))
            .ok_or_else(|| DateError::OutOfRange(input.to_string()))?,
        _ => return Ok(None),
    };

    Ok(Some(date))
}

fn sub_days(today: NaiveDate, days: u64, input: &str) -> Result<NaiveDate, DateError> {
    today
        .checked_sub_days(Days::new(days))
        .ok_or_else(|| DateError::OutOfRange(input.to_string()))
}

/// `dddd-dd-dd`
fn is_iso_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Friendly label for a date: `today`, `yesterday`, or the long form
pub fn display_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "today".to_string()
    } else if today.checked_sub_days(Days::new(1)) == Some(date) {
        "yesterday".to_string()
    } else {
        date.format(LONG_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_and_today() {
        assert_eq!(parse_date_arg("", today()), Ok(today()));
        assert_eq!(parse_date_arg("today", today()), Ok(today()));
    }

    #[test]
    fn yesterday() {
        assert_eq!(parse_date_arg("yesterday", today()), Ok(ymd(2024, 3, 14)));
    }

    #[test]
    fn relative_units() {
        assert_eq!(parse_date_arg("2 days ago", today()), Ok(ymd(2024, 3, 13)));
        assert_eq!(parse_date_arg("1 day ago", today()), Ok(ymd(2024, 3, 14)));
        assert_eq!(parse_date_arg("1 week ago", today()), Ok(ymd(2024, 3, 8)));
        assert_eq!(parse_date_arg("3 weeks ago", today()), Ok(ymd(2024, 2, 23)));
        assert_eq!(parse_date_arg("1 month ago", today()), Ok(ymd(2024, 2, 15)));
    }

    #[test]
    fn iso_dates() {
        assert_eq!(parse_date_arg("2024-01-15", today()), Ok(ymd(2024, 1, 15)));
        assert_eq!(
            parse_date_arg("2024-02-30", today()),
            Err(DateError::Invalid("2024-02-30".to_string()))
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_date_arg("next tuesday", today()),
            Err(DateError::Unsupported(_))
        ));
        assert!(matches!(
            parse_date_arg("2 fortnights ago", today()),
            Err(DateError::Unsupported(_))
        ));
        assert!(matches!(
            parse_date_arg("15/01/2024", today()),
            Err(DateError::Unsupported(_))
        ));
    }

    #[test]
    fn labels() {
        assert_eq!(display_label(today(), today()), "today");
        assert_eq!(display_label(ymd(2024, 3, 14), today()), "yesterday");
        assert_eq!(display_label(ymd(2024, 1, 15), today()), "Monday, January 15, 2024");
    }
}
