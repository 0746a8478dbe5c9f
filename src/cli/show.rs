//! Read-only commands: `show` and `list`

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

use super::output::Output;
use crate::domain::date::{display_label, parse_date_arg, LONG_FORMAT};
use crate::domain::{ItemKind, StatusRecord};
use crate::storage::{Home, StatusStore};

/// Prints the record for one date, grouped by kind
pub fn show(output: &Output, home: &Home, today: NaiveDate, date: Option<&str>) -> Result<()> {
    let date = parse_date_arg(date.unwrap_or_default(), today)?;
    output.verbose_ctx("show", &format!("Fetching update for {}", date));

    let record = home
        .store()
        .fetch(date)
        .context("Failed to fetch status update")?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "date": date,
            "record": record,
        }));
        return Ok(());
    }

    let Some(record) = record else {
        println!("No updates found for {}", display_label(date, today));
        println!("  run: standup done \"your task\" to create one");
        return Ok(());
    };

    println!("{}", record.date.format(LONG_FORMAT));
    println!();

    if record.items.is_empty() {
        println!("  (empty)");
        println!();
    }

    for kind in ItemKind::ALL {
        let mut items = record.items_of(kind).peekable();
        if items.peek().is_none() {
            continue;
        }

        println!("  {}", kind.heading());
        for item in items {
            println!("    {}", item.content);
        }
        println!();
    }

    print_block("mood", record.mood.as_deref());
    print_block("notes", record.notes.as_deref());

    println!("  updated {}", record.updated_at.with_timezone(&Local).format("%H:%M"));

    Ok(())
}

/// Prints a multi-line field with continuation lines aligned under the first
fn print_block(label: &str, text: Option<&str>) {
    let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
        return;
    };

    let indent = " ".repeat(label.len() + 3);
    for (i, line) in text.lines().enumerate() {
        if i == 0 {
            println!("  {} {}", label, line);
        } else {
            println!("{}{}", indent, line);
        }
    }
    println!();
}

/// Prints records from the last `days` days, newest first
pub fn list(output: &Output, home: &Home, today: NaiveDate, days: u32) -> Result<()> {
    output.verbose_ctx("list", &format!("Listing {} day(s) up to {}", days, today));

    let records = home.store().recent(today, days)?;
    output.verbose_ctx("list", &format!("Found {} record(s)", records.len()));

    if output.is_json() {
        output.data(&serde_json::json!({
            "days": days,
            "records": records,
        }));
        return Ok(());
    }

    if records.is_empty() {
        if days == 1 {
            println!("No updates found for today");
        } else {
            println!("No updates found for the past {} days", days);
        }
        println!("  run: standup done \"your task\" to create one");
        return Ok(());
    }

    if days == 1 {
        println!("today's updates");
    } else {
        println!("past {} days", days);
    }
    println!("  {} update(s)", records.len());
    println!();

    for (index, record) in records.iter().enumerate() {
        print_summary(index + 1, record);
    }

    Ok(())
}

fn print_summary(index: usize, record: &StatusRecord) {
    println!("  {}. {}", index, record.date.format("%A, %B %-d"));

    if record.items.is_empty() {
        println!("     (empty)");
        println!();
        return;
    }

    let counts: Vec<String> = ItemKind::ALL
        .into_iter()
        .filter_map(|kind| {
            let count = record.items_of(kind).count();
            (count > 0).then(|| format!("{} {}", count, kind.heading()))
        })
        .collect();
    println!("     {}", counts.join(", "));

    for item in &record.items {
        println!("     - {}", item.content);
    }

    println!("     {}", record.updated_at.with_timezone(&Local).format("%H:%M"));
    println!();
}
