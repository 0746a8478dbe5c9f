//! `standup edit`: interactive editing of one day's update

use anyhow::{Context, Result};
use chrono::NaiveDate;

use super::output::Output;
use crate::domain::date::{display_label, parse_date_arg};
use crate::session::{resolve_system_editor, EditSession, SessionOutcome, SystemEditor};
use crate::storage::{Config, Home};

pub fn run(output: &Output, home: &Home, config: &Config, today: NaiveDate, date: Option<&str>) -> Result<()> {
    let date = parse_date_arg(date.unwrap_or_default(), today)?;
    let label = display_label(date, today);

    let command = resolve_system_editor(config.editor())?;
    output.verbose_ctx("edit", &format!("Editing {} with '{}'", date, command));

    let store = home.store();
    let editor = SystemEditor::new(command);
    let mut session = EditSession::new(&store, &editor, date, today);

    let result = session.run();
    output.verbose_ctx("edit", &format!("Session trail: {:?}", session.trail()));

    let outcome = result.with_context(|| format!("Failed to edit status update for {}", label))?;

    match outcome {
        SessionOutcome::NoChange => {
            if output.is_json() {
                output.data(&serde_json::json!({
                    "date": date,
                    "changed": false,
                }));
            } else {
                output.success("No changes made");
            }
        }
        SessionOutcome::Submitted(record) => {
            if output.is_json() {
                output.data(&serde_json::json!({
                    "date": date,
                    "changed": true,
                    "record": record,
                }));
            } else {
                output.success(&format!("Status update saved for {}", label));
            }
        }
    }

    Ok(())
}
