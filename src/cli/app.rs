//! Main CLI application structure

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::output::{Output, OutputFormat};
use super::{edit, item, show};
use crate::domain::ItemKind;
use crate::storage::{Config, Home};

#[derive(Parser)]
#[command(name = "standup")]
#[command(author, version, about = "Daily status updates from the terminal")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to `default_format` from config.toml)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the data directory and a default config
    Init,

    /// Add a completed item to today's update
    ///
    /// Examples:
    ///   standup done "Fixed the login bug"
    Done {
        /// What was completed
        message: String,
    },

    /// Add an in-progress item to today's update
    Progress {
        /// What is being worked on
        message: String,
    },

    /// Add a blocker to today's update
    Blocker {
        /// What is blocking progress
        message: String,
    },

    /// Edit a status update in your editor
    ///
    /// Examples:
    ///   standup edit
    ///   standup edit yesterday
    ///   standup edit "3 days ago"
    ///   standup edit 2024-01-15
    Edit {
        /// Date to edit (defaults to today)
        date: Option<String>,
    },

    /// Display a status update
    Show {
        /// Date to show (defaults to today)
        date: Option<String>,
    },

    /// List recent status updates
    List {
        /// Number of days to include, 1 to 30
        #[arg(default_value = "1")]
        days: u32,
    },

    /// Remove the last item from today's update
    Undo,

    /// Rewrite the store without superseded lines
    Compact,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        init_tracing();
    }

    let home = Home::locate()?;

    // `init` must work even when an existing config is broken
    let config = match cli.command {
        Commands::Init => Config::default(),
        _ => home.config()?,
    };

    let output = Output::new(cli.format.unwrap_or(config.default_format), cli.verbose);
    output.verbose("Standup CLI starting");
    output.verbose_ctx("home", &format!("Data directory: {}", home.data_dir().display()));

    let today = today();

    match cli.command {
        Commands::Init => init(&output, &home)?,

        Commands::Done { message } => item::add(&output, &home, today, ItemKind::Done, &message)?,
        Commands::Progress { message } => item::add(&output, &home, today, ItemKind::Progress, &message)?,
        Commands::Blocker { message } => item::add(&output, &home, today, ItemKind::Blocker, &message)?,

        Commands::Edit { date } => {
            output.verbose_ctx("edit", &format!("Date argument: {:?}", date));
            edit::run(&output, &home, &config, today, date.as_deref())?
        }

        Commands::Show { date } => show::show(&output, &home, today, date.as_deref())?,
        Commands::List { days } => show::list(&output, &home, today, days)?,

        Commands::Undo => item::undo(&output, &home, today)?,
        Commands::Compact => compact(&output, &home)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}

/// Dates are local calendar days
fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Library events go to stderr; `RUST_LOG` overrides the default filter
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("standup_cli=debug"));

    // Already installed is fine
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn init(output: &Output, home: &Home) -> Result<()> {
    output.verbose_ctx("init", &format!("Config path: {}", home.config_path().display()));
    home.init()?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "initialized": true,
            "data_dir": home.data_dir().display().to_string(),
            "config": home.config_path().display().to_string(),
        }));
    } else {
        output.success(&format!("Initialized standup in {}", home.data_dir().display()));
    }

    Ok(())
}

fn compact(output: &Output, home: &Home) -> Result<()> {
    let store = home.store();
    output.verbose_ctx("compact", &format!("Compacting {}", store.path().display()));

    let removed = store.compact()?;

    if output.is_json() {
        output.data(&serde_json::json!({ "removed": removed }));
    } else if removed == 0 {
        output.success("Store is already compact");
    } else {
        output.success(&format!("Removed {} superseded line(s)", removed));
    }

    Ok(())
}
