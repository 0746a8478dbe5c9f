//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Group | Purpose | Examples |
//! |-------|---------|----------|
//! | Setup | Data directory and config | `init` |
//! | Items | Quick additions to today | `done`, `progress`, `blocker`, `undo` |
//! | Edit | Full update in `$EDITOR` | `edit`, `edit yesterday` |
//! | Read | Display updates | `show`, `list 7` |
//! | Maintenance | Store housekeeping | `compact` |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! When the flag is absent, `default_format` from `config.toml` applies.
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output, including session state
//! transitions:
//! ```bash
//! standup --verbose edit yesterday
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod edit;
mod item;
mod output;
mod show;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
