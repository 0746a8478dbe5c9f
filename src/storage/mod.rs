//! # Storage Layer
//!
//! Persistence layer for Standup CLI with plain-text file formats.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Status records | JSONL (one record per line) | `<data dir>/updates.jsonl` |
//! | Config | TOML | `<config dir>/config.toml` |
//!
//! Both directories collapse into `$STANDUP_HOME` when it is set.
//!
//! ## Concurrency Safety
//!
//! - [`JsonlStore`] uses file locking (`fs2`) for concurrent access
//! - Full rewrites are atomic (temp file + rename)
//!
//! ## Key Types
//!
//! - [`StatusStore`] - Fetch/replace contract used by edit sessions
//! - [`JsonlStore`] - Local store implementation
//! - [`Home`] - Entry point resolving data and config locations
//! - [`Config`] - User configuration

mod config;
mod home;
mod jsonl;
mod store;

pub use config::{Config, ConfigError, OutputFormat, DEFAULT_CONFIG};
pub use home::{Home, HomeError, HOME_ENV};
pub use jsonl::{JsonlStore, UndoOutcome, MAX_RECENT_DAYS};
pub use store::{StatusStore, StoreError};
