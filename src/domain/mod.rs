//! Domain models for Standup CLI
//!
//! Contains the core status update types without any I/O concerns.

pub mod date;
mod status;

pub use date::DateError;
pub use status::{EditResult, ItemKind, StatusItem, StatusRecord};
