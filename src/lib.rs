//! Standup CLI - Daily status updates from the terminal
//!
//! Status updates are kept per calendar day as a list of items (done,
//! in progress, blocked) with optional mood and notes. Besides one-line
//! quick additions, a whole day can be edited as a plain-text document in
//! the user's editor; see [`session::EditSession`].

pub mod domain;
pub mod document;
pub mod session;
pub mod storage;
pub mod cli;

pub use domain::{EditResult, ItemKind, StatusItem, StatusRecord};
pub use session::{EditSession, SessionError, SessionOutcome, SessionState};
pub use storage::{JsonlStore, StatusStore};
