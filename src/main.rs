//! Standup CLI - Daily status updates from the terminal

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = standup_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
