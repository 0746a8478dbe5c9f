//! External editor resolution and launching
//!
//! Resolution order:
//! 1. `STANDUP_EDITOR`
//! 2. `editor` from `config.toml`
//! 3. `GIT_EDITOR`, `VISUAL`, `EDITOR`
//! 4. `git config core.editor` (local, then global)
//! 5. `git var GIT_EDITOR`
//! 6. `vi`, `vim` or `nano` found on `PATH`

use std::fmt;
use std::io;
use std::path::Path;
use std::process::Command;

use thiserror::Error;

/// Editor override for this tool only
pub const EDITOR_ENV: &str = "STANDUP_EDITOR";

const ENV_FALLBACKS: [&str; 3] = ["GIT_EDITOR", "VISUAL", "EDITOR"];
const SYSTEM_FALLBACKS: [&str; 3] = ["vi", "vim", "nano"];

#[derive(Debug, Error)]
pub enum EditorError {
    #[error(
        "No editor found. Please install vi, vim, or nano, or set \
         STANDUP_EDITOR/EDITOR/VISUAL/GIT_EDITOR environment variable"
    )]
    NotFound,

    #[error("Failed to start editor '{program}'")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Editor '{program}' exited with {}", describe_exit(.code))]
    Failed { program: String, code: Option<i32> },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("code {}", code),
        None => "a signal".to_string(),
    }
}

/// An editor program plus its leading arguments, e.g. `code -w`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    program: String,
    args: Vec<String>,
}

impl EditorCommand {
    /// Splits a command string on whitespace; `None` if it is blank
    pub fn parse(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for EditorCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Where editor preferences are looked up
///
/// Every source is injected so resolution can be tested without touching
/// the process environment.
pub struct EditorSources<'a> {
    /// Environment variable lookup
    pub env: &'a dyn Fn(&str) -> Option<String>,

    /// Editor from the user's config file
    pub configured: Option<&'a str>,

    /// Git's editor preference
    pub git: &'a dyn Fn() -> Option<String>,

    /// Whether a program exists on `PATH`
    pub on_path: &'a dyn Fn(&str) -> bool,
}

/// Picks the editor to launch
pub fn resolve_editor(sources: &EditorSources<'_>) -> Option<EditorCommand> {
    let from_env = |key: &str| (sources.env)(key).and_then(|v| EditorCommand::parse(&v));

    from_env(EDITOR_ENV)
        .or_else(|| sources.configured.and_then(EditorCommand::parse))
        .or_else(|| ENV_FALLBACKS.iter().find_map(|&key| from_env(key)))
        .or_else(|| (sources.git)().and_then(|v| EditorCommand::parse(&v)))
        .or_else(|| {
            SYSTEM_FALLBACKS
                .iter()
                .copied()
                .find(|&program| (sources.on_path)(program))
                .and_then(EditorCommand::parse)
        })
}

/// Resolves the editor from the real environment, git and `PATH`
pub fn resolve_system_editor(configured: Option<&str>) -> Result<EditorCommand, EditorError> {
    let sources = EditorSources {
        env: &process_env,
        configured,
        git: &git_editor,
        on_path: &on_path,
    };

    resolve_editor(&sources).ok_or(EditorError::NotFound)
}

fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// `core.editor` from local then global git config, then `git var GIT_EDITOR`
fn git_editor() -> Option<String> {
    let queries: [&[&str]; 3] = [
        &["config", "--get", "core.editor"],
        &["config", "--global", "--get", "core.editor"],
        &["var", "GIT_EDITOR"],
    ];

    queries.iter().find_map(|args| {
        let output = Command::new("git").args(*args).output().ok()?;
        if !output.status.success() {
            return None;
        }
        let editor = String::from_utf8_lossy(&output.stdout).trim().to_string();
        (!editor.is_empty()).then_some(editor)
    })
}

fn on_path(program: &str) -> bool {
    which::which(program).is_ok()
}

/// Something that can let the user edit a file and wait for them
pub trait EditorLauncher {
    /// Blocks until the user is done editing `path`
    fn launch(&self, path: &Path) -> Result<(), EditorError>;
}

impl<F> EditorLauncher for F
where
    F: Fn(&Path) -> Result<(), EditorError>,
{
    fn launch(&self, path: &Path) -> Result<(), EditorError> {
        self(path)
    }
}

/// Runs an editor process attached to the current terminal
pub struct SystemEditor {
    command: EditorCommand,
}

impl SystemEditor {
    pub fn new(command: EditorCommand) -> Self {
        Self { command }
    }
}

impl EditorLauncher for SystemEditor {
    fn launch(&self, path: &Path) -> Result<(), EditorError> {
        tracing::debug!(editor = %self.command, path = %path.display(), "launching editor");

        // Stdio is inherited so terminal editors work
        let status = Command::new(self.command.program())
            .args(self.command.args())
            .arg(path)
            .status()
            .map_err(|source| EditorError::Launch {
                program: self.command.program().to_string(),
                source,
            })?;

        if !status.success() {
            return Err(EditorError::Failed {
                program: self.command.program().to_string(),
                code: status.code(),
            });
        }

        Ok(())
    }
}
