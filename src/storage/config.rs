//! Configuration handling for Standup CLI
//!
//! Configuration is stored in `config.toml` inside the config directory
//! (`~/.config/standup/` on Linux, or `$STANDUP_HOME` when set).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Output format for commands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Template written by `standup init`
pub const DEFAULT_CONFIG: &str = r#"# Standup CLI configuration

# Editor command for `standup edit` (e.g. "vim", "code -w").
# STANDUP_EDITOR takes precedence; GIT_EDITOR, VISUAL and EDITOR are
# consulted when this is unset.
# editor = "vim"

# Default output format: "text" or "json"
default_format = "text"
"#;

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Editor command for interactive edits
    pub editor: Option<String>,

    /// Default output format (text or json)
    pub default_format: OutputFormat,
}

impl Config {
    /// Loads configuration from a file, falling back to defaults when missing
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config = Self::parse(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        Ok(config)
    }

    /// Parses configuration text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        if config.editor.as_deref().is_some_and(|e| e.trim().is_empty()) {
            return Err(ConfigError::Invalid("editor cannot be blank".to_string()));
        }

        Ok(config)
    }

    /// Returns the configured editor command, if any
    pub fn editor(&self) -> Option<&str> {
        self.editor.as_deref()
    }

    /// Saves the configuration
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.editor, None);
        assert_eq!(config.default_format, OutputFormat::Text);
    }

    #[test]
    fn default_template_parses() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn parse_config() {
        let toml = r#"
editor = "code -w"
default_format = "json"
"#;

        let config = Config::parse(toml).unwrap();
        assert_eq!(config.editor(), Some("code -w"));
        assert_eq!(config.default_format, OutputFormat::Json);
    }

    #[test]
    fn blank_editor_is_invalid() {
        let result = Config::parse("editor = \"  \"");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn bad_toml_is_parse_error() {
        let result = Config::parse("default_format = [");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            editor: Some("nano".to_string()),
            default_format: OutputFormat::Json,
        };
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }
}
