//! Home directory management
//!
//! Resolves where records and configuration live and provides access to
//! the store and config.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use thiserror::Error;

use super::config::DEFAULT_CONFIG;
use super::{Config, JsonlStore};

/// Environment variable that relocates data and config into one directory
pub const HOME_ENV: &str = "STANDUP_HOME";

#[derive(Debug, Error)]
pub enum HomeError {
    #[error("Could not determine a home directory. Set STANDUP_HOME to choose one.")]
    Unresolved,
}

/// Data and config locations for Standup
#[derive(Debug, Clone, PartialEq)]
pub struct Home {
    data_dir: PathBuf,
    config_dir: PathBuf,
}

impl Home {
    /// Uses a single directory for both data and config
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            data_dir: dir.clone(),
            config_dir: dir,
        }
    }

    /// Resolves the home from the process environment
    pub fn locate() -> Result<Self, HomeError> {
        Self::locate_with(|key| std::env::var(key).ok())
    }

    /// Resolves the home using the given environment lookup
    ///
    /// `STANDUP_HOME` wins; otherwise the platform data and config dirs.
    pub fn locate_with(env: impl Fn(&str) -> Option<String>) -> Result<Self, HomeError> {
        if let Some(dir) = env(HOME_ENV).filter(|d| !d.trim().is_empty()) {
            return Ok(Self::at(dir));
        }

        let dirs = ProjectDirs::from("dev", "standup", "standup").ok_or(HomeError::Unresolved)?;
        Ok(Self {
            data_dir: dirs.data_dir().to_path_buf(),
            config_dir: dirs.config_dir().to_path_buf(),
        })
    }

    /// Creates the directories and a default config if missing
    pub fn init(&self) -> Result<()> {
        for dir in [&self.data_dir, &self.config_dir] {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        }

        let config_path = self.config_path();
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG)
                .with_context(|| format!("Failed to write config: {}", config_path.display()))?;
        }

        Ok(())
    }

    /// Returns the data directory
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the config file path
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Loads the configuration
    pub fn config(&self) -> Result<Config> {
        Config::load(&self.config_path())
    }

    /// Returns the status store
    pub fn store(&self) -> JsonlStore {
        JsonlStore::in_dir(&self.data_dir)
    }
}
