//! Configuration handling for the TUI

use crate::state::{FormState, DEFAULT_CONSOLE_CAPACITY, DEFAULT_INPUT_A, DEFAULT_INPUT_B};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Initial value of input A
    pub initial_input_a: Option<String>,
    /// Initial value of input B
    pub initial_input_b: Option<String>,
    /// Maximum number of console lines kept
    pub console_capacity: Option<usize>,
}

impl FormConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("dev", "stateform", "use-state-form")
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file
    pub fn data_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: FormConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to a file, creating parent directories
    #[allow(dead_code)]
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// State the form starts with
    pub fn initial_state(&self) -> FormState {
        FormState::new(
            self.initial_input_a.as_deref().unwrap_or(DEFAULT_INPUT_A),
            self.initial_input_b.as_deref().unwrap_or(DEFAULT_INPUT_B),
        )
    }

    pub fn console_capacity_or_default(&self) -> usize {
        self.console_capacity.unwrap_or(DEFAULT_CONSOLE_CAPACITY)
    }
}
