//! Configuration management for roster.
//!
//! Loads a TOML config file from the XDG config directory, writing
//! defaults back when the file is missing or incomplete.

pub mod constants;
mod settings;
mod xdg;

pub use settings::{Config, GeneralSettings, LoggingSettings, RosterSettings};
pub use xdg::{get_cache_dir, get_config_dir};

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default values as constants
pub mod defaults {
    pub const THEME_NAME: &str = "default";
    pub const TOAST_DURATION_MS: u64 = 3000;
    pub const SEED_SAMPLE: bool = true;
    pub const TICK_INTERVAL_MS: u64 = 100;
    pub const MIN_LOG_LEVEL: &str = "info";
}

impl Config {
    /// Load configuration from the default config file.
    ///
    /// On first run, creates the file with default values.
    pub fn load() -> Result<Self> {
        let config = Self::load_from(&Self::config_file_path()?)?;
        Self::ensure_themes_dir()?;
        Ok(config)
    }

    /// Load configuration from `path`.
    ///
    /// Missing file: defaults are written there. Missing keys are filled
    /// with defaults and the normalized file is written back.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let original_content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&original_content)?;

        let normalized_content = toml::to_string_pretty(&config)?;
        if original_content != normalized_content {
            config.save_to(path)?;
        }

        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get path to config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(get_config_dir()?.join("config.toml"))
    }

    /// Get path to themes directory.
    pub fn get_themes_dir() -> Result<PathBuf> {
        Ok(get_config_dir()?.join("themes"))
    }

    /// Log file location: configured path or `<cache dir>/roster.log`.
    pub fn log_file_path(&self) -> Option<PathBuf> {
        match &self.logging.file_path {
            Some(path) => Some(PathBuf::from(path)),
            None => get_cache_dir().ok().map(|dir| dir.join("roster.log")),
        }
    }

    /// Toast lifetime as a duration
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.roster.toast_duration_ms)
    }

    /// Event poll interval as a duration
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.roster.tick_interval_ms.max(1))
    }

    fn ensure_themes_dir() -> Result<()> {
        let themes_dir = Self::get_themes_dir()?;
        if !themes_dir.exists() {
            std::fs::create_dir_all(themes_dir)?;
        }
        Ok(())
    }
}
