//! Configuration structures for roster settings.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Application configuration with nested sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralSettings,

    #[serde(default)]
    pub roster: RosterSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Selected theme name
    #[serde(default = "default_theme_name")]
    pub theme: String,
}

/// Roster screen behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterSettings {
    /// How long a toast stays visible, in ms
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,

    /// Start with the sample students (false = empty roster)
    #[serde(default = "default_seed_sample")]
    pub seed_sample: bool,

    /// Terminal event poll interval in ms
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (optional)
    #[serde(default)]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,
}

// Default value functions for serde
fn default_theme_name() -> String {
    defaults::THEME_NAME.to_string()
}

fn default_toast_duration_ms() -> u64 {
    defaults::TOAST_DURATION_MS
}

fn default_seed_sample() -> bool {
    defaults::SEED_SAMPLE
}

fn default_tick_interval_ms() -> u64 {
    defaults::TICK_INTERVAL_MS
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
        }
    }
}

impl Default for RosterSettings {
    fn default() -> Self {
        Self {
            toast_duration_ms: default_toast_duration_ms(),
            seed_sample: default_seed_sample(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
        }
    }
}
