//! XDG Base Directory support for roster.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "roster";

/// Get the configuration directory following XDG conventions.
///
/// Returns `$XDG_CONFIG_HOME/roster` or `~/.config/roster`.
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .context("Failed to determine config directory")
}

/// Get the cache directory following XDG conventions.
///
/// Returns `$XDG_CACHE_HOME/roster` or `~/.cache/roster`.
pub fn get_cache_dir() -> Result<PathBuf> {
    dirs::cache_dir()
        .map(|p| p.join(APP_NAME))
        .context("Failed to determine cache directory")
}
