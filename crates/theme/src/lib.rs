//! Theme system for roster.
//!
//! Built-in themes are embedded TOML files; a theme with the same name in
//! the user's themes directory takes precedence.

mod colors;
mod loader;

pub use colors::Theme;
pub use loader::{load_theme, load_theme_from_str};

use ratatui::style::Color;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

const BUILTIN_THEMES: [(&str, &str); 3] = [
    ("default", include_str!("../themes/default.toml")),
    ("nord", include_str!("../themes/nord.toml")),
    (
        "solarized-light",
        include_str!("../themes/solarized-light.toml"),
    ),
];

static BUILTIN: OnceLock<Vec<Theme>> = OnceLock::new();

// Cache for user-loaded themes
static USER_THEMES: OnceLock<Mutex<HashMap<String, &'static Theme>>> = OnceLock::new();

// Themes directory path (set by app on startup)
static THEMES_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Set the themes directory path (call this at app startup).
pub fn set_themes_dir(path: PathBuf) {
    let _ = THEMES_DIR.set(path);
}

/// Hardcoded fallback theme in case of parse errors.
fn fallback_theme(name: &'static str) -> Theme {
    Theme {
        name,
        bg: Color::Black,
        fg: Color::White,
        accented_bg: Color::DarkGray,
        accented_fg: Color::Cyan,
        selected_bg: Color::Blue,
        selected_fg: Color::White,
        disabled: Color::Gray,
        success: Color::Green,
        warning: Color::Yellow,
        error: Color::Red,
    }
}

fn builtin_themes() -> &'static [Theme] {
    BUILTIN.get_or_init(|| {
        BUILTIN_THEMES
            .iter()
            .map(|&(name, content)| {
                loader::load_theme_from_str(content, name).unwrap_or_else(|e| {
                    eprintln!(
                        "Failed to parse built-in theme '{}': {}. Using fallback theme.",
                        name, e
                    );
                    fallback_theme(name)
                })
            })
            .collect()
    })
}

/// Try to load user theme from config directory.
fn try_load_user_theme(name: &str) -> Option<&'static Theme> {
    let cache = USER_THEMES.get_or_init(|| Mutex::new(HashMap::new()));

    {
        let cache_lock = cache.lock().ok()?;
        if let Some(theme) = cache_lock.get(name) {
            return Some(*theme);
        }
    }

    let theme_path = THEMES_DIR.get()?.join(format!("{}.toml", name));
    if !theme_path.exists() {
        return None;
    }

    let theme = load_theme(&theme_path).ok()?;
    let static_theme: &'static Theme = Box::leak(Box::new(theme));

    if let Ok(mut cache_lock) = cache.lock() {
        cache_lock.insert(name.to_string(), static_theme);
    }

    Some(static_theme)
}

impl Theme {
    /// Get theme by name.
    ///
    /// User themes win over built-in ones; unknown names fall back to `default`.
    pub fn get_by_name(name: &str) -> &'static Theme {
        if let Some(theme) = try_load_user_theme(name) {
            return theme;
        }

        let themes = builtin_themes();
        themes
            .iter()
            .find(|theme| theme.name == name)
            .unwrap_or(&themes[0])
    }

    /// Get list of built-in theme names.
    pub fn all_theme_names() -> Vec<&'static str> {
        BUILTIN_THEMES.iter().map(|(name, _)| *name).collect()
    }
}
