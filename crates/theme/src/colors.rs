//! Theme color definitions.

use ratatui::style::Color;

/// Application theme with semantic color assignments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Theme name for display
    pub name: &'static str,

    // === Base ===
    /// Screen background
    pub bg: Color,
    /// Main text
    pub fg: Color,

    // === Accented ===
    /// Header, footer and table header background
    pub accented_bg: Color,
    /// Titles, focused borders, primary buttons
    pub accented_fg: Color,

    // === Selection ===
    /// Highlighted table row / focused button background
    pub selected_bg: Color,
    /// Highlighted table row / focused button text
    pub selected_fg: Color,

    /// Placeholders, hints, inactive borders
    pub disabled: Color,

    // === Semantic ===
    /// Success toast, grade badge
    pub success: Color,
    /// Search match count
    pub warning: Color,
    /// Validation messages, delete button
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        *Self::get_by_name("default")
    }
}
