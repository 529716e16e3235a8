//! UI building blocks for roster.
//!
//! Provides the text input handler shared by the record form and the search
//! field, the modal result type, and layout helpers used by the renderers.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

// ===== Modal System =====

/// Modal window result (generic version).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalResult<T> {
    /// User confirmed the action with a result.
    Confirmed(T),
    /// User cancelled the action.
    Cancelled,
}

// ===== Modal Width Calculation =====

/// Default modal size constants.
pub mod modal_constants {
    /// Minimum modal width.
    pub const MIN_WIDTH: u16 = 30;
    /// Maximum width as percentage of screen.
    pub const MAX_WIDTH_PERCENTAGE: f32 = 0.75;
    /// Horizontal padding including borders.
    pub const PADDING_WITH_BORDER: u16 = 6;
}

/// Calculate modal width based on content and screen constraints.
///
/// Takes the widest content line, adds border padding, then clamps the
/// result between the minimum width and 75% of the screen.
pub fn calculate_modal_width(content_widths: impl Iterator<Item = u16>, screen_width: u16) -> u16 {
    let content_width = content_widths.max().unwrap_or(0);
    let total_width = content_width + modal_constants::PADDING_WITH_BORDER;
    let max_width = (screen_width as f32 * modal_constants::MAX_WIDTH_PERCENTAGE) as u16;

    total_width
        .max(modal_constants::MIN_WIDTH)
        .min(max_width)
        .min(screen_width)
}

/// Calculate maximum display width from multiline text.
pub fn max_line_width(text: &str) -> u16 {
    text.lines().map(UnicodeWidthStr::width).max().unwrap_or(0) as u16
}

// ===== Text Input =====

/// Outcome of feeding a key to a [`TextInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputChange {
    /// Text content changed.
    Edited,
    /// Only the cursor moved.
    Moved,
    /// Key was not an editing key (or was rejected).
    Ignored,
}

/// Text input handler with cursor management
///
/// Handles character insertion, deletion, and cursor navigation.
/// Cursor position is tracked in characters (not bytes), so multi-byte
/// UTF-8 input is safe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    input: String,
    cursor_pos: usize,
}

impl TextInput {
    /// Create a new text input handler with empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a text input handler with initial text, cursor at end
    pub fn with_text(text: impl Into<String>) -> Self {
        let input = text.into();
        let cursor_pos = input.chars().count();
        Self { input, cursor_pos }
    }

    /// Get the current input text
    pub fn text(&self) -> &str {
        &self.input
    }

    /// Get the cursor position (in characters)
    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    /// Set the input text and move cursor to end
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.cursor_pos = self.input.chars().count();
    }

    /// Clear all input
    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor_pos = 0;
    }

    /// Check if input is empty
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// Convert cursor position (in characters) to byte index
    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor_pos)
            .map(|(idx, _)| idx)
            .unwrap_or(self.input.len())
    }

    /// Insert a character at the cursor position
    pub fn insert(&mut self, c: char) {
        let byte_idx = self.byte_index();
        self.input.insert(byte_idx, c);
        self.cursor_pos += 1;
    }

    /// Delete character before cursor (backspace)
    pub fn backspace(&mut self) -> bool {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let byte_idx = self.byte_index();
            self.input.remove(byte_idx);
            true
        } else {
            false
        }
    }

    /// Delete character at cursor (delete key)
    pub fn delete(&mut self) -> bool {
        if self.cursor_pos < self.input.chars().count() {
            let byte_idx = self.byte_index();
            self.input.remove(byte_idx);
            true
        } else {
            false
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) -> bool {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            true
        } else {
            false
        }
    }

    /// Move cursor right
    pub fn move_right(&mut self) -> bool {
        if self.cursor_pos < self.input.chars().count() {
            self.cursor_pos += 1;
            true
        } else {
            false
        }
    }

    /// Move cursor to start (Home)
    pub fn move_home(&mut self) {
        self.cursor_pos = 0;
    }

    /// Move cursor to end (End)
    pub fn move_end(&mut self) {
        self.cursor_pos = self.input.chars().count();
    }

    /// Get text before cursor (for rendering)
    pub fn text_before_cursor(&self) -> &str {
        &self.input[..self.byte_index()]
    }

    /// Apply an editing key.
    ///
    /// Printable characters are inserted only when `accept` allows them.
    /// Characters typed with Ctrl or Alt held are ignored.
    pub fn apply_key(&mut self, key: &KeyEvent, accept: impl Fn(char) -> bool) -> InputChange {
        let edited = |changed: bool| {
            if changed {
                InputChange::Edited
            } else {
                InputChange::Ignored
            }
        };

        match key.code {
            KeyCode::Char(c) => {
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                    || !accept(c)
                {
                    return InputChange::Ignored;
                }
                self.insert(c);
                InputChange::Edited
            }
            KeyCode::Backspace => edited(self.backspace()),
            KeyCode::Delete => edited(self.delete()),
            KeyCode::Left => {
                self.move_left();
                InputChange::Moved
            }
            KeyCode::Right => {
                self.move_right();
                InputChange::Moved
            }
            KeyCode::Home => {
                self.move_home();
                InputChange::Moved
            }
            KeyCode::End => {
                self.move_end();
                InputChange::Moved
            }
            _ => InputChange::Ignored,
        }
    }

    /// Visible slice of the text for a field `width` columns wide.
    ///
    /// Scrolls horizontally so the cursor stays inside the field. Returns
    /// the visible text and the cursor column relative to the field start.
    pub fn visible_window(&self, width: u16) -> (&str, u16) {
        let width = width as usize;
        if width == 0 {
            return ("", 0);
        }

        let before = self.text_before_cursor();
        let cursor_col = before.width();

        // Drop leading characters until the cursor fits (leaving one cell for it)
        let mut start_byte = 0;
        let mut skipped = 0;
        if cursor_col >= width {
            for (idx, ch) in before.char_indices() {
                if cursor_col - skipped < width {
                    break;
                }
                skipped += ch.width().unwrap_or(0);
                start_byte = idx + ch.len_utf8();
            }
        }

        let visible = &self.input[start_byte..];
        let mut end_byte = visible.len();
        let mut used = 0;
        for (idx, ch) in visible.char_indices() {
            let w = ch.width().unwrap_or(0);
            if used + w > width {
                end_byte = idx;
                break;
            }
            used += w;
        }

        (&visible[..end_byte], (cursor_col - skipped) as u16)
    }
}

// ===== Layout =====

/// Create a centered rectangle with specified width and height within a container
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let horizontal_margin = r.width.saturating_sub(width) / 2;
    let vertical_margin = r.height.saturating_sub(height) / 2;

    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(vertical_margin),
            Constraint::Length(height.min(r.height)),
            Constraint::Length(vertical_margin),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(horizontal_margin),
            Constraint::Length(width.min(r.width)),
            Constraint::Length(horizontal_margin),
        ])
        .split(vertical_layout[1])[1]
}

/// Check whether a screen position lies inside `area`.
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

/// Truncate text to a display width, appending `…` when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        result.push(ch);
        used += w;
    }
    result.push('…');
    result
}
