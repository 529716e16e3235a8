//! Footer with key hints and copyright line.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use roster_theme::Theme;

pub const COPYRIGHT: &str = "© 2026 Student Management System. All rights reserved.";

/// Render the footer.
///
/// `hints` are `(key, action)` pairs for the current screen; the copyright
/// line goes on the last row when there is room for it.
pub fn render_status_bar(buf: &mut Buffer, area: Rect, theme: &Theme, hints: &[(&str, &str)]) {
    if area.height == 0 {
        return;
    }

    // Fill entire area with background color from theme
    let bg = Style::default().bg(theme.accented_bg);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            buf[(x, y)].set_char(' ').set_style(bg);
        }
    }

    let key_style = bg.fg(theme.accented_fg).add_modifier(Modifier::BOLD);
    let text_style = bg.fg(theme.fg);

    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (key, action) in hints {
        spans.push(Span::styled(format!(" {} ", key), key_style));
        spans.push(Span::styled(action.to_string(), text_style));
        spans.push(Span::raw("  "));
    }
    Paragraph::new(Line::from(spans)).render(Rect { height: 1, ..area }, buf);

    if area.height > 1 {
        let last = Rect {
            y: area.bottom() - 1,
            height: 1,
            ..area
        };
        Paragraph::new(Span::styled(COPYRIGHT, bg.fg(theme.disabled)))
            .alignment(ratatui::layout::Alignment::Center)
            .render(last, buf);
    }
}
