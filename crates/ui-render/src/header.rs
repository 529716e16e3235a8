//! Application header bar.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

use roster_theme::Theme;

pub const APP_TITLE: &str = "Student Management System";

/// Render the header with the application title
pub fn render_header(buf: &mut Buffer, area: Rect, theme: &Theme) {
    if area.height == 0 {
        return;
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.accented_fg))
        .style(Style::default().bg(theme.accented_bg));
    let inner = block.inner(area);
    block.render(area, buf);

    // Title on the middle row of the remaining space
    let title_row = Rect {
        y: inner.y + inner.height.saturating_sub(1) / 2,
        height: inner.height.min(1),
        ..inner
    };
    Paragraph::new(APP_TITLE)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(theme.fg)
                .bg(theme.accented_bg)
                .add_modifier(Modifier::BOLD),
        )
        .render(title_row, buf);
}
