//! Toast banner.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use roster_config::constants::TOAST_MAX_WIDTH;
use roster_controller::{Toast, ToastKind};
use roster_theme::Theme;
use roster_ui::truncate_to_width;

/// Draw `toast` in the bottom-right corner of `area`
pub fn render_toast(buf: &mut Buffer, area: Rect, toast: &Toast, theme: &Theme) {
    let width = (toast.message.width() as u16 + 4)
        .min(TOAST_MAX_WIDTH)
        .min(area.width);
    let height = 3u16.min(area.height);
    if width < 5 || height < 3 {
        return;
    }

    let toast_area = Rect::new(
        area.right() - width - u16::from(area.width > width),
        area.bottom() - height,
        width,
        height,
    );

    let color = match toast.kind {
        ToastKind::Success => theme.success,
        ToastKind::Error => theme.error,
    };

    Clear.render(toast_area, buf);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(theme.accented_bg));
    let inner = block.inner(toast_area);
    block.render(toast_area, buf);

    let message = truncate_to_width(&toast.message, inner.width.saturating_sub(2) as usize);
    Paragraph::new(format!(" {}", message))
        .style(
            Style::default()
                .fg(color)
                .bg(theme.accented_bg)
                .add_modifier(Modifier::BOLD),
        )
        .render(inner, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer_text;

    fn toast(message: &str) -> Toast {
        Toast {
            message: message.to_string(),
            kind: ToastKind::Success,
        }
    }

    #[test]
    fn test_toast_in_bottom_right() {
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        render_toast(&mut buf, area, &toast("Student added successfully!"), Theme::get_by_name("default"));

        let text = buffer_text(&buf);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[18].contains("Student added successfully!"));
        assert!(lines[..17].iter().all(|line| line.trim().is_empty()));
    }

    #[test]
    fn test_long_message_is_truncated() {
        let area = Rect::new(0, 0, 80, 10);
        let mut buf = Buffer::empty(area);
        let long = "x".repeat(200);
        render_toast(&mut buf, area, &toast(&long), Theme::get_by_name("default"));
        assert!(buffer_text(&buf).contains('…'));
    }

    #[test]
    fn test_tiny_area_draws_nothing() {
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        render_toast(&mut buf, area, &toast("hi"), Theme::get_by_name("default"));
        assert!(buffer_text(&buf).trim().is_empty());
    }
}
