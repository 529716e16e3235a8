//! Confirmation modal for destructive actions.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use roster_config::constants::MODAL_BUTTON_SPACING;
use roster_theme::Theme;
use roster_ui::{calculate_modal_width, centered_rect, contains, max_line_width};

use crate::{Modal, ModalResult};

/// Confirm / cancel dialog.
///
/// Resolves to `Confirmed(true)` when the destructive action is chosen,
/// `Confirmed(false)` or `Cancelled` otherwise. The cancel button is focused
/// initially.
#[derive(Debug)]
pub struct ConfirmModal {
    title: String,
    message: String,
    confirm_label: String,
    cancel_label: String,
    /// true = confirm button focused
    selected: bool,
    last_modal_area: Option<Rect>,
    last_buttons_area: Option<Rect>,
}

impl ConfirmModal {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            confirm_label: "Confirm".to_string(),
            cancel_label: "Cancel".to_string(),
            selected: false,
            last_modal_area: None,
            last_buttons_area: None,
        }
    }

    /// Delete confirmation for a named record
    pub fn delete_student(name: &str) -> Self {
        Self::new(
            "Delete Student",
            format!(
                "Are you sure you want to delete {}?\nThis action cannot be undone.",
                name
            ),
        )
        .with_labels("Delete", "Cancel")
    }

    pub fn with_labels(mut self, confirm: impl Into<String>, cancel: impl Into<String>) -> Self {
        self.confirm_label = confirm.into();
        self.cancel_label = cancel.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the confirm button has focus
    pub fn is_confirm_selected(&self) -> bool {
        self.selected
    }

    fn cancel_text(&self) -> String {
        format!("[ {} ]", self.cancel_label)
    }

    fn confirm_text(&self) -> String {
        format!("[ {} ]", self.confirm_label)
    }

    fn buttons_width(&self) -> u16 {
        (self.cancel_text().width() + self.confirm_text().width()) as u16 + MODAL_BUTTON_SPACING
    }

    fn modal_width(&self, screen_width: u16) -> u16 {
        let title_width = self.title.width() as u16 + 2;
        calculate_modal_width(
            [title_width, max_line_width(&self.message), self.buttons_width()].into_iter(),
            screen_width,
        )
    }
}

impl Modal for ConfirmModal {
    type Result = bool;

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let modal_width = self.modal_width(area.width);
        let inner_width = modal_width.saturating_sub(2).max(1) as usize;

        // Lines after wrapping at the inner width
        let message_lines: u16 = self
            .message
            .lines()
            .map(|line| line.width().max(1).div_ceil(inner_width) as u16)
            .sum::<u16>()
            .max(1);
        // borders + message + blank + buttons
        let modal_height = message_lines + 4;

        let modal_area = centered_rect(modal_width, modal_height, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accented_fg))
            .style(Style::default().bg(theme.accented_bg).fg(theme.fg));

        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(message_lines),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        Paragraph::new(self.message.clone())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(chunks[0], buf);

        let focused = Style::default()
            .fg(theme.selected_fg)
            .bg(theme.selected_bg)
            .add_modifier(Modifier::BOLD);
        let (cancel_style, confirm_style) = if self.selected {
            (Style::default().fg(theme.fg), focused.bg(theme.error))
        } else {
            (focused, Style::default().fg(theme.error))
        };

        let buttons = Line::from(vec![
            Span::styled(self.cancel_text(), cancel_style),
            Span::raw(" ".repeat(MODAL_BUTTON_SPACING as usize)),
            Span::styled(self.confirm_text(), confirm_style),
        ]);
        Paragraph::new(buttons)
            .alignment(Alignment::Center)
            .render(chunks[2], buf);

        self.last_modal_area = Some(modal_area);
        self.last_buttons_area = Some(chunks[2]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<Option<ModalResult<Self::Result>>> {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                self.selected = !self.selected;
                Ok(None)
            }
            KeyCode::Enter => Ok(Some(ModalResult::Confirmed(self.selected))),
            KeyCode::Esc => Ok(Some(ModalResult::Cancelled)),
            KeyCode::Char('y') | KeyCode::Char('Y') => Ok(Some(ModalResult::Confirmed(true))),
            KeyCode::Char('n') | KeyCode::Char('N') => Ok(Some(ModalResult::Confirmed(false))),
            _ => Ok(None),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<Option<ModalResult<Self::Result>>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }

        // Click on the dimmed background closes the dialog
        if let Some(modal_area) = self.last_modal_area {
            if !contains(modal_area, mouse.column, mouse.row) {
                return Ok(Some(ModalResult::Cancelled));
            }
        }

        let Some(buttons_area) = self.last_buttons_area else {
            return Ok(None);
        };
        if !contains(buttons_area, mouse.column, mouse.row) {
            return Ok(None);
        }

        // Buttons are centered: "[ Cancel ]    [ Delete ]"
        let cancel_width = self.cancel_text().width() as u16;
        let confirm_width = self.confirm_text().width() as u16;
        let start_col =
            buttons_area.x + buttons_area.width.saturating_sub(self.buttons_width()) / 2;
        let cancel_end = start_col + cancel_width;
        let confirm_start = cancel_end + MODAL_BUTTON_SPACING;
        let confirm_end = confirm_start + confirm_width;

        if mouse.column >= start_col && mouse.column < cancel_end {
            self.selected = false;
            Ok(Some(ModalResult::Confirmed(false)))
        } else if mouse.column >= confirm_start && mouse.column < confirm_end {
            self.selected = true;
            Ok(Some(ModalResult::Confirmed(true)))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn rendered() -> (ConfirmModal, Buffer) {
        let mut modal = ConfirmModal::delete_student("Mike Chen");
        let area = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(area);
        modal.render(area, &mut buf, Theme::get_by_name("default"));
        (modal, buf)
    }

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_delete_message_names_student() {
        let modal = ConfirmModal::delete_student("Mike Chen");
        assert_eq!(modal.title(), "Delete Student");
        assert!(modal.message().contains("delete Mike Chen?"));
        assert!(modal.message().contains("cannot be undone"));
    }

    #[test]
    fn test_enter_defaults_to_cancel() {
        let mut modal = ConfirmModal::delete_student("A");
        assert!(!modal.is_confirm_selected());
        assert_eq!(
            modal.handle_key(key(KeyCode::Enter)).unwrap(),
            Some(ModalResult::Confirmed(false))
        );
    }

    #[test]
    fn test_toggle_then_enter_confirms() {
        let mut modal = ConfirmModal::delete_student("A");
        assert_eq!(modal.handle_key(key(KeyCode::Right)).unwrap(), None);
        assert_eq!(
            modal.handle_key(key(KeyCode::Enter)).unwrap(),
            Some(ModalResult::Confirmed(true))
        );
    }

    #[test]
    fn test_shortcuts() {
        let mut modal = ConfirmModal::delete_student("A");
        assert_eq!(
            modal.handle_key(key(KeyCode::Char('y'))).unwrap(),
            Some(ModalResult::Confirmed(true))
        );
        assert_eq!(
            modal.handle_key(key(KeyCode::Esc)).unwrap(),
            Some(ModalResult::Cancelled)
        );
        assert_eq!(modal.handle_key(key(KeyCode::Char('x'))).unwrap(), None);
    }

    #[test]
    fn test_render_shows_title_and_buttons() {
        let (_, buf) = rendered();
        let text = buffer_text(&buf);
        assert!(text.contains("Delete Student"));
        assert!(text.contains("[ Cancel ]"));
        assert!(text.contains("[ Delete ]"));
        assert!(text.contains("Mike Chen"));
    }

    #[test]
    fn test_click_outside_cancels() {
        let (mut modal, _) = rendered();
        assert_eq!(
            modal.handle_mouse(click(0, 0)).unwrap(),
            Some(ModalResult::Cancelled)
        );
    }

    #[test]
    fn test_click_on_delete_button_confirms() {
        let (mut modal, buf) = rendered();
        let text = buffer_text(&buf);
        let (row, line) = text
            .lines()
            .enumerate()
            .find(|(_, line)| line.contains("[ Delete ]"))
            .unwrap();
        let byte_idx = line.find("[ Delete ]").unwrap();
        let col = line[..byte_idx].chars().count() as u16 + 2;

        assert_eq!(
            modal.handle_mouse(click(col, row as u16)).unwrap(),
            Some(ModalResult::Confirmed(true))
        );
    }
}
