//! Add / edit card.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use roster_config::constants::{FORM_LABEL_WIDTH, FORM_MAX_WIDTH};
use roster_editor::{EditorFocus, Field, RecordEditor};
use roster_theme::Theme;
use roster_ui::{centered_rect, truncate_to_width};

/// Input row plus validation row per field
const ROWS_PER_FIELD: u16 = 2;
/// Top padding, fields, spacer and buttons
const INNER_HEIGHT: u16 = 1 + ROWS_PER_FIELD * Field::ALL.len() as u16 + 1 + 1;
const BUTTON_GAP: &str = "  ";

/// Draw the editor card centered in `area`.
///
/// Returns the cursor position when a text field has focus.
pub fn render_form(
    buf: &mut Buffer,
    area: Rect,
    editor: &RecordEditor,
    theme: &Theme,
) -> Option<Position> {
    let width = FORM_MAX_WIDTH.min(area.width.saturating_sub(2));
    let height = INNER_HEIGHT + 2;
    let card = centered_rect(width, height, area);

    Clear.render(card, buf);
    let block = Block::default()
        .title(format!(" {} ", editor.title()))
        .title_style(
            Style::default()
                .fg(theme.accented_fg)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accented_fg))
        .style(Style::default().bg(theme.bg));
    let inner = block.inner(card);
    block.render(card, buf);

    if inner.width <= FORM_LABEL_WIDTH + 2 || inner.height < INNER_HEIGHT {
        return None;
    }

    let mut cursor = None;
    let first_row = inner.y + 1;
    for field in Field::ALL {
        let y = first_row + ROWS_PER_FIELD * field.index() as u16;
        let focused = editor.focus() == EditorFocus::Field(field);
        if let Some(pos) = render_field(buf, inner, y, editor, field, focused, theme) {
            cursor = Some(pos);
        }
    }

    let buttons_y = first_row + ROWS_PER_FIELD * Field::ALL.len() as u16 + 1;
    render_buttons(
        buf,
        Rect::new(inner.x, buttons_y, inner.width, 1),
        editor,
        theme,
    );

    cursor
}

fn render_field(
    buf: &mut Buffer,
    inner: Rect,
    y: u16,
    editor: &RecordEditor,
    field: Field,
    focused: bool,
    theme: &Theme,
) -> Option<Position> {
    let label_style = if focused {
        Style::default()
            .fg(theme.accented_fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg)
    };
    buf.set_string(inner.x + 1, y, field.label(), label_style);

    let input_area = Rect::new(
        inner.x + 1 + FORM_LABEL_WIDTH,
        y,
        inner.width - 2 - FORM_LABEL_WIDTH,
        1,
    );
    let input_bg = if focused {
        theme.selected_bg
    } else {
        theme.accented_bg
    };
    buf.set_style(input_area, Style::default().bg(input_bg));

    let input = editor.input(field);
    let cursor = if input.is_empty() {
        buf.set_string(
            input_area.x,
            y,
            truncate_to_width(field.placeholder(), input_area.width as usize),
            Style::default().fg(theme.disabled).bg(input_bg),
        );
        Position::new(input_area.x, y)
    } else {
        let (visible, cursor_col) = input.visible_window(input_area.width);
        buf.set_string(
            input_area.x,
            y,
            visible,
            Style::default().fg(theme.fg).bg(input_bg),
        );
        Position::new(input_area.x + cursor_col, y)
    };

    if let Some(error) = editor.error(field) {
        let message = truncate_to_width(&error.to_string(), input_area.width as usize);
        buf.set_string(
            input_area.x,
            y + 1,
            message,
            Style::default().fg(theme.error),
        );
    }

    focused.then_some(cursor)
}

fn render_buttons(buf: &mut Buffer, area: Rect, editor: &RecordEditor, theme: &Theme) {
    let button_style = |focus: EditorFocus, color: Color| {
        if editor.focus() == focus {
            Style::default()
                .fg(theme.selected_fg)
                .bg(color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        }
    };

    let submit = format!("[ {} ]", editor.submit_label());
    let cancel = "[ Cancel ]";
    let line = Line::from(vec![
        Span::styled(submit, button_style(EditorFocus::Submit, theme.accented_fg)),
        Span::raw(BUTTON_GAP),
        Span::styled(cancel, button_style(EditorFocus::Cancel, theme.disabled)),
    ]);

    Paragraph::new(line)
        .alignment(Alignment::Center)
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer_text;
    use roster_model::sample_roster;

    fn render(editor: &RecordEditor) -> (Vec<String>, Option<Position>) {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        let cursor = render_form(&mut buf, area, editor, Theme::get_by_name("default"));
        let lines = buffer_text(&buf).lines().map(str::to_string).collect();
        (lines, cursor)
    }

    #[test]
    fn test_create_form_shows_placeholders() {
        let editor = RecordEditor::new();
        let (lines, cursor) = render(&editor);
        let text = lines.join("\n");

        assert!(text.contains("Add New Student"));
        assert!(text.contains("[ Add Student ]"));
        assert!(text.contains("[ Cancel ]"));
        assert!(text.contains("Enter student name"));
        assert!(text.contains("Enter grade (e.g., A, B+, A-)"));

        let cursor = cursor.expect("name field focused");
        assert!(lines[cursor.y as usize].contains("Name"));
    }

    #[test]
    fn test_edit_form_prefills_values() {
        let record = sample_roster().remove(2);
        let editor = RecordEditor::for_record(&record);
        let (lines, cursor) = render(&editor);
        let text = lines.join("\n");

        assert!(text.contains("Edit Student"));
        assert!(text.contains("[ Update Student ]"));
        assert!(text.contains("mike.chen@school.com"));
        assert!(!text.contains("Enter student name"));

        // cursor sits just after "Mike Chen"
        let cursor = cursor.expect("name field focused");
        let row: Vec<char> = lines[cursor.y as usize].chars().collect();
        assert_eq!(row[cursor.x as usize - 1], 'n');
    }

    #[test]
    fn test_validation_messages_rendered() {
        let mut editor = RecordEditor::new();
        assert!(editor.submit().is_err());
        let (lines, _) = render(&editor);
        let text = lines.join("\n");

        assert!(text.contains("Name is required"));
        assert!(text.contains("Email is required"));
        assert!(text.contains("Age is required"));
        assert!(text.contains("Grade is required"));
    }

    #[test]
    fn test_no_cursor_when_button_focused() {
        let mut editor = RecordEditor::new();
        editor.set_focus(EditorFocus::Submit);
        let (_, cursor) = render(&editor);
        assert!(cursor.is_none());
    }
}
