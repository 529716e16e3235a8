//! List screen: title row, search box and the roster table.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use unicode_width::UnicodeWidthStr;

use roster_config::constants::SEARCH_HEIGHT;
use roster_model::StudentRecord;
use roster_theme::Theme;
use roster_ui::TextInput;

const SEARCH_PLACEHOLDER: &str = "Search students by name or email...";
const EMPTY_TITLE: &str = "No students found";
const EMPTY_HINT: &str = "Try adjusting your search or add a new student";

/// Inputs of the list screen
pub struct ListParams<'a> {
    /// Records after search filtering, in roster order
    pub records: &'a [&'a StudentRecord],
    /// Highlighted row within `records`
    pub selected: usize,
    /// Size of the unfiltered roster
    pub total: usize,
    pub search: &'a TextInput,
    pub search_focused: bool,
    pub theme: &'a Theme,
}

/// Render the list screen.
///
/// Returns the terminal cursor position when the search box has focus.
pub fn render_list(buf: &mut Buffer, area: Rect, params: &ListParams<'_>) -> Option<Position> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(SEARCH_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);

    render_title_row(buf, chunks[0], params);
    let cursor = render_search(buf, chunks[1], params);

    if params.records.is_empty() {
        render_empty_state(buf, chunks[2], params.theme);
    } else {
        render_table(buf, chunks[2], params);
    }

    cursor
}

fn render_title_row(buf: &mut Buffer, area: Rect, params: &ListParams<'_>) {
    let theme = params.theme;
    let count = if params.records.len() == params.total {
        format!(" ({})", params.total)
    } else {
        format!(" ({} of {})", params.records.len(), params.total)
    };

    Paragraph::new(Line::from(vec![
        Span::styled(
            "Students",
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        ),
        Span::styled(count, Style::default().fg(theme.warning)),
    ]))
    .render(area, buf);

    let label = "[+ Add Student]";
    let label_width = label.width() as u16;
    if area.width > label_width + 16 {
        buf.set_string(
            area.right() - label_width,
            area.y,
            label,
            Style::default()
                .fg(theme.selected_fg)
                .bg(theme.accented_fg)
                .add_modifier(Modifier::BOLD),
        );
    }
}

fn render_search(buf: &mut Buffer, area: Rect, params: &ListParams<'_>) -> Option<Position> {
    let theme = params.theme;
    let border_color = if params.search_focused {
        theme.accented_fg
    } else {
        theme.disabled
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    block.render(area, buf);
    if inner.width == 0 || inner.height == 0 {
        return None;
    }

    if params.search.is_empty() {
        Paragraph::new(Span::styled(
            SEARCH_PLACEHOLDER,
            Style::default().fg(theme.disabled),
        ))
        .render(inner, buf);
        return params
            .search_focused
            .then_some(Position::new(inner.x, inner.y));
    }

    let (visible, cursor_col) = params.search.visible_window(inner.width);
    buf.set_string(inner.x, inner.y, visible, Style::default().fg(theme.fg));
    params
        .search_focused
        .then_some(Position::new(inner.x + cursor_col, inner.y))
}

fn render_empty_state(buf: &mut Buffer, area: Rect, theme: &Theme) {
    let top = area.y + area.height.saturating_sub(2) / 2;
    let rect = Rect {
        y: top,
        height: area.bottom().saturating_sub(top).min(2),
        ..area
    };

    Paragraph::new(vec![
        Line::from(Span::styled(
            EMPTY_TITLE,
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(EMPTY_HINT, Style::default().fg(theme.disabled))),
    ])
    .alignment(Alignment::Center)
    .render(rect, buf);
}

fn render_table(buf: &mut Buffer, area: Rect, params: &ListParams<'_>) {
    let theme = params.theme;

    let header = Row::new(["ID", "Name", "Email", "Age", "Grade", "Actions"]).style(
        Style::default()
            .fg(theme.accented_fg)
            .bg(theme.accented_bg)
            .add_modifier(Modifier::BOLD),
    );

    let rows = params.records.iter().map(|record| {
        Row::new(vec![
            Cell::from(record.id.to_string()),
            Cell::from(record.name.as_str()),
            Cell::from(record.email.as_str()),
            Cell::from(record.age.to_string()),
            Cell::from(Span::styled(
                format!(" {} ", record.grade),
                Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
            )),
            Cell::from(Line::from(vec![
                Span::styled("e", Style::default().fg(theme.accented_fg)),
                Span::raw(" Edit  "),
                Span::styled("d", Style::default().fg(theme.error)),
                Span::raw(" Delete"),
            ])),
        ])
        .style(Style::default().fg(theme.fg))
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Fill(2),
            Constraint::Fill(3),
            Constraint::Length(5),
            Constraint::Length(7),
            Constraint::Length(16),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.disabled)),
    )
    .row_highlight_style(
        Style::default()
            .fg(theme.selected_fg)
            .bg(theme.selected_bg),
    )
    .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(Some(params.selected));
    StatefulWidget::render(table, area, buf, &mut state);
}
