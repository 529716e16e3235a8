use ratatui::{
    layout::{Constraint, Direction, Layout, Margin},
    style::Style,
    widgets::Block,
    Frame,
};

use roster_app::AppState;
use roster_config::constants::{FOOTER_HEIGHT, HEADER_HEIGHT};
use roster_controller::{RosterController, ViewState};
use roster_modal::{ActiveModal, Modal};
use roster_ui_render::{
    render_form, render_header, render_list, render_status_bar, render_toast, ListParams,
};

const LIST_HINTS: &[(&str, &str)] = &[
    ("a", "Add"),
    ("e", "Edit"),
    ("d", "Delete"),
    ("/", "Search"),
    ("q", "Quit"),
];
const SEARCH_HINTS: &[(&str, &str)] = &[("Enter", "Done"), ("Esc", "Done"), ("↑↓", "Select")];
const FORM_HINTS: &[(&str, &str)] = &[
    ("Tab", "Next"),
    ("S-Tab", "Prev"),
    ("Enter", "Save"),
    ("Esc", "Cancel"),
];
const DIALOG_HINTS: &[(&str, &str)] = &[("←→", "Choose"), ("Enter", "Confirm"), ("Esc", "Cancel")];

/// Draw the whole screen: header, list or form, footer, then overlays
pub fn render(frame: &mut Frame, state: &mut AppState, controller: &RosterController) {
    let theme = state.theme;
    let size = frame.area();

    frame.render_widget(Block::default().style(Style::default().bg(theme.bg)), size);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(size);

    render_header(frame.buffer_mut(), chunks[0], theme);

    let body = chunks[1].inner(Margin::new(1, 0));
    let filtered = controller.filtered();
    let params = ListParams {
        records: &filtered,
        selected: controller.selected_index(),
        total: controller.records().len(),
        search: &state.search_input,
        search_focused: state.search_focused,
        theme,
    };
    let mut cursor = render_list(frame.buffer_mut(), body, &params);

    let hints = if state.has_modal() {
        DIALOG_HINTS
    } else if let ViewState::Editing(_) = controller.view_state() {
        FORM_HINTS
    } else if state.search_focused {
        SEARCH_HINTS
    } else {
        LIST_HINTS
    };
    render_status_bar(frame.buffer_mut(), chunks[2], theme, hints);

    if let Some(editor) = controller.editor() {
        cursor = render_form(frame.buffer_mut(), size, editor, theme);
    }

    if let Some(modal) = state.active_modal.as_mut() {
        cursor = None;
        match modal {
            ActiveModal::Confirm(m) => m.render(size, frame.buffer_mut(), theme),
        }
    }

    if let Some(toast) = controller.toast() {
        render_toast(frame.buffer_mut(), chunks[1], toast, theme);
    }

    if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }
}
