//! Keyboard routing: dialog, form, search box or table.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use roster_config::constants::PAGE_SCROLL_ROWS;
use roster_controller::SubmitOutcome;
use roster_editor::EditorAction;
use roster_logger as logger;
use roster_modal::{ActiveModal, ConfirmModal};
use roster_ui::InputChange;

use super::App;

impl App {
    /// Handle keyboard event
    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        logger::debug(format!(
            "Key event: code={:?}, modifiers={:?}",
            key.code, key.modifiers
        ));

        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.state.should_quit = true;
            return Ok(());
        }

        if self.state.has_modal() {
            return self.handle_modal_key(key);
        }

        if self.controller.editor().is_some() {
            self.handle_editor_key(key);
            return Ok(());
        }

        if self.state.search_focused {
            self.handle_search_key(key);
            return Ok(());
        }

        self.handle_list_key(key);
        Ok(())
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        let Some(editor) = self.controller.editor_mut() else {
            return;
        };

        match editor.handle_key(key) {
            EditorAction::None => {}
            EditorAction::Cancel => self.controller.cancel_edit(),
            EditorAction::Submit => match self.controller.submit_editor() {
                SubmitOutcome::Rejected(errors) => {
                    logger::debug(format!("Form rejected with {} errors", errors.len()));
                }
                SubmitOutcome::Vanished => {
                    logger::warn("Edited student no longer exists; form closed");
                }
                _ => {}
            },
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => {
                self.state.search_focused = false;
            }
            KeyCode::Up => self.controller.select_prev(),
            KeyCode::Down => self.controller.select_next(),
            _ => {
                let change = self.state.search_input.apply_key(&key, |c| !c.is_control());
                if change == InputChange::Edited {
                    self.controller
                        .set_search_query(self.state.search_input.text());
                }
            }
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.state.should_quit = true,
            KeyCode::Char('/') => self.state.search_focused = true,
            KeyCode::Char('a') => self.controller.begin_create(),
            KeyCode::Char('e') | KeyCode::Enter => self.edit_selected(),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
            KeyCode::Esc if !self.state.search_input.is_empty() => {
                self.state.search_input.clear();
                self.controller.set_search_query("");
            }
            KeyCode::Up | KeyCode::Char('k') => self.controller.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.controller.select_next(),
            KeyCode::Home => self.controller.select_first(),
            KeyCode::End => self.controller.select_last(),
            KeyCode::PageUp => self.controller.select_by(-PAGE_SCROLL_ROWS),
            KeyCode::PageDown => self.controller.select_by(PAGE_SCROLL_ROWS),
            _ => {}
        }
    }

    fn edit_selected(&mut self) {
        let Some(id) = self.controller.selected_record().map(|record| record.id.clone()) else {
            return;
        };
        self.controller.begin_edit(&id);
    }

    /// Ask the controller for a pending delete and mirror it as a dialog
    fn delete_selected(&mut self) {
        let Some(record) = self.controller.selected_record().cloned() else {
            return;
        };
        if self.controller.request_delete(&record.id) {
            self.state.active_modal = Some(ActiveModal::Confirm(Box::new(
                ConfirmModal::delete_student(&record.name),
            )));
        }
    }
}
