//! Modal window handling for the application.

use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};

use roster_logger as logger;
use roster_modal::{ActiveModal, Modal, ModalResult};

use super::App;

impl App {
    /// Handle keyboard event in modal window
    pub(super) fn handle_modal_key(&mut self, key: KeyEvent) -> Result<()> {
        let result = match &mut self.state.active_modal {
            Some(ActiveModal::Confirm(modal)) => modal.handle_key(key)?,
            None => return Ok(()),
        };

        if let Some(result) = result {
            self.apply_delete_result(result);
        }
        Ok(())
    }

    /// Handle mouse event; only the open dialog reacts to the mouse
    pub(crate) fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<()> {
        let result = match &mut self.state.active_modal {
            Some(ActiveModal::Confirm(modal)) => modal.handle_mouse(mouse)?,
            None => return Ok(()),
        };

        if let Some(result) = result {
            self.apply_delete_result(result);
            self.state.needs_redraw = true;
        }
        Ok(())
    }

    /// Close the dialog and settle the controller's pending delete
    fn apply_delete_result(&mut self, result: ModalResult<bool>) {
        self.state.close_modal();
        match result {
            ModalResult::Confirmed(true) => {
                if !self.controller.confirm_delete() {
                    logger::warn("Confirmed delete had no pending student");
                }
            }
            ModalResult::Confirmed(false) | ModalResult::Cancelled => {
                self.controller.dismiss_delete();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

    use roster_controller::ViewState;

    use crate::app::test_support::{app, key};

    #[test]
    fn test_confirm_deletes_pending_student() {
        let mut app = app();
        app.handle_key_event(key(KeyCode::Down)).unwrap();
        app.handle_key_event(key(KeyCode::Delete)).unwrap();

        // Cancel is focused first; move to Delete and confirm
        app.handle_key_event(key(KeyCode::Right)).unwrap();
        app.handle_key_event(key(KeyCode::Enter)).unwrap();

        let controller = app.controller();
        assert!(!app.state().has_modal());
        assert_eq!(controller.view_state(), ViewState::List);
        assert_eq!(controller.records().len(), 4);
        assert!(controller.records().iter().all(|r| r.name != "Sarah Johnson"));
        assert_eq!(
            controller.toast().unwrap().message,
            "Student deleted successfully!"
        );
    }

    #[test]
    fn test_enter_on_default_button_cancels() {
        let mut app = app();
        app.handle_key_event(key(KeyCode::Char('d'))).unwrap();
        app.handle_key_event(key(KeyCode::Enter)).unwrap();

        assert!(!app.state().has_modal());
        assert!(app.controller().pending_delete().is_none());
        assert_eq!(app.controller().records().len(), 5);
        assert!(app.controller().toast().is_none());
    }

    #[test]
    fn test_escape_dismisses_dialog() {
        let mut app = app();
        app.handle_key_event(key(KeyCode::Char('d'))).unwrap();
        app.handle_key_event(key(KeyCode::Esc)).unwrap();

        assert!(!app.state().has_modal());
        assert!(app.controller().pending_delete().is_none());
        assert_eq!(app.controller().records().len(), 5);
    }

    #[test]
    fn test_dialog_swallows_list_keys() {
        let mut app = app();
        app.handle_key_event(key(KeyCode::Char('d'))).unwrap();
        app.handle_key_event(key(KeyCode::Char('a'))).unwrap();

        assert!(app.state().has_modal());
        assert!(app.controller().editor().is_none());
    }

    #[test]
    fn test_mouse_without_dialog_is_ignored() {
        let mut app = app();
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 3,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse_event(click).unwrap();
        assert_eq!(app.controller().records().len(), 5);
    }
}
