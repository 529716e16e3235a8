//! Modal dialog system for roster.
//!
//! Provides themed modal dialogs drawn over the current screen.

use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{buffer::Buffer, layout::Rect};

use roster_theme::Theme;

pub use roster_ui::ModalResult;

pub mod confirm;

pub use confirm::ConfirmModal;

/// Active modal window.
#[derive(Debug)]
pub enum ActiveModal {
    /// Delete confirmation (Delete/Cancel)
    Confirm(Box<ConfirmModal>),
}

/// Trait for all modal windows.
pub trait Modal {
    /// Modal window result type.
    type Result;

    /// Render the modal window over `area` with theme.
    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme);

    /// Handle keyboard event.
    /// Returns Some(result) if the modal window should close.
    fn handle_key(&mut self, key: KeyEvent) -> Result<Option<ModalResult<Self::Result>>>;

    /// Handle mouse event.
    /// Returns Some(result) if the modal window should close.
    fn handle_mouse(&mut self, _mouse: MouseEvent) -> Result<Option<ModalResult<Self::Result>>> {
        Ok(None)
    }
}
