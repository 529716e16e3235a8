//! Presentation state that lives outside the roster controller.

use roster_config::Config;
use roster_modal::ActiveModal;
use roster_theme::Theme;
use roster_ui::TextInput;

/// Terminal dimensions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerminalSize {
    pub width: u16,
    pub height: u16,
}

/// Global application state
#[derive(Debug)]
pub struct AppState {
    pub should_quit: bool,
    /// Flag indicating the screen must be redrawn on the next loop pass
    pub needs_redraw: bool,
    pub terminal: TerminalSize,
    /// Open dialog; mirrors the controller's pending delete
    pub active_modal: Option<ActiveModal>,
    /// Search box contents
    pub search_input: TextInput,
    /// Keys go to the search box instead of the table
    pub search_focused: bool,
    pub theme: &'static Theme,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            needs_redraw: true,
            terminal: TerminalSize::default(),
            active_modal: None,
            search_input: TextInput::new(),
            search_focused: false,
            theme: Theme::get_by_name(&config.general.theme),
            config,
        }
    }

    pub fn update_terminal_size(&mut self, width: u16, height: u16) {
        self.terminal = TerminalSize { width, height };
    }

    pub fn has_modal(&self) -> bool {
        self.active_modal.is_some()
    }

    pub fn close_modal(&mut self) {
        self.active_modal = None;
    }
}
