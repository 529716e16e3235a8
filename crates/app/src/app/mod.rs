//! Main application module.
//!
//! Contains the App struct, the event loop and the input handlers.

use std::str::FromStr;
use std::time::Instant;

use anyhow::Result;
use ratatui::{backend::Backend, Frame, Terminal};

use roster_config::Config;
use roster_controller::RosterController;
use roster_logger::{self as logger, LogLevel};

use crate::event::{Event, EventHandler};
use crate::state::AppState;

mod key_handler;
mod modal_handler;

/// Main application
pub struct App {
    controller: RosterController,
    state: AppState,
    event_handler: EventHandler,
}

impl App {
    /// Create the application: start logging and load the initial roster
    pub fn new(config: Config) -> Self {
        let min_level = LogLevel::from_str(&config.logging.min_level).unwrap_or(LogLevel::Info);
        logger::init(config.log_file_path(), min_level);

        let records = if config.roster.seed_sample {
            roster_model::sample_roster()
        } else {
            Vec::new()
        };
        logger::info(format!("Roster started with {} students", records.len()));

        let controller = RosterController::new(records, config.toast_duration());
        Self::with_controller(config, controller)
    }

    /// Create the application around an existing controller
    pub fn with_controller(config: Config, controller: RosterController) -> Self {
        let event_handler = EventHandler::new(config.tick_interval());
        Self {
            controller,
            state: AppState::new(config),
            event_handler,
        }
    }

    pub fn controller(&self) -> &RosterController {
        &self.controller
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the main application loop
    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        render_fn: impl Fn(&mut Frame<'_>, &mut AppState, &RosterController),
    ) -> Result<()> {
        let result = self.run_loop(terminal, render_fn);
        match &result {
            Ok(()) => logger::info("Roster closed"),
            Err(err) => logger::error(format!("Event loop failed: {:#}", err)),
        }
        result
    }

    fn run_loop<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        render_fn: impl Fn(&mut Frame<'_>, &mut AppState, &RosterController),
    ) -> Result<()> {
        let size = terminal.size()?;
        self.state.update_terminal_size(size.width, size.height);

        while !self.state.should_quit {
            match self.event_handler.next()? {
                Event::Key(key) => {
                    self.handle_key_event(key)?;
                    self.state.needs_redraw = true;
                }
                Event::Mouse(mouse) => {
                    self.handle_mouse_event(mouse)?;
                }
                Event::Resize(width, height) => {
                    self.state.update_terminal_size(width, height);
                    self.state.needs_redraw = true;
                }
                Event::Tick => {}
            }

            // Scheduled toast dismissal
            if self.controller.tick(Instant::now()) {
                self.state.needs_redraw = true;
            }

            // Render UI only when needed
            if self.state.needs_redraw {
                terminal.draw(|frame| {
                    render_fn(frame, &mut self.state, &self.controller);
                })?;
                self.state.needs_redraw = false;
            }
        }

        Ok(())
    }
}
