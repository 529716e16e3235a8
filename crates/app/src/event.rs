//! Terminal event polling.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent};

/// Application event
#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// Terminal resized to (width, height)
    Resize(u16, u16),
    /// Poll interval elapsed with no input
    Tick,
}

/// Event handler for polling terminal events
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Wait up to one tick for the next event
    pub fn next(&self) -> Result<Event> {
        if !event::poll(self.tick_rate)? {
            return Ok(Event::Tick);
        }

        Ok(match event::read()? {
            // With the kitty keyboard protocol releases and repeats arrive too
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key),
            CrosstermEvent::Mouse(mouse) => Event::Mouse(mouse),
            CrosstermEvent::Resize(width, height) => Event::Resize(width, height),
            _ => Event::Tick,
        })
    }
}
