//! Application orchestrator for roster.
//!
//! Owns the [`RosterController`](roster_controller::RosterController) and the
//! presentation state around it, polls terminal events and routes them:
//!
//! ```text
//! crossterm event ─▶ EventHandler ─▶ App ─┬─▶ ConfirmModal (delete dialog)
//!                                         ├─▶ RecordEditor (add / edit form)
//!                                         └─▶ list keys / search box
//! ```

pub mod app;
pub mod event;
pub mod state;

pub use app::App;
pub use event::{Event, EventHandler};
pub use state::AppState;
