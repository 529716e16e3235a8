//! Screen mode of the roster.

use roster_editor::RecordEditor;
use roster_model::{StudentId, StudentRecord};

/// Which screen is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Filtered roster table
    List,
    /// Record form; `None` creates a new record, `Some(id)` edits that record
    Editing(Option<StudentId>),
}

/// Internal mode: list, delete confirmation over the list, or the form.
///
/// A confirmation and an open form cannot exist at the same time.
#[derive(Debug)]
pub(crate) enum Mode {
    List,
    ConfirmDelete(StudentRecord),
    Editing {
        target: Option<StudentId>,
        editor: Box<RecordEditor>,
    },
}

impl Mode {
    pub(crate) fn view_state(&self) -> ViewState {
        match self {
            Mode::List | Mode::ConfirmDelete(_) => ViewState::List,
            Mode::Editing { target, .. } => ViewState::Editing(target.clone()),
        }
    }
}
