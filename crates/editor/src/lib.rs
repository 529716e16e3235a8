//! Student record form for roster.
//!
//! `RecordEditor` owns the draft of a single record while it is being
//! created or edited. It validates the draft on submit and hands a finished
//! [`StudentDraft`] back to its owner; it knows nothing about the roster.

mod field;
mod validation;

pub use field::{EditorFocus, Field};
pub use validation::{
    validate_age, validate_email, validate_grade, validate_name, FieldError, FieldErrors,
};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use roster_model::{StudentDraft, StudentRecord};
use roster_ui::{InputChange, TextInput};

/// Whether the form creates a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit,
}

/// What the owner should do after a key was handled by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    /// Keep the form open
    None,
    /// User asked to save the draft
    Submit,
    /// User asked to leave the form
    Cancel,
}

/// Form state for one student record.
#[derive(Debug, Clone)]
pub struct RecordEditor {
    mode: EditorMode,
    inputs: [TextInput; 4],
    errors: FieldErrors,
    focus: EditorFocus,
}

impl RecordEditor {
    /// Empty form for a new record
    pub fn new() -> Self {
        Self {
            mode: EditorMode::Create,
            inputs: Default::default(),
            errors: FieldErrors::default(),
            focus: EditorFocus::Field(Field::Name),
        }
    }

    /// Form pre-populated from an existing record
    pub fn for_record(record: &StudentRecord) -> Self {
        Self {
            mode: EditorMode::Edit,
            inputs: [
                TextInput::with_text(record.name.as_str()),
                TextInput::with_text(record.email.as_str()),
                TextInput::with_text(record.age.to_string()),
                TextInput::with_text(record.grade.as_str()),
            ],
            errors: FieldErrors::default(),
            focus: EditorFocus::Field(Field::Name),
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Form heading
    pub fn title(&self) -> &'static str {
        match self.mode {
            EditorMode::Create => "Add New Student",
            EditorMode::Edit => "Edit Student",
        }
    }

    /// Label of the submit button
    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            EditorMode::Create => "Add Student",
            EditorMode::Edit => "Update Student",
        }
    }

    /// Input handler of `field`
    pub fn input(&self, field: Field) -> &TextInput {
        &self.inputs[field.index()]
    }

    /// Current raw text of `field`
    pub fn value(&self, field: Field) -> &str {
        self.inputs[field.index()].text()
    }

    /// Error shown next to `field`
    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn focus(&self) -> EditorFocus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: EditorFocus) {
        self.focus = focus;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Replace the text of `field`, clearing its error
    pub fn set_value(&mut self, field: Field, text: impl Into<String>) {
        self.inputs[field.index()].set_text(text);
        self.errors.clear(field);
    }

    /// Validate the draft.
    ///
    /// Every failing field gets its message; field values are left as typed.
    /// On success the age is normalized to an integer and the draft returned.
    pub fn submit(&mut self) -> Result<StudentDraft, FieldErrors> {
        let mut errors = FieldErrors::default();

        if let Err(error) = validate_name(self.value(Field::Name)) {
            errors.set(Field::Name, error);
        }
        if let Err(error) = validate_email(self.value(Field::Email)) {
            errors.set(Field::Email, error);
        }
        let age = validate_age(self.value(Field::Age))
            .map_err(|error| errors.set(Field::Age, error))
            .ok();
        if let Err(error) = validate_grade(self.value(Field::Grade)) {
            errors.set(Field::Grade, error);
        }

        self.errors = errors;
        match age {
            Some(age) if errors.is_empty() => Ok(StudentDraft {
                name: self.value(Field::Name).to_string(),
                email: self.value(Field::Email).to_string(),
                age,
                grade: self.value(Field::Grade).to_string(),
            }),
            _ => Err(errors),
        }
    }

    /// Handle a key press while the form is open
    pub fn handle_key(&mut self, key: KeyEvent) -> EditorAction {
        match key.code {
            KeyCode::Esc => return EditorAction::Cancel,
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                return EditorAction::None;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_prev();
                return EditorAction::None;
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return EditorAction::Submit;
            }
            _ => {}
        }

        match self.focus {
            EditorFocus::Field(field) => {
                if key.code == KeyCode::Enter {
                    return EditorAction::Submit;
                }
                self.edit_field(field, &key);
                EditorAction::None
            }
            EditorFocus::Submit => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => EditorAction::Submit,
                KeyCode::Left | KeyCode::Right => {
                    self.focus = EditorFocus::Cancel;
                    EditorAction::None
                }
                _ => EditorAction::None,
            },
            EditorFocus::Cancel => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => EditorAction::Cancel,
                KeyCode::Left | KeyCode::Right => {
                    self.focus = EditorFocus::Submit;
                    EditorAction::None
                }
                _ => EditorAction::None,
            },
        }
    }

    /// Feed an editing key to `field`; any content change clears its error
    fn edit_field(&mut self, field: Field, key: &KeyEvent) {
        let change = self.inputs[field.index()].apply_key(key, |c| field.accepts(c));
        if change == InputChange::Edited {
            self.errors.clear(field);
        }
    }
}

impl Default for RecordEditor {
    fn default() -> Self {
        Self::new()
    }
}
