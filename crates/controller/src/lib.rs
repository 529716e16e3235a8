//! Roster controller.
//!
//! `RosterController` is the single source of truth for the roster and for
//! which screen is visible. UI code holds it by `&mut` and calls the command
//! methods in response to input events; the table is rendered from
//! [`RosterController::filtered`].

mod toast;
mod view;

pub use toast::{DismissToken, Toast, ToastKind, ToastSlot, DEFAULT_TOAST_DURATION};
pub use view::ViewState;

use std::time::{Duration, Instant};

use roster_editor::{FieldErrors, RecordEditor};
use roster_model::{filter_records, IdGenerator, StudentDraft, StudentId, StudentRecord};

use view::Mode;

const MSG_ADDED: &str = "Student added successfully!";
const MSG_UPDATED: &str = "Student updated successfully!";
const MSG_DELETED: &str = "Student deleted successfully!";

/// Result of submitting the open form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// New record appended under this id
    Added(StudentId),
    /// Existing record replaced
    Updated(StudentId),
    /// Edit target disappeared; nothing changed
    Vanished,
    /// Validation failed; form stays open with these errors
    Rejected(FieldErrors),
    /// No form was open
    NotEditing,
}

/// Roster state and commands.
#[derive(Debug)]
pub struct RosterController {
    records: Vec<StudentRecord>,
    ids: IdGenerator,
    mode: Mode,
    query: String,
    selected: usize,
    toast: ToastSlot,
}

impl RosterController {
    /// Create a controller over `records` with the given toast lifetime
    pub fn new(records: Vec<StudentRecord>, toast_duration: Duration) -> Self {
        Self {
            ids: IdGenerator::seeded_from(&records),
            records,
            mode: Mode::List,
            query: String::new(),
            selected: 0,
            toast: ToastSlot::new(toast_duration),
        }
    }

    // ===== Queries =====

    /// Canonical roster in insertion order
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    /// Record with `id`
    pub fn record(&self, id: &StudentId) -> Option<&StudentRecord> {
        self.records.iter().find(|record| &record.id == id)
    }

    /// Records matching the search query, in roster order
    pub fn filtered(&self) -> Vec<&StudentRecord> {
        filter_records(&self.records, &self.query)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn view_state(&self) -> ViewState {
        self.mode.view_state()
    }

    /// Open form, if the editor is visible
    pub fn editor(&self) -> Option<&RecordEditor> {
        match &self.mode {
            Mode::Editing { editor, .. } => Some(&**editor),
            _ => None,
        }
    }

    pub fn editor_mut(&mut self) -> Option<&mut RecordEditor> {
        match &mut self.mode {
            Mode::Editing { editor, .. } => Some(&mut **editor),
            _ => None,
        }
    }

    /// Record awaiting delete confirmation
    pub fn pending_delete(&self) -> Option<&StudentRecord> {
        match &self.mode {
            Mode::ConfirmDelete(record) => Some(record),
            _ => None,
        }
    }

    /// Visible toast
    pub fn toast(&self) -> Option<&Toast> {
        self.toast.current()
    }

    /// Index of the highlighted row within the filtered list
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Highlighted record within the filtered list
    pub fn selected_record(&self) -> Option<&StudentRecord> {
        self.filtered().get(self.selected).copied()
    }

    // ===== Selection =====

    pub fn select_next(&mut self) {
        let len = self.filtered().len();
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.filtered().len().saturating_sub(1);
    }

    /// Move the highlight by `delta` rows, stopping at the ends
    pub fn select_by(&mut self, delta: isize) {
        let last = self.filtered().len().saturating_sub(1);
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }

    fn clamp_selection(&mut self) {
        let last = self.filtered().len().saturating_sub(1);
        self.selected = self.selected.min(last);
    }

    // ===== Mutations =====

    /// Append `draft` under a fresh id and return to the list
    pub fn add_record(&mut self, draft: StudentDraft) -> StudentId {
        let records = &self.records;
        let id = self
            .ids
            .next_id(|candidate| records.iter().any(|record| &record.id == candidate));

        roster_logger::info(format!("Added student {} ({})", id, draft.name));
        self.records.push(draft.into_record(id.clone()));
        self.mode = Mode::List;
        self.clamp_selection();
        self.show_toast(MSG_ADDED, ToastKind::Success);
        id
    }

    /// Replace the record with `id` in place and return to the list.
    ///
    /// Returns `false` (and changes no record) when `id` no longer exists.
    pub fn update_record(&mut self, id: &StudentId, draft: StudentDraft) -> bool {
        self.mode = Mode::List;

        let Some(slot) = self.records.iter_mut().find(|record| &record.id == id) else {
            roster_logger::debug(format!("Update of missing student {} ignored", id));
            self.clamp_selection();
            return false;
        };

        *slot = draft.into_record(id.clone());
        roster_logger::info(format!("Updated student {}", id));
        self.clamp_selection();
        self.show_toast(MSG_UPDATED, ToastKind::Success);
        true
    }

    /// Remove the record with `id`; returns `false` when it is absent
    pub fn delete_record(&mut self, id: &StudentId) -> bool {
        let Some(pos) = self.records.iter().position(|record| &record.id == id) else {
            roster_logger::debug(format!("Delete of missing student {} ignored", id));
            return false;
        };

        self.records.remove(pos);
        roster_logger::info(format!("Deleted student {}", id));
        self.clamp_selection();
        self.show_toast(MSG_DELETED, ToastKind::Success);
        true
    }

    /// Store the search query; the roster itself is untouched
    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.clamp_selection();
    }

    // ===== Mode transitions =====

    /// Open an empty form
    pub fn begin_create(&mut self) {
        self.mode = Mode::Editing {
            target: None,
            editor: Box::new(RecordEditor::new()),
        };
    }

    /// Open the form on record `id`; no-op when it does not exist
    pub fn begin_edit(&mut self, id: &StudentId) -> bool {
        let Some(record) = self.record(id) else {
            return false;
        };

        let editor = Box::new(RecordEditor::for_record(record));
        self.mode = Mode::Editing {
            target: Some(id.clone()),
            editor,
        };
        true
    }

    /// Close the form, discarding the draft
    pub fn cancel_edit(&mut self) {
        if matches!(self.mode, Mode::Editing { .. }) {
            self.mode = Mode::List;
        }
    }

    /// Validate the open form and route the draft to add or update
    pub fn submit_editor(&mut self) -> SubmitOutcome {
        let Mode::Editing { target, editor } = &mut self.mode else {
            return SubmitOutcome::NotEditing;
        };

        let draft = match editor.submit() {
            Ok(draft) => draft,
            Err(errors) => return SubmitOutcome::Rejected(errors),
        };

        match target.take() {
            None => SubmitOutcome::Added(self.add_record(draft)),
            Some(id) => {
                if self.update_record(&id, draft) {
                    SubmitOutcome::Updated(id)
                } else {
                    SubmitOutcome::Vanished
                }
            }
        }
    }

    /// Ask for confirmation before deleting `id`.
    ///
    /// Ignored while the form is open or when `id` does not exist.
    pub fn request_delete(&mut self, id: &StudentId) -> bool {
        if matches!(self.mode, Mode::Editing { .. }) {
            return false;
        }
        let Some(record) = self.record(id).cloned() else {
            return false;
        };

        self.mode = Mode::ConfirmDelete(record);
        true
    }

    /// Delete the record awaiting confirmation
    pub fn confirm_delete(&mut self) -> bool {
        let Mode::ConfirmDelete(record) = &self.mode else {
            return false;
        };
        let id = record.id.clone();
        self.mode = Mode::List;
        self.delete_record(&id)
    }

    /// Close the confirmation without deleting
    pub fn dismiss_delete(&mut self) {
        if matches!(self.mode, Mode::ConfirmDelete(_)) {
            self.mode = Mode::List;
        }
    }

    // ===== Toast =====

    /// Show a toast now, superseding any visible one
    pub fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind) -> DismissToken {
        self.toast.show(message, kind, Instant::now())
    }

    /// Fire the scheduled toast dismissal if due; returns whether anything changed
    pub fn tick(&mut self, now: Instant) -> bool {
        self.toast.tick(now)
    }
}

impl Default for RosterController {
    fn default() -> Self {
        Self::new(roster_model::sample_roster(), DEFAULT_TOAST_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_editor::Field;
    use std::collections::HashSet;

    fn draft(name: &str) -> StudentDraft {
        StudentDraft {
            name: name.to_string(),
            email: format!("{}@school.com", name.to_lowercase()),
            age: 20,
            grade: "B".to_string(),
        }
    }

    fn id(value: &str) -> StudentId {
        StudentId::new(value)
    }

    fn names(controller: &RosterController) -> Vec<String> {
        controller.filtered().iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_initial_state_is_list() {
        let controller = RosterController::default();
        assert_eq!(controller.view_state(), ViewState::List);
        assert_eq!(controller.records().len(), 5);
        assert!(controller.toast().is_none());
        assert!(controller.pending_delete().is_none());
    }

    #[test]
    fn test_search_chen_then_clear() {
        let mut controller = RosterController::default();

        controller.set_search_query("chen");
        assert_eq!(names(&controller), vec!["Mike Chen"]);

        controller.set_search_query("");
        let ids: Vec<&str> = controller.filtered().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
        assert_eq!(controller.records().len(), 5);
    }

    #[test]
    fn test_create_flow_appends_sixth_record() {
        let mut controller = RosterController::default();
        controller.begin_create();
        assert_eq!(controller.view_state(), ViewState::Editing(None));

        let editor = controller.editor_mut().unwrap();
        editor.set_value(Field::Name, "A");
        editor.set_value(Field::Email, "a@b.c");
        editor.set_value(Field::Age, "20");
        editor.set_value(Field::Grade, "B");

        let outcome = controller.submit_editor();
        let SubmitOutcome::Added(new_id) = outcome else {
            panic!("expected Added, got {:?}", outcome);
        };

        assert_eq!(controller.records().len(), 6);
        let last = controller.records().last().unwrap();
        assert_eq!(last.id, new_id);
        assert_eq!(last.name, "A");
        assert_eq!(last.age, 20);
        assert!(controller.records()[..5].iter().all(|r| r.id != new_id));
        assert_eq!(controller.view_state(), ViewState::List);

        let toast = controller.toast().unwrap();
        assert_eq!(toast.message, "Student added successfully!");
        assert_eq!(toast.kind, ToastKind::Success);
    }

    #[test]
    fn test_invalid_submit_keeps_form_open_and_roster_intact() {
        let mut controller = RosterController::default();
        controller.begin_create();

        let editor = controller.editor_mut().unwrap();
        editor.set_value(Field::Email, "bad");
        editor.set_value(Field::Age, "200");

        let outcome = controller.submit_editor();
        let SubmitOutcome::Rejected(errors) = outcome else {
            panic!("expected Rejected, got {:?}", outcome);
        };
        assert_eq!(errors.len(), 4);
        assert_eq!(controller.records().len(), 5);
        assert_eq!(controller.view_state(), ViewState::Editing(None));
        assert!(controller.toast().is_none());
        assert_eq!(controller.editor().unwrap().errors().len(), 4);
    }

    #[test]
    fn test_rapid_adds_have_unique_ids() {
        let mut controller = RosterController::default();
        for i in 0..500 {
            controller.add_record(draft(&format!("S{}", i)));
        }

        let ids: HashSet<_> = controller.records().iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids.len(), 505);
    }

    #[test]
    fn test_add_continues_after_largest_numeric_id() {
        let mut records = roster_model::sample_roster();
        records[0].id = id("not-a-number");
        records.push(draft("X").into_record(id("6")));
        let mut controller = RosterController::new(records, DEFAULT_TOAST_DURATION);

        let new_id = controller.add_record(draft("Y"));
        assert_eq!(new_id.as_str(), "7");
    }

    #[test]
    fn test_update_preserves_position_and_other_records() {
        let mut controller = RosterController::default();
        let before = controller.records().to_vec();

        assert!(controller.update_record(&id("3"), draft("Michael")));

        let after = controller.records();
        assert_eq!(after.len(), 5);
        assert_eq!(after[2].id, id("3"));
        assert_eq!(after[2].name, "Michael");
        for i in [0, 1, 3, 4] {
            assert_eq!(after[i], before[i]);
        }
        assert_eq!(
            controller.toast().map(|t| t.message.as_str()),
            Some("Student updated successfully!")
        );
    }

    #[test]
    fn test_edit_flow_routes_to_update() {
        let mut controller = RosterController::default();
        assert!(controller.begin_edit(&id("2")));
        assert_eq!(controller.view_state(), ViewState::Editing(Some(id("2"))));
        assert_eq!(controller.editor().unwrap().value(Field::Name), "Sarah Johnson");

        controller
            .editor_mut()
            .unwrap()
            .set_value(Field::Grade, "A");
        assert_eq!(controller.submit_editor(), SubmitOutcome::Updated(id("2")));
        assert_eq!(controller.records()[1].grade, "A");
        assert_eq!(controller.view_state(), ViewState::List);
    }

    #[test]
    fn test_update_of_vanished_record_is_noop() {
        let mut controller = RosterController::default();
        assert!(controller.begin_edit(&id("4")));
        assert!(controller.delete_record(&id("4")));
        let before = controller.records().to_vec();

        assert_eq!(controller.submit_editor(), SubmitOutcome::Vanished);
        assert_eq!(controller.records(), before.as_slice());
        assert_eq!(controller.view_state(), ViewState::List);
        // no success toast for an absorbed update; the delete toast remains
        assert_eq!(
            controller.toast().unwrap().message,
            "Student deleted successfully!"
        );
    }

    #[test]
    fn test_begin_edit_missing_id_is_noop() {
        let mut controller = RosterController::default();
        assert!(!controller.begin_edit(&id("99")));
        assert_eq!(controller.view_state(), ViewState::List);
    }

    #[test]
    fn test_cancel_edit_discards_draft() {
        let mut controller = RosterController::default();
        controller.begin_create();
        controller
            .editor_mut()
            .unwrap()
            .set_value(Field::Name, "Draft");

        controller.cancel_edit();
        assert_eq!(controller.view_state(), ViewState::List);
        assert!(controller.editor().is_none());
        assert_eq!(controller.records().len(), 5);

        controller.begin_create();
        assert_eq!(controller.editor().unwrap().value(Field::Name), "");
    }

    #[test]
    fn test_dismiss_delete_leaves_roster_unchanged() {
        let mut controller = RosterController::default();
        let before = controller.records().to_vec();

        assert!(controller.request_delete(&id("3")));
        assert_eq!(controller.pending_delete().map(|r| r.name.as_str()), Some("Mike Chen"));
        assert_eq!(controller.records(), before.as_slice());

        controller.dismiss_delete();
        assert!(controller.pending_delete().is_none());
        assert_eq!(controller.records(), before.as_slice());
        assert!(controller.toast().is_none());
    }

    #[test]
    fn test_confirm_delete_removes_only_target() {
        let mut controller = RosterController::default();
        assert!(controller.request_delete(&id("3")));
        assert!(controller.confirm_delete());

        let ids: Vec<&str> = controller.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "4", "5"]);
        assert!(controller.pending_delete().is_none());
        assert_eq!(
            controller.toast().map(|t| t.message.as_str()),
            Some("Student deleted successfully!")
        );
    }

    #[test]
    fn test_confirm_without_request_is_noop() {
        let mut controller = RosterController::default();
        assert!(!controller.confirm_delete());
        assert_eq!(controller.records().len(), 5);
    }

    #[test]
    fn test_confirm_while_editing_keeps_form_open() {
        let mut controller = RosterController::default();
        assert!(controller.begin_edit(&id("2")));
        controller
            .editor_mut()
            .unwrap()
            .set_value(Field::Name, "Draft In Progress");

        assert!(!controller.confirm_delete());
        assert_eq!(controller.view_state(), ViewState::Editing(Some(id("2"))));
        assert_eq!(
            controller.editor().unwrap().value(Field::Name),
            "Draft In Progress"
        );
        assert_eq!(controller.records().len(), 5);
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let mut controller = RosterController::default();
        assert!(!controller.delete_record(&id("42")));
        assert_eq!(controller.records().len(), 5);
        assert!(controller.toast().is_none());
    }

    #[test]
    fn test_delete_request_ignored_while_editing() {
        let mut controller = RosterController::default();
        controller.begin_create();
        assert!(!controller.request_delete(&id("1")));
        assert!(controller.pending_delete().is_none());
        assert_eq!(controller.view_state(), ViewState::Editing(None));
    }

    #[test]
    fn test_opening_form_closes_confirmation() {
        let mut controller = RosterController::default();
        assert!(controller.request_delete(&id("1")));
        controller.begin_create();
        assert!(controller.pending_delete().is_none());
        assert!(!controller.confirm_delete());
        assert_eq!(controller.records().len(), 5);
    }

    #[test]
    fn test_search_never_mutates_roster() {
        let mut controller = RosterController::default();
        let before = controller.records().to_vec();
        controller.set_search_query("DAVI");
        assert_eq!(names(&controller), vec!["Emily Davis", "David Kim"]);
        assert_eq!(controller.records(), before.as_slice());
    }

    #[test]
    fn test_selection_clamps_to_filtered_list() {
        let mut controller = RosterController::default();
        controller.select_last();
        assert_eq!(controller.selected_index(), 4);

        controller.set_search_query("chen");
        assert_eq!(controller.selected_index(), 0);
        assert_eq!(
            controller.selected_record().map(|r| r.name.as_str()),
            Some("Mike Chen")
        );

        controller.set_search_query("nobody");
        assert!(controller.selected_record().is_none());
    }

    #[test]
    fn test_selection_moves_within_bounds() {
        let mut controller = RosterController::default();
        controller.select_prev();
        assert_eq!(controller.selected_index(), 0);
        controller.select_next();
        controller.select_next();
        assert_eq!(controller.selected_index(), 2);
        controller.select_by(10);
        assert_eq!(controller.selected_index(), 4);
        controller.select_by(-2);
        assert_eq!(controller.selected_index(), 2);
        controller.select_first();
        assert_eq!(controller.selected_index(), 0);
    }

    #[test]
    fn test_toast_expires_on_tick() {
        let mut controller = RosterController::new(
            roster_model::sample_roster(),
            Duration::from_millis(3000),
        );
        controller.delete_record(&id("1"));
        assert!(controller.toast().is_some());

        assert!(!controller.tick(Instant::now()));
        assert!(controller.toast().is_some());

        assert!(controller.tick(Instant::now() + Duration::from_secs(4)));
        assert!(controller.toast().is_none());
    }
}
