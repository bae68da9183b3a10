//! Per-cell draft form state.
//!
//! Each cell can hold one transient draft for a new story card. Drafts are
//! keyed by cell and survive independently of which cell's form is
//! currently open: opening a different cell's form never destroys another
//! cell's unsaved input. A draft is destroyed only by successful
//! submission.

use std::collections::HashMap;

use storymap_protocol::{CellRef, Priority, ProtocolError};

/// The draft form field currently receiving text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftField {
    /// The story title.
    #[default]
    Title,
    /// The optional description.
    Description,
    /// The priority selector.
    Priority,
}

impl DraftField {
    /// Returns the next field in tab order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Priority,
            Self::Priority => Self::Title,
        }
    }
}

/// Minimum title length below which a non-blocking warning is shown.
const SOFT_TITLE_LENGTH: usize = 3;

/// A transient new-story draft scoped to one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    /// The story title being typed.
    pub title: String,
    /// The optional description being typed.
    pub description: String,
    /// The selected priority.
    pub priority: Priority,
    /// The last submission error, shown inline near the title field.
    pub error: Option<String>,
    /// The field currently receiving input.
    pub focus: DraftField,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            priority: Priority::Mvp,
            error: None,
            focus: DraftField::Title,
        }
    }
}

impl Draft {
    /// Appends a character to the focused text field.
    ///
    /// When the priority selector is focused, any input cycles through
    /// the priorities instead of inserting text.
    pub fn input_char(&mut self, ch: char) {
        match self.focus {
            DraftField::Title => self.title.push(ch),
            DraftField::Description => self.description.push(ch),
            DraftField::Priority => self.cycle_priority(),
        }
    }

    /// Deletes the last character of the focused text field.
    pub fn delete_char(&mut self) {
        match self.focus {
            DraftField::Title => {
                self.title.pop();
            }
            DraftField::Description => {
                self.description.pop();
            }
            DraftField::Priority => {}
        }
    }

    /// Moves input focus to the next field.
    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    /// Advances the priority selector one step.
    pub fn cycle_priority(&mut self) {
        let all = Priority::all();
        let index = all.iter().position(|p| *p == self.priority).unwrap_or(0);
        self.priority = all[(index + 1) % all.len()];
    }

    /// Returns a non-blocking warning for the current title, if any.
    ///
    /// A title shorter than three characters is flagged but does not
    /// prevent submission; only an empty title does.
    #[must_use]
    pub fn soft_warning(&self) -> Option<&'static str> {
        let trimmed = self.title.trim();
        if !trimmed.is_empty() && trimmed.chars().count() < SOFT_TITLE_LENGTH {
            Some("title is very short")
        } else {
            None
        }
    }
}

/// The validated outcome of a draft submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftSubmission {
    /// The cell the story should be created in.
    pub cell: CellRef,
    /// The trimmed, non-empty title.
    pub title: String,
    /// The description, or `None` when left empty.
    pub description: Option<String>,
    /// The selected priority.
    pub priority: Priority,
}

/// All drafts on the board, keyed by cell.
///
/// At most one cell is "actively adding" (its form is open); other cells
/// keep their draft content untouched in the background.
#[derive(Debug, Clone, Default)]
pub struct DraftStore {
    drafts: HashMap<CellRef, Draft>,
    active: Option<CellRef>,
}

impl DraftStore {
    /// Opens the add-card form for `cell`.
    ///
    /// Creates a fresh empty draft if the cell has none; an existing
    /// draft (from a previously closed form) is reused as-is.
    pub fn open(&mut self, cell: CellRef) {
        self.drafts.entry(cell).or_default();
        self.active = Some(cell);
    }

    /// Closes the add-card form for `cell` without clearing its content.
    pub fn close(&mut self, cell: CellRef) {
        if self.active == Some(cell) {
            self.active = None;
        }
    }

    /// Returns the cell whose form is currently open, if any.
    #[must_use]
    pub fn active(&self) -> Option<CellRef> {
        self.active
    }

    /// Returns the draft for `cell`, if one exists.
    #[must_use]
    pub fn draft(&self, cell: CellRef) -> Option<&Draft> {
        self.drafts.get(&cell)
    }

    /// Returns the draft of the open form, if any.
    #[must_use]
    pub fn active_draft(&self) -> Option<&Draft> {
        self.drafts.get(&self.active?)
    }

    /// Returns a mutable reference to the draft of the open form.
    pub fn active_draft_mut(&mut self) -> Option<&mut Draft> {
        self.drafts.get_mut(&self.active?)
    }

    /// Validates and consumes the draft for `cell`.
    ///
    /// On success the cell's draft resets to defaults and the form
    /// closes. On failure the error is recorded on the draft, the form
    /// stays open, and the typed content is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::EmptyDraftTitle`] when the trimmed title
    /// is empty. A short (but non-empty) title is a soft warning and
    /// does not fail submission.
    pub fn submit(&mut self, cell: CellRef) -> Result<DraftSubmission, ProtocolError> {
        let draft = self.drafts.entry(cell).or_default();
        let title = draft.title.trim().to_string();
        if title.is_empty() {
            draft.error = Some("Title must not be empty".to_string());
            return Err(ProtocolError::EmptyDraftTitle);
        }

        let description = draft.description.trim();
        let submission = DraftSubmission {
            cell,
            title,
            description: (!description.is_empty()).then(|| description.to_string()),
            priority: draft.priority,
        };

        self.drafts.insert(cell, Draft::default());
        self.close(cell);
        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(task_id: u64, release_id: u64) -> CellRef {
        CellRef::new(task_id, release_id)
    }

    #[test]
    fn open_creates_fresh_empty_draft() {
        let mut store = DraftStore::default();
        store.open(cell(1, 1));

        let draft = store.active_draft().unwrap();
        assert_eq!(draft.title, "");
        assert_eq!(draft.description, "");
        assert_eq!(draft.priority, Priority::Mvp);
        assert!(draft.error.is_none());
    }

    #[test]
    fn opening_another_cell_preserves_existing_drafts() {
        let mut store = DraftStore::default();
        store.open(cell(1, 1));
        store.active_draft_mut().unwrap().title = "Half-typed".to_string();

        store.open(cell(2, 1));
        assert_eq!(store.active(), Some(cell(2, 1)));
        assert_eq!(store.draft(cell(1, 1)).unwrap().title, "Half-typed");
    }

    #[test]
    fn close_keeps_draft_content() {
        let mut store = DraftStore::default();
        store.open(cell(1, 1));
        store.active_draft_mut().unwrap().title = "Keep me".to_string();

        store.close(cell(1, 1));
        assert_eq!(store.active(), None);
        assert_eq!(store.draft(cell(1, 1)).unwrap().title, "Keep me");
    }

    #[test]
    fn reopening_resumes_previous_draft() {
        let mut store = DraftStore::default();
        store.open(cell(1, 1));
        store.active_draft_mut().unwrap().title = "Resume".to_string();
        store.close(cell(1, 1));

        store.open(cell(1, 1));
        assert_eq!(store.active_draft().unwrap().title, "Resume");
    }

    #[test]
    fn submit_empty_title_sets_error_and_keeps_form_open() {
        let mut store = DraftStore::default();
        store.open(cell(1, 1));

        let result = store.submit(cell(1, 1));
        assert!(matches!(result, Err(ProtocolError::EmptyDraftTitle)));
        assert_eq!(store.active(), Some(cell(1, 1)));
        assert!(store.active_draft().unwrap().error.is_some());
    }

    #[test]
    fn submit_whitespace_title_is_rejected() {
        let mut store = DraftStore::default();
        store.open(cell(1, 1));
        store.active_draft_mut().unwrap().title = "   ".to_string();

        assert!(store.submit(cell(1, 1)).is_err());
    }

    #[test]
    fn submit_success_resets_draft_and_closes_form() {
        let mut store = DraftStore::default();
        store.open(cell(1, 2));
        {
            let draft = store.active_draft_mut().unwrap();
            draft.title = "  Browse catalog  ".to_string();
            draft.description = "Paginated list".to_string();
            draft.priority = Priority::ReleaseOne;
        }

        let submission = store.submit(cell(1, 2)).unwrap();
        assert_eq!(submission.title, "Browse catalog");
        assert_eq!(submission.description.as_deref(), Some("Paginated list"));
        assert_eq!(submission.priority, Priority::ReleaseOne);

        assert_eq!(store.active(), None);
        assert_eq!(store.draft(cell(1, 2)), Some(&Draft::default()));
    }

    #[test]
    fn short_title_warns_but_submits() {
        let mut store = DraftStore::default();
        store.open(cell(1, 1));
        store.active_draft_mut().unwrap().title = "ab".to_string();

        assert!(store.active_draft().unwrap().soft_warning().is_some());
        assert!(store.submit(cell(1, 1)).is_ok());
    }

    #[test]
    fn adequate_title_has_no_warning() {
        let draft = Draft {
            title: "abc".to_string(),
            ..Draft::default()
        };
        assert!(draft.soft_warning().is_none());
    }

    #[test]
    fn empty_title_has_no_warning() {
        // Emptiness is a hard error at submit time, not a soft warning.
        assert!(Draft::default().soft_warning().is_none());
    }

    #[test]
    fn input_routes_to_focused_field() {
        let mut draft = Draft::default();
        draft.input_char('h');
        draft.input_char('i');
        assert_eq!(draft.title, "hi");

        draft.next_field();
        draft.input_char('d');
        assert_eq!(draft.description, "d");
        assert_eq!(draft.title, "hi");
    }

    #[test]
    fn delete_char_removes_from_focused_field() {
        let mut draft = Draft {
            title: "abc".to_string(),
            ..Draft::default()
        };
        draft.delete_char();
        assert_eq!(draft.title, "ab");
    }

    #[test]
    fn priority_field_input_cycles_priority() {
        let mut draft = Draft::default();
        draft.focus = DraftField::Priority;
        assert_eq!(draft.priority, Priority::Mvp);

        draft.input_char(' ');
        assert_eq!(draft.priority, Priority::ReleaseOne);
        draft.input_char(' ');
        assert_eq!(draft.priority, Priority::Later);
        draft.input_char(' ');
        assert_eq!(draft.priority, Priority::Mvp);
    }

    #[test]
    fn field_tab_order_wraps() {
        assert_eq!(DraftField::Title.next(), DraftField::Description);
        assert_eq!(DraftField::Description.next(), DraftField::Priority);
        assert_eq!(DraftField::Priority.next(), DraftField::Title);
    }
}
