//! Application state management.
//!
//! This module defines the core state for the board view: the project
//! snapshot, cursor position over the grid, the per-cell and per-card
//! stores, the wireframe job, and transient toasts.

use storymap_protocol::{
    CellRef, ColumnWidths, FilterState, Project, Release, Story, Task, WireframeJob,
    WireframeStatus,
};

use crate::drafts::DraftStore;
use crate::interaction::{CardKey, DragState, HoverState, InteractionStore};
use crate::theme::Severity;

/// The current focus area in the UI.
///
/// Determines which UI component receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Focus is on the board grid.
    #[default]
    Board,
    /// Focus is on an open add-card form.
    DraftForm,
    /// Focus is on the filter panel.
    FilterPanel,
    /// Focus is on the wireframe panel.
    Wireframe,
}

/// A transient user notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Message severity, used for styling.
    pub severity: Severity,
    /// The message text.
    pub message: String,
}

/// Maximum number of toasts kept on screen at once.
const MAX_TOASTS: usize = 3;

/// The application state.
///
/// Contains all mutable state for the board view. The project snapshot
/// is owned by the backend; this struct holds a read-only copy that is
/// replaced wholesale after each refresh.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The project being displayed.
    pub project: Project,
    /// Current focus area.
    pub focus: Focus,
    /// Index of the selected task column (into the flattened task list).
    pub selected_task: usize,
    /// Index of the selected release row (into the visible releases).
    pub selected_release: usize,
    /// Index of the selected card within the current cell, if any.
    pub selected_story: Option<usize>,
    /// Active status/release filters.
    pub filter: FilterState,
    /// Per-activity column width overrides.
    pub column_widths: ColumnWidths,
    /// Per-cell draft forms.
    pub drafts: DraftStore,
    /// Per-card interaction flags.
    pub interactions: InteractionStore,
    /// The delayed hover preview.
    pub hover: HoverState,
    /// The card currently in hand, if a drag is in progress.
    pub drag: Option<DragState>,
    /// The wireframe generation job.
    pub wireframe: WireframeJob,
    /// Whether the wireframe panel is visible.
    pub wireframe_visible: bool,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// Pending user notifications, oldest first.
    pub toasts: Vec<Toast>,
}

impl AppState {
    /// Creates a new application state for a project snapshot.
    ///
    /// The wireframe job starts from the status persisted on the
    /// project, so a job that finished in a previous session shows as
    /// resolved rather than idle.
    #[must_use]
    pub fn new(project: Project) -> Self {
        let mut wireframe = WireframeJob::default();
        wireframe.reset_to(project.wireframe_status, project.wireframe_error.clone());

        Self {
            project,
            focus: Focus::default(),
            selected_task: 0,
            selected_release: 0,
            selected_story: None,
            filter: FilterState::default(),
            column_widths: ColumnWidths::default(),
            drafts: DraftStore::default(),
            interactions: InteractionStore::default(),
            hover: HoverState::default(),
            drag: None,
            wireframe,
            wireframe_visible: false,
            help_visible: false,
            toasts: Vec::new(),
        }
    }

    /// Replaces the project snapshot after a refresh.
    ///
    /// Selections are clamped to the new shape; drafts and filters are
    /// preserved since they are keyed by stable ids. The wireframe job
    /// resets to the baseline the new snapshot carries.
    pub fn replace_project(&mut self, project: Project) {
        self.wireframe
            .reset_to(project.wireframe_status, project.wireframe_error.clone());
        self.project = project;
        self.clamp_selection();
    }

    /// Returns the visible task columns, in board order.
    #[must_use]
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.project.tasks().collect()
    }

    /// Returns the visible release rows, honoring the release filter.
    #[must_use]
    pub fn visible_releases(&self) -> Vec<&Release> {
        self.project
            .releases
            .iter()
            .filter(|r| self.filter.release_visible(r.id))
            .collect()
    }

    /// Returns the cell under the cursor, if the board is non-empty.
    #[must_use]
    pub fn current_cell(&self) -> Option<CellRef> {
        let task = *self.visible_tasks().get(self.selected_task)?;
        let release = *self.visible_releases().get(self.selected_release)?;
        Some(CellRef::new(task.id, release.id))
    }

    /// Returns the stories of the current cell, honoring the status
    /// filter, in their task-order positions.
    #[must_use]
    pub fn current_stories(&self) -> Vec<&Story> {
        let Some(cell) = self.current_cell() else {
            return Vec::new();
        };
        self.project
            .cell_stories(cell)
            .into_iter()
            .filter(|s| self.filter.story_visible(s))
            .collect()
    }

    /// Returns the selected story, if any.
    #[must_use]
    pub fn selected_story_ref(&self) -> Option<&Story> {
        let index = self.selected_story?;
        self.current_stories().get(index).copied()
    }

    /// Returns the card key for the selected story, if any.
    #[must_use]
    pub fn selected_card(&self) -> Option<CardKey> {
        let cell = self.current_cell()?;
        Some(CardKey::new(self.selected_story_ref()?.id, cell))
    }

    /// Moves the column cursor left, wrapping around.
    pub fn navigate_left(&mut self) {
        let count = self.visible_tasks().len();
        if count == 0 {
            return;
        }
        self.selected_task = if self.selected_task > 0 {
            self.selected_task - 1
        } else {
            count - 1
        };
        self.clamp_story_selection();
    }

    /// Moves the column cursor right, wrapping around.
    pub fn navigate_right(&mut self) {
        let count = self.visible_tasks().len();
        if count == 0 {
            return;
        }
        self.selected_task = (self.selected_task + 1) % count;
        self.clamp_story_selection();
    }

    /// Moves the row cursor to the previous release, wrapping around.
    pub fn prev_release(&mut self) {
        let count = self.visible_releases().len();
        if count == 0 {
            return;
        }
        self.selected_release = if self.selected_release > 0 {
            self.selected_release - 1
        } else {
            count - 1
        };
        self.clamp_story_selection();
    }

    /// Moves the row cursor to the next release, wrapping around.
    pub fn next_release(&mut self) {
        let count = self.visible_releases().len();
        if count == 0 {
            return;
        }
        self.selected_release = (self.selected_release + 1) % count;
        self.clamp_story_selection();
    }

    /// Moves the card selection up within the current cell.
    pub fn navigate_up(&mut self) {
        let count = self.current_stories().len();
        if count == 0 {
            self.selected_story = None;
            return;
        }
        self.selected_story = Some(match self.selected_story {
            Some(idx) if idx > 0 => idx - 1,
            Some(_) => count - 1,
            None => 0,
        });
    }

    /// Moves the card selection down within the current cell.
    pub fn navigate_down(&mut self) {
        let count = self.current_stories().len();
        if count == 0 {
            self.selected_story = None;
            return;
        }
        self.selected_story = Some(match self.selected_story {
            Some(idx) if idx + 1 < count => idx + 1,
            Some(_) => 0,
            None => 0,
        });
    }

    /// Clears the current card selection.
    pub fn clear_selection(&mut self) {
        self.selected_story = None;
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        if self.help_visible {
            self.help_visible = false;
            true
        } else {
            false
        }
    }

    /// Appends a toast, dropping the oldest beyond the cap.
    pub fn push_toast(&mut self, severity: Severity, message: impl Into<String>) {
        self.toasts.push(Toast {
            severity,
            message: message.into(),
        });
        if self.toasts.len() > MAX_TOASTS {
            self.toasts.remove(0);
        }
    }

    /// Returns whether the wireframe job is currently pending.
    #[must_use]
    pub fn wireframe_pending(&self) -> bool {
        self.wireframe.status == WireframeStatus::Pending
    }

    /// Clamps all cursors to the current board shape and filters.
    pub fn clamp_selection(&mut self) {
        let task_count = self.visible_tasks().len();
        if task_count == 0 {
            self.selected_task = 0;
        } else if self.selected_task >= task_count {
            self.selected_task = task_count - 1;
        }

        let release_count = self.visible_releases().len();
        if release_count == 0 {
            self.selected_release = 0;
        } else if self.selected_release >= release_count {
            self.selected_release = release_count - 1;
        }

        self.clamp_story_selection();
    }

    /// Ensures the card selection is valid for the current cell.
    fn clamp_story_selection(&mut self) {
        let count = self.current_stories().len();
        if count == 0 {
            self.selected_story = None;
        } else if let Some(idx) = self.selected_story
            && idx >= count
        {
            self.selected_story = Some(count - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storymap_protocol::{StoryStatus, dummy_project};

    #[test]
    fn new_state_has_correct_defaults() {
        let state = AppState::new(dummy_project());

        assert_eq!(state.focus, Focus::Board);
        assert_eq!(state.selected_task, 0);
        assert_eq!(state.selected_release, 0);
        assert_eq!(state.selected_story, None);
        assert!(!state.help_visible);
        assert!(state.toasts.is_empty());
        assert!(state.drag.is_none());
    }

    #[test]
    fn navigate_left_wraps_around() {
        let mut state = AppState::new(dummy_project());
        let last = state.visible_tasks().len() - 1;

        state.navigate_left();
        assert_eq!(state.selected_task, last);

        state.navigate_left();
        assert_eq!(state.selected_task, last - 1);
    }

    #[test]
    fn navigate_right_wraps_around() {
        let mut state = AppState::new(dummy_project());
        let count = state.visible_tasks().len();

        state.selected_task = count - 1;
        state.navigate_right();
        assert_eq!(state.selected_task, 0);
    }

    #[test]
    fn release_cursor_wraps_both_ways() {
        let mut state = AppState::new(dummy_project());
        let last = state.visible_releases().len() - 1;

        state.prev_release();
        assert_eq!(state.selected_release, last);

        state.next_release();
        assert_eq!(state.selected_release, 0);
    }

    #[test]
    fn navigate_up_down_in_empty_cell() {
        let mut state = AppState::new(dummy_project());
        // Task "Browse catalog" has no stories in release 3 ("Later").
        state.selected_release = 2;

        state.navigate_down();
        assert_eq!(state.selected_story, None);
        state.navigate_up();
        assert_eq!(state.selected_story, None);
    }

    #[test]
    fn navigate_down_wraps_within_cell() {
        let mut state = AppState::new(dummy_project());
        let count = state.current_stories().len();
        assert!(count > 1, "test expects a populated first cell");

        state.navigate_down();
        assert_eq!(state.selected_story, Some(0));

        for _ in 1..count {
            state.navigate_down();
        }
        assert_eq!(state.selected_story, Some(count - 1));

        state.navigate_down();
        assert_eq!(state.selected_story, Some(0));
    }

    #[test]
    fn changing_column_clamps_story_selection() {
        let mut state = AppState::new(dummy_project());
        let big = state.current_stories().len();
        state.selected_story = Some(big.saturating_sub(1));

        // Moving into a cell with fewer (or zero) cards must not leave a
        // dangling index.
        state.navigate_right();
        if let Some(idx) = state.selected_story {
            assert!(idx < state.current_stories().len());
        }
    }

    #[test]
    fn status_filter_narrows_current_stories() {
        let mut state = AppState::new(dummy_project());
        let unfiltered = state.current_stories().len();

        state.filter.toggle_status(StoryStatus::Done);
        let filtered = state.current_stories();
        assert!(filtered.len() < unfiltered);
        assert!(filtered.iter().all(|s| s.status == StoryStatus::Done));
    }

    #[test]
    fn release_filter_hides_rows() {
        let mut state = AppState::new(dummy_project());
        let all = state.visible_releases().len();

        let kept = state.project.releases[0].id;
        state.filter.toggle_release(kept);
        state.clamp_selection();

        let visible = state.visible_releases();
        assert!(visible.len() < all);
        assert!(visible.iter().all(|r| r.id == kept));
    }

    #[test]
    fn replace_project_clamps_cursors() {
        let mut state = AppState::new(dummy_project());
        state.selected_task = 99;
        state.selected_release = 99;
        state.selected_story = Some(99);

        state.replace_project(dummy_project());
        assert!(state.selected_task < state.visible_tasks().len());
        assert!(state.selected_release < state.visible_releases().len());
    }

    #[test]
    fn replace_project_resets_wireframe_to_baseline() {
        let mut state = AppState::new(dummy_project());
        state.wireframe.begin(storymap_protocol::JobId::nil());
        assert!(state.wireframe_pending());

        let project = dummy_project();
        state.replace_project(project);
        assert!(!state.wireframe_pending());
    }

    #[test]
    fn selected_card_matches_cursor() {
        let mut state = AppState::new(dummy_project());
        state.navigate_down();

        let card = state.selected_card().unwrap();
        let story = state.selected_story_ref().unwrap();
        assert_eq!(card.story_id, story.id);
        assert_eq!(card.cell(), state.current_cell().unwrap());
    }

    #[test]
    fn toasts_capped_at_three() {
        let mut state = AppState::new(dummy_project());
        for i in 0..5 {
            state.push_toast(Severity::Info, format!("toast {i}"));
        }
        assert_eq!(state.toasts.len(), 3);
        assert_eq!(state.toasts[0].message, "toast 2");
    }

    #[test]
    fn dismiss_help_reports_whether_it_was_visible() {
        let mut state = AppState::new(dummy_project());
        assert!(!state.dismiss_help());

        state.toggle_help();
        assert!(state.dismiss_help());
        assert!(!state.help_visible);
    }
}
