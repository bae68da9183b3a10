//! Status and release filtering.
//!
//! This module maintains the selected filter sets for the board. An
//! empty set means "no filter applied": every story and every release
//! row is visible. This is deliberate and load-bearing; reading an
//! empty set as "nothing matches" would blank the whole board.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::story::{ReleaseId, Story, StoryStatus};

/// The active status and release filters.
///
/// # Examples
///
/// ```
/// use storymap_protocol::{FilterState, StoryStatus};
///
/// let mut filters = FilterState::default();
/// assert!(filters.is_empty());
///
/// filters.toggle_status(StoryStatus::Done);
/// assert!(filters.statuses.contains(&StoryStatus::Done));
///
/// filters.toggle_status(StoryStatus::Done);
/// assert!(filters.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    /// Statuses to show. Empty means all.
    pub statuses: BTreeSet<StoryStatus>,
    /// Release rows to show. Empty means all.
    pub releases: BTreeSet<ReleaseId>,
}

impl FilterState {
    /// Returns `true` when no filter is applied at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty() && self.releases.is_empty()
    }

    /// Adds the status to the filter if absent, removes it otherwise.
    pub fn toggle_status(&mut self, status: StoryStatus) {
        if !self.statuses.remove(&status) {
            self.statuses.insert(status);
        }
    }

    /// Adds the release to the filter if absent, removes it otherwise.
    pub fn toggle_release(&mut self, release_id: ReleaseId) {
        if !self.releases.remove(&release_id) {
            self.releases.insert(release_id);
        }
    }

    /// Clears both filter sets, showing everything again.
    pub fn reset(&mut self) {
        self.statuses.clear();
        self.releases.clear();
    }

    /// Returns `true` if a story with this status passes the status
    /// filter.
    #[must_use]
    pub fn status_visible(&self, status: StoryStatus) -> bool {
        self.statuses.is_empty() || self.statuses.contains(&status)
    }

    /// Returns `true` if this release row passes the release filter.
    #[must_use]
    pub fn release_visible(&self, release_id: ReleaseId) -> bool {
        self.releases.is_empty() || self.releases.contains(&release_id)
    }

    /// Returns `true` if the story passes both active filters.
    #[must_use]
    pub fn story_visible(&self, story: &Story) -> bool {
        let release_ok = match story.release_id {
            Some(id) => self.release_visible(id),
            // Unscheduled stories are only hidden by an explicit
            // release filter.
            None => self.releases.is_empty(),
        };
        release_ok && self.status_visible(story.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::Story;

    #[test]
    fn empty_filters_show_everything() {
        let filters = FilterState::default();
        for status in StoryStatus::all() {
            assert!(filters.status_visible(status));
        }
        assert!(filters.release_visible(1));
        assert!(filters.story_visible(&Story::new(1, "Any", Some(3))));
    }

    #[test]
    fn toggle_twice_restores_original_contents() {
        let mut filters = FilterState::default();
        filters.toggle_status(StoryStatus::Blocked);
        let snapshot = filters.clone();

        filters.toggle_status(StoryStatus::Done);
        filters.toggle_status(StoryStatus::Done);
        assert_eq!(filters, snapshot);

        filters.toggle_release(5);
        filters.toggle_release(5);
        assert_eq!(filters, snapshot);
    }

    #[test]
    fn toggle_never_duplicates() {
        let mut filters = FilterState::default();
        filters.toggle_status(StoryStatus::Todo);
        filters.toggle_status(StoryStatus::Todo);
        filters.toggle_status(StoryStatus::Todo);
        assert_eq!(filters.statuses.len(), 1);
    }

    #[test]
    fn active_status_filter_hides_other_statuses() {
        let mut filters = FilterState::default();
        filters.toggle_status(StoryStatus::Done);

        assert!(filters.status_visible(StoryStatus::Done));
        assert!(!filters.status_visible(StoryStatus::Todo));
    }

    #[test]
    fn active_release_filter_hides_other_rows() {
        let mut filters = FilterState::default();
        filters.toggle_release(1);

        assert!(filters.release_visible(1));
        assert!(!filters.release_visible(2));

        let scheduled = Story::new(1, "In release 2", Some(2));
        assert!(!filters.story_visible(&scheduled));

        let unscheduled = Story::new(2, "No release", None);
        assert!(!filters.story_visible(&unscheduled));
    }

    #[test]
    fn reset_clears_both_sets() {
        let mut filters = FilterState::default();
        filters.toggle_status(StoryStatus::Todo);
        filters.toggle_release(9);
        assert!(!filters.is_empty());

        filters.reset();
        assert!(filters.is_empty());
        assert!(filters.status_visible(StoryStatus::Blocked));
    }
}
