//! Board grid types and structures.
//!
//! This module defines the story-map grid: activities compose the
//! horizontal axis, each owning an ordered sequence of tasks
//! (sub-columns); releases compose the vertical axis. A cell is the
//! `(task, release)` intersection holding zero or more story cards.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::story::{ReleaseId, Story, StoryId, TaskId};
use crate::wireframe::WireframeStatus;

/// Unique identifier for an activity.
pub type ActivityId = u64;

/// Unique identifier for a project.
pub type ProjectId = u64;

/// Addresses one cell of the grid as a `(task, release)` pair.
///
/// # Examples
///
/// ```
/// use storymap_protocol::CellRef;
///
/// let cell = CellRef::new(4, 2);
/// assert_eq!(cell.task_id, 4);
/// assert_eq!(cell.release_id, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRef {
    /// The task column.
    pub task_id: TaskId,
    /// The release row.
    pub release_id: ReleaseId,
}

impl CellRef {
    /// Creates a new cell reference.
    #[must_use]
    pub const fn new(task_id: TaskId, release_id: ReleaseId) -> Self {
        Self {
            task_id,
            release_id,
        }
    }
}

/// A task: a sub-column under an activity, owning a set of stories.
///
/// A task's stories are partitioned across releases by each story's
/// `release_id`.
///
/// # Examples
///
/// ```
/// use storymap_protocol::{Story, Task};
///
/// let mut task = Task::new(1, "Browse catalog");
/// task.stories.push(Story::new(10, "List products", Some(1)));
/// task.stories.push(Story::new(11, "Search", Some(2)));
///
/// assert_eq!(task.stories_in_release(1).len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Backend-assigned identifier.
    pub id: TaskId,
    /// Column heading.
    pub title: String,
    /// Position among the activity's tasks.
    #[serde(default)]
    pub position: u32,
    /// Stories owned by this task, in backend order.
    #[serde(default)]
    pub stories: Vec<Story>,
}

impl Task {
    /// Creates a new empty task.
    #[must_use]
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            position: 0,
            stories: Vec::new(),
        }
    }

    /// Returns the stories belonging to the given release, preserving
    /// the original relative order of `stories`.
    ///
    /// # Examples
    ///
    /// ```
    /// use storymap_protocol::{Story, Task};
    ///
    /// let mut task = Task::new(1, "Checkout");
    /// task.stories.push(Story::new(1, "Cart", Some(5)));
    /// task.stories.push(Story::new(2, "Pay", Some(6)));
    /// task.stories.push(Story::new(3, "Receipt", Some(5)));
    ///
    /// let in_five: Vec<_> = task.stories_in_release(5).iter().map(|s| s.id).collect();
    /// assert_eq!(in_five, vec![1, 3]);
    /// ```
    #[must_use]
    pub fn stories_in_release(&self, release_id: ReleaseId) -> Vec<&Story> {
        self.stories
            .iter()
            .filter(|s| s.release_id == Some(release_id))
            .collect()
    }
}

/// An activity: top-level horizontal grouping of tasks (epic-like).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Backend-assigned identifier.
    pub id: ActivityId,
    /// Activity heading.
    pub title: String,
    /// Position among the project's activities.
    #[serde(default)]
    pub position: u32,
    /// Tasks nested under this activity, in backend order.
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Activity {
    /// Creates a new empty activity.
    #[must_use]
    pub fn new(id: ActivityId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            position: 0,
            tasks: Vec::new(),
        }
    }
}

/// A release: one row of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Backend-assigned identifier.
    pub id: ReleaseId,
    /// Row heading.
    pub title: String,
    /// Position among the project's releases.
    #[serde(default)]
    pub position: u32,
}

impl Release {
    /// Creates a new release.
    #[must_use]
    pub fn new(id: ReleaseId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            position: 0,
        }
    }
}

/// Completion progress for one release row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseProgress {
    /// Stories scheduled into this release, across all tasks.
    pub total: usize,
    /// Stories with status `done`.
    pub done: usize,
    /// Rounded completion percentage.
    pub percent: u8,
}

/// The full project snapshot fetched from the backend.
///
/// The UI treats this as read-only; mutations go through the API
/// client and are reflected by re-fetching.
///
/// # Examples
///
/// ```
/// use storymap_protocol::Project;
///
/// let project = Project::new(1, "Web shop");
/// assert!(project.activities.is_empty());
/// assert!(project.release_progress(1).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Backend-assigned identifier.
    pub id: ProjectId,
    /// Project name.
    pub name: String,
    /// Activities composing the horizontal axis.
    #[serde(default)]
    pub activities: Vec<Activity>,
    /// Releases composing the vertical axis.
    #[serde(default)]
    pub releases: Vec<Release>,
    /// The generated wireframe markdown, once a job has succeeded.
    #[serde(default)]
    pub wireframe_markdown: Option<String>,
    /// When the wireframe was last generated.
    #[serde(default)]
    pub wireframe_generated_at: Option<DateTime<Utc>>,
    /// Persisted wireframe job status, if any job has run.
    #[serde(default)]
    pub wireframe_status: Option<WireframeStatus>,
    /// Persisted wireframe job error, if the last job failed.
    #[serde(default)]
    pub wireframe_error: Option<String>,
}

impl Project {
    /// Creates a new empty project snapshot.
    #[must_use]
    pub fn new(id: ProjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            activities: Vec::new(),
            releases: Vec::new(),
            wireframe_markdown: None,
            wireframe_generated_at: None,
            wireframe_status: None,
            wireframe_error: None,
        }
    }

    /// Iterates over all tasks across all activities, in board order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.activities.iter().flat_map(|a| a.tasks.iter())
    }

    /// Returns the task with the given id, if present.
    #[must_use]
    pub fn find_task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks().find(|t| t.id == task_id)
    }

    /// Returns the story with the given id, if present, along with the
    /// task that owns it.
    #[must_use]
    pub fn find_story(&self, story_id: StoryId) -> Option<(&Task, &Story)> {
        self.tasks()
            .find_map(|t| t.stories.iter().find(|s| s.id == story_id).map(|s| (t, s)))
    }

    /// Returns the stories in the given cell, preserving task order.
    ///
    /// An unknown task id yields an empty list.
    #[must_use]
    pub fn cell_stories(&self, cell: CellRef) -> Vec<&Story> {
        self.find_task(cell.task_id)
            .map(|t| t.stories_in_release(cell.release_id))
            .unwrap_or_default()
    }

    /// Computes completion progress for a release row.
    ///
    /// Returns `None` when the release holds no stories at all, so the
    /// caller omits the indicator entirely rather than showing 0%.
    ///
    /// # Examples
    ///
    /// ```
    /// use storymap_protocol::{Project, Release, Story, StoryStatus, Task};
    ///
    /// let mut project = Project::new(1, "Shop");
    /// project.releases.push(Release::new(1, "MVP"));
    ///
    /// let mut activity = storymap_protocol::Activity::new(1, "Buy");
    /// let mut task = Task::new(1, "Checkout");
    /// let mut done = Story::new(1, "Cart", Some(1));
    /// done.status = StoryStatus::Done;
    /// task.stories.push(done);
    /// task.stories.push(Story::new(2, "Pay", Some(1)));
    /// activity.tasks.push(task);
    /// project.activities.push(activity);
    ///
    /// let progress = project.release_progress(1).unwrap();
    /// assert_eq!((progress.total, progress.done, progress.percent), (2, 1, 50));
    /// ```
    #[must_use]
    pub fn release_progress(&self, release_id: ReleaseId) -> Option<ReleaseProgress> {
        let mut total = 0usize;
        let mut done = 0usize;

        for task in self.tasks() {
            for story in task.stories_in_release(release_id) {
                total += 1;
                if story.is_done() {
                    done += 1;
                }
            }
        }

        if total == 0 {
            return None;
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
        let percent = if done == 0 {
            0
        } else {
            ((100.0 * done as f64 / total as f64).round()) as u8
        };

        Some(ReleaseProgress {
            total,
            done,
            percent,
        })
    }

    /// Returns the total number of stories across the whole board.
    #[must_use]
    pub fn total_stories(&self) -> usize {
        self.tasks().map(|t| t.stories.len()).sum()
    }
}

/// Optional per-activity column width overrides.
pub type ColumnWidths = HashMap<ActivityId, u16>;

/// Computes the rendered width of an activity's column group.
///
/// The group spans one column per task plus a trailing spacer column,
/// unless an explicit override is supplied for the activity.
///
/// # Examples
///
/// ```
/// use storymap_protocol::{activity_span, ColumnWidths};
///
/// let overrides = ColumnWidths::new();
/// assert_eq!(activity_span(1, 3, 24, &overrides), 96); // (3 + 1) * 24
///
/// let mut overrides = ColumnWidths::new();
/// overrides.insert(1, 50);
/// assert_eq!(activity_span(1, 3, 24, &overrides), 50);
/// ```
#[must_use]
pub fn activity_span(
    activity_id: ActivityId,
    task_count: u16,
    column_width: u16,
    overrides: &ColumnWidths,
) -> u16 {
    if let Some(width) = overrides.get(&activity_id) {
        return *width;
    }
    (task_count + 1).saturating_mul(column_width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::StoryStatus;

    fn story_in(id: StoryId, release: ReleaseId, status: StoryStatus) -> Story {
        let mut story = Story::new(id, format!("Story {id}"), Some(release));
        story.status = status;
        story
    }

    fn sample_project() -> Project {
        let mut project = Project::new(1, "Sample");
        project.releases.push(Release::new(1, "MVP"));
        project.releases.push(Release::new(2, "Release 1"));

        let mut activity = Activity::new(1, "Shopping");
        let mut browse = Task::new(10, "Browse");
        browse.stories.push(story_in(100, 1, StoryStatus::Done));
        browse.stories.push(story_in(101, 2, StoryStatus::Todo));
        browse.stories.push(story_in(102, 1, StoryStatus::Todo));

        let mut checkout = Task::new(11, "Checkout");
        checkout.stories.push(story_in(103, 1, StoryStatus::Done));

        activity.tasks.push(browse);
        activity.tasks.push(checkout);
        project.activities.push(activity);
        project
    }

    #[test]
    fn cell_stories_filters_by_release_and_preserves_order() {
        let project = sample_project();

        let ids: Vec<_> = project
            .cell_stories(CellRef::new(10, 1))
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![100, 102]);

        let ids: Vec<_> = project
            .cell_stories(CellRef::new(10, 2))
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![101]);
    }

    #[test]
    fn story_appears_only_in_its_release_row() {
        let project = sample_project();

        for release in &project.releases {
            for story in project.cell_stories(CellRef::new(10, release.id)) {
                assert_eq!(story.release_id, Some(release.id));
            }
        }
    }

    #[test]
    fn cell_stories_unknown_task_is_empty() {
        let project = sample_project();
        assert!(project.cell_stories(CellRef::new(99, 1)).is_empty());
    }

    #[test]
    fn release_progress_counts_done_across_tasks() {
        let project = sample_project();

        // Release 1: stories 100 (done), 102 (todo), 103 (done).
        let progress = project.release_progress(1).expect("has stories");
        assert_eq!(progress.total, 3);
        assert_eq!(progress.done, 2);
        assert_eq!(progress.percent, 67);
    }

    #[test]
    fn release_progress_half_done_is_fifty_percent() {
        let mut project = Project::new(1, "P");
        project.releases.push(Release::new(1, "R"));
        let mut activity = Activity::new(1, "A");
        let mut task = Task::new(1, "T");
        task.stories.push(story_in(1, 1, StoryStatus::Done));
        task.stories.push(story_in(2, 1, StoryStatus::Done));
        task.stories.push(story_in(3, 1, StoryStatus::Todo));
        task.stories.push(story_in(4, 1, StoryStatus::InProgress));
        activity.tasks.push(task);
        project.activities.push(activity);

        let progress = project.release_progress(1).expect("has stories");
        assert_eq!(progress.total, 4);
        assert_eq!(progress.done, 2);
        assert_eq!(progress.percent, 50);
    }

    #[test]
    fn release_progress_empty_release_is_omitted() {
        let project = sample_project();
        assert!(project.release_progress(999).is_none());

        let empty = Project::new(2, "Empty");
        assert!(empty.release_progress(1).is_none());
    }

    #[test]
    fn find_story_returns_owning_task() {
        let project = sample_project();
        let (task, story) = project.find_story(103).expect("story exists");
        assert_eq!(task.id, 11);
        assert_eq!(story.id, 103);

        assert!(project.find_story(999).is_none());
    }

    #[test]
    fn activity_span_reserves_spacer_column() {
        let overrides = ColumnWidths::new();
        assert_eq!(activity_span(1, 2, 20, &overrides), 60);
        assert_eq!(activity_span(1, 0, 20, &overrides), 20);
    }

    #[test]
    fn activity_span_override_wins() {
        let mut overrides = ColumnWidths::new();
        overrides.insert(7, 42);
        assert_eq!(activity_span(7, 5, 20, &overrides), 42);
        assert_eq!(activity_span(8, 5, 20, &overrides), 120);
    }

    #[test]
    fn project_deserializes_backend_shape() {
        let json = r##"{
            "id": 1,
            "name": "Shop",
            "activities": [
                {"id": 1, "title": "Buy", "position": 0, "tasks": [
                    {"id": 2, "title": "Cart", "position": 0, "stories": [
                        {"id": 3, "title": "Add item", "status": "in_progress",
                         "priority": "MVP", "release_id": 4, "position": 0}
                    ]}
                ]}
            ],
            "releases": [{"id": 4, "title": "MVP", "position": 0}],
            "wireframe_status": "success",
            "wireframe_markdown": "# Screens"
        }"##;

        let project: Project = serde_json::from_str(json).expect("deserialize");
        assert_eq!(project.activities.len(), 1);
        assert_eq!(project.cell_stories(CellRef::new(2, 4)).len(), 1);
        assert_eq!(project.wireframe_status, Some(WireframeStatus::Success));
        assert_eq!(project.total_stories(), 1);
    }
}
