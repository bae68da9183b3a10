//! Story-related types for the planning board.
//!
//! This module defines the core story types used throughout the storymap
//! application, including the story status cycle, priorities, and the
//! story structure itself.

use serde::{Deserialize, Serialize};

/// Unique identifier for a story.
///
/// Backend-assigned integer identifier.
pub type StoryId = u64;

/// Unique identifier for a task (sub-column).
pub type TaskId = u64;

/// Unique identifier for a release (row).
pub type ReleaseId = u64;

/// The workflow status of a story.
///
/// Three of the four statuses form the click-to-advance cycle
/// (`todo → in_progress → done → todo`). `Blocked` sits outside the
/// cycle and is only ever delivered by the backend.
///
/// # Examples
///
/// ```
/// use storymap_protocol::StoryStatus;
///
/// assert_eq!(StoryStatus::Todo.next_in_cycle(), StoryStatus::InProgress);
/// assert_eq!(StoryStatus::Done.next_in_cycle(), StoryStatus::Todo);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StoryStatus {
    /// Story has not been started.
    #[default]
    Todo,
    /// Story is actively being worked on.
    InProgress,
    /// Story is complete.
    Done,
    /// Story is blocked on something external. Not part of the cycle.
    Blocked,
}

/// The click-to-advance status cycle, in order.
pub const STATUS_CYCLE: [StoryStatus; 3] = [
    StoryStatus::Todo,
    StoryStatus::InProgress,
    StoryStatus::Done,
];

impl StoryStatus {
    /// Returns all statuses, cycle members first.
    ///
    /// # Examples
    ///
    /// ```
    /// use storymap_protocol::StoryStatus;
    ///
    /// let all = StoryStatus::all();
    /// assert_eq!(all.len(), 4);
    /// assert_eq!(all[3], StoryStatus::Blocked);
    /// ```
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Todo, Self::InProgress, Self::Done, Self::Blocked]
    }

    /// Returns a human-readable display name for the status.
    ///
    /// # Examples
    ///
    /// ```
    /// use storymap_protocol::StoryStatus;
    ///
    /// assert_eq!(StoryStatus::InProgress.display_name(), "In Progress");
    /// assert_eq!(StoryStatus::Blocked.display_name(), "Blocked");
    /// ```
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
            Self::Blocked => "Blocked",
        }
    }

    /// Returns this status's index within [`STATUS_CYCLE`], if it is a
    /// cycle member.
    ///
    /// # Examples
    ///
    /// ```
    /// use storymap_protocol::StoryStatus;
    ///
    /// assert_eq!(StoryStatus::Done.cycle_index(), Some(2));
    /// assert_eq!(StoryStatus::Blocked.cycle_index(), None);
    /// ```
    #[must_use]
    pub fn cycle_index(self) -> Option<usize> {
        STATUS_CYCLE.iter().position(|s| *s == self)
    }

    /// Returns the next status in the click-to-advance cycle.
    ///
    /// This function is pure and total. A status that is not a cycle
    /// member (`Blocked`) is treated as if it were at index 0, so its
    /// successor is the second cycle element.
    ///
    /// # Examples
    ///
    /// ```
    /// use storymap_protocol::StoryStatus;
    ///
    /// assert_eq!(StoryStatus::Todo.next_in_cycle(), StoryStatus::InProgress);
    /// assert_eq!(StoryStatus::InProgress.next_in_cycle(), StoryStatus::Done);
    /// assert_eq!(StoryStatus::Done.next_in_cycle(), StoryStatus::Todo);
    /// assert_eq!(StoryStatus::Blocked.next_in_cycle(), StoryStatus::InProgress);
    /// ```
    #[must_use]
    pub fn next_in_cycle(self) -> Self {
        let idx = self.cycle_index().unwrap_or(0);
        STATUS_CYCLE[(idx + 1) % STATUS_CYCLE.len()]
    }

    /// Parses a wire string leniently.
    ///
    /// Unrecognized values fall back to `Todo`, so an unknown status's
    /// cycle successor is `InProgress`, the same as any other value at
    /// cycle index 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use storymap_protocol::StoryStatus;
    ///
    /// assert_eq!(StoryStatus::from_wire("in_progress"), StoryStatus::InProgress);
    /// assert_eq!(StoryStatus::from_wire("not-a-status"), StoryStatus::Todo);
    /// ```
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value {
            "todo" => Self::Todo,
            "in_progress" => Self::InProgress,
            "done" => Self::Done,
            "blocked" => Self::Blocked,
            _ => Self::Todo,
        }
    }

    /// Returns the wire string for this status.
    #[must_use]
    pub const fn as_wire(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Done => "done",
            Self::Blocked => "blocked",
        }
    }
}

/// The delivery priority of a story.
///
/// Wire strings match the backend's labels verbatim ("MVP",
/// "Release 1", "Later").
///
/// # Examples
///
/// ```
/// use storymap_protocol::Priority;
///
/// assert_eq!(Priority::Mvp.display_name(), "MVP");
/// assert_eq!(Priority::from_wire("Release 1"), Priority::ReleaseOne);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum Priority {
    /// Must be part of the minimum viable product.
    #[serde(rename = "MVP")]
    Mvp,
    /// Scheduled for the first release after the MVP.
    #[serde(rename = "Release 1")]
    ReleaseOne,
    /// Everything else.
    #[default]
    #[serde(rename = "Later")]
    Later,
}

impl Priority {
    /// Returns all priorities in descending urgency.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Mvp, Self::ReleaseOne, Self::Later]
    }

    /// Returns the display label for this priority.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mvp => "MVP",
            Self::ReleaseOne => "Release 1",
            Self::Later => "Later",
        }
    }

    /// Parses a wire string leniently, defaulting to `Later`.
    ///
    /// The backend defaults missing priorities to "Later"; unknown
    /// labels get the same treatment.
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value {
            "MVP" => Self::Mvp,
            "Release 1" => Self::ReleaseOne,
            _ => Self::Later,
        }
    }
}

/// A story card on the planning board.
///
/// The UI holds a read-only snapshot of backend-owned data; mutations
/// go through the API client and are reflected on the next refresh.
///
/// # Examples
///
/// ```
/// use storymap_protocol::{Priority, Story, StoryStatus};
///
/// let story = Story::new(1, "Sign-up form", Some(10));
/// assert_eq!(story.status, StoryStatus::Todo);
/// assert_eq!(story.priority, Priority::Later);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// Backend-assigned identifier.
    pub id: StoryId,
    /// Short summary shown on the card.
    pub title: String,
    /// Optional longer description.
    #[serde(default)]
    pub description: Option<String>,
    /// Current workflow status.
    #[serde(default)]
    pub status: StoryStatus,
    /// Delivery priority.
    #[serde(default)]
    pub priority: Priority,
    /// Ordered acceptance criteria.
    #[serde(default)]
    pub acceptance_criteria: Vec<String>,
    /// The release row this story is scheduled into, if any.
    #[serde(default)]
    pub release_id: Option<ReleaseId>,
    /// Position within its cell, assigned by the backend.
    #[serde(default)]
    pub position: u32,
}

impl Story {
    /// Creates a new story snapshot with default status and priority.
    ///
    /// # Examples
    ///
    /// ```
    /// use storymap_protocol::Story;
    ///
    /// let story = Story::new(7, "Checkout flow", None);
    /// assert_eq!(story.id, 7);
    /// assert!(story.release_id.is_none());
    /// ```
    #[must_use]
    pub fn new(id: StoryId, title: impl Into<String>, release_id: Option<ReleaseId>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            status: StoryStatus::default(),
            priority: Priority::default(),
            acceptance_criteria: Vec::new(),
            release_id,
            position: 0,
        }
    }

    /// Returns `true` if this story counts toward release completion.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.status == StoryStatus::Done
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    impl Arbitrary for StoryStatus {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            prop_oneof![
                Just(StoryStatus::Todo),
                Just(StoryStatus::InProgress),
                Just(StoryStatus::Done),
                Just(StoryStatus::Blocked),
            ]
            .boxed()
        }
    }

    impl Arbitrary for Priority {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            prop_oneof![
                Just(Priority::Mvp),
                Just(Priority::ReleaseOne),
                Just(Priority::Later),
            ]
            .boxed()
        }
    }

    proptest! {
        /// The cycle successor is always a cycle member, never Blocked.
        #[test]
        fn next_in_cycle_is_always_a_cycle_member(status in any::<StoryStatus>()) {
            let next = status.next_in_cycle();
            prop_assert!(STATUS_CYCLE.contains(&next));
        }

        /// Lenient parsing never fails, whatever the input.
        #[test]
        fn from_wire_is_total(value in "\\PC{0,30}") {
            let _ = StoryStatus::from_wire(&value);
            let _ = Priority::from_wire(&value);
        }

        /// Status serialization roundtrips through JSON.
        #[test]
        fn status_roundtrip(status in any::<StoryStatus>()) {
            let json = serde_json::to_string(&status).expect("serialize");
            let parsed: StoryStatus = serde_json::from_str(&json).expect("deserialize");
            prop_assert_eq!(status, parsed);
        }

        /// Priority serialization roundtrips through JSON.
        #[test]
        fn priority_roundtrip(priority in any::<Priority>()) {
            let json = serde_json::to_string(&priority).expect("serialize");
            let parsed: Priority = serde_json::from_str(&json).expect("deserialize");
            prop_assert_eq!(priority, parsed);
        }
    }
}
