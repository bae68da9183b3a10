//! Dummy data generation for testing and demonstration.
//!
//! This module provides a sample story map used when no backend is
//! configured, and by tests and widget demos.
//!
//! # Examples
//!
//! ```
//! use storymap_protocol::dummy::dummy_project;
//!
//! let project = dummy_project();
//! assert_eq!(project.releases.len(), 3);
//! assert!(project.total_stories() > 0);
//! ```

use crate::board::{Activity, Project, Release, Task};
use crate::story::{Priority, ReleaseId, Story, StoryId, StoryStatus};

/// A builder for creating stories with specific statuses and priorities.
///
/// Internal helper to reduce boilerplate when seeding the sample board.
struct StoryBuilder {
    id: StoryId,
    title: String,
    description: Option<String>,
    status: StoryStatus,
    priority: Priority,
    criteria: Vec<String>,
    release_id: Option<ReleaseId>,
}

impl StoryBuilder {
    fn new(id: StoryId, title: impl Into<String>, release_id: ReleaseId) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            status: StoryStatus::Todo,
            priority: Priority::Later,
            criteria: Vec::new(),
            release_id: Some(release_id),
        }
    }

    fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn status(mut self, status: StoryStatus) -> Self {
        self.status = status;
        self
    }

    fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    fn criteria(mut self, criteria: &[&str]) -> Self {
        self.criteria = criteria.iter().map(|c| (*c).to_string()).collect();
        self
    }

    fn build(self) -> Story {
        let mut story = Story::new(self.id, self.title, self.release_id);
        story.description = self.description;
        story.status = self.status;
        story.priority = self.priority;
        story.acceptance_criteria = self.criteria;
        story
    }
}

/// Generates a sample story map for an online bookshop.
///
/// The map has two activities ("Discover books", "Buy books") with two
/// tasks each, three releases, and stories spread across statuses so
/// progress badges, filters, and the status cycle all have something to
/// show.
///
/// # Examples
///
/// ```
/// use storymap_protocol::dummy::dummy_project;
/// use storymap_protocol::CellRef;
///
/// let project = dummy_project();
/// assert!(!project.cell_stories(CellRef::new(11, 1)).is_empty());
/// ```
#[must_use]
pub fn dummy_project() -> Project {
    let mut project = Project::new(1, "Bookshop");

    project.releases.push(Release::new(1, "MVP"));
    project.releases.push(Release::new(2, "Release 1"));
    project.releases.push(Release::new(3, "Later"));

    let mut discover = Activity::new(1, "Discover books");

    let mut browse = Task::new(11, "Browse catalog");
    browse.stories.push(
        StoryBuilder::new(101, "List books by genre", 1)
            .describe("Visitors can browse the catalog grouped by genre.")
            .status(StoryStatus::Done)
            .priority(Priority::Mvp)
            .criteria(&["genres are sorted alphabetically", "covers load lazily"])
            .build(),
    );
    browse.stories.push(
        StoryBuilder::new(102, "Full-text search", 1)
            .describe("Search across titles, authors and descriptions.")
            .status(StoryStatus::InProgress)
            .priority(Priority::Mvp)
            .criteria(&["typo-tolerant matching", "results ranked by relevance"])
            .build(),
    );
    browse.stories.push(
        StoryBuilder::new(103, "Personalized shelf", 2)
            .describe("Recommendations based on purchase history.")
            .priority(Priority::ReleaseOne)
            .build(),
    );

    let mut details = Task::new(12, "View details");
    details.stories.push(
        StoryBuilder::new(104, "Book detail page", 1)
            .status(StoryStatus::Done)
            .priority(Priority::Mvp)
            .criteria(&["shows synopsis", "shows reviews", "shows stock"])
            .build(),
    );
    details.stories.push(
        StoryBuilder::new(105, "Reader reviews", 3)
            .describe("Verified buyers can leave a star rating and text.")
            .build(),
    );

    discover.tasks.push(browse);
    discover.tasks.push(details);

    let mut buy = Activity::new(2, "Buy books");

    let mut cart = Task::new(21, "Manage cart");
    cart.stories.push(
        StoryBuilder::new(201, "Add to cart", 1)
            .status(StoryStatus::InProgress)
            .priority(Priority::Mvp)
            .criteria(&["quantity adjustable", "cart persists across sessions"])
            .build(),
    );
    cart.stories.push(
        StoryBuilder::new(202, "Save for later", 2)
            .priority(Priority::ReleaseOne)
            .build(),
    );

    let mut checkout = Task::new(22, "Check out");
    checkout.stories.push(
        StoryBuilder::new(203, "Card payment", 1)
            .describe("Charge the customer's card through the payment provider.")
            .status(StoryStatus::Blocked)
            .priority(Priority::Mvp)
            .criteria(&[
                "3-D Secure supported",
                "declined cards show a clear message",
                "receipt emailed on success",
            ])
            .build(),
    );
    checkout.stories.push(
        StoryBuilder::new(204, "Gift wrapping", 3)
            .build(),
    );

    buy.tasks.push(cart);
    buy.tasks.push(checkout);

    project.activities.push(discover);
    project.activities.push(buy);
    project
}
