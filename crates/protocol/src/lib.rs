//! Shared types and contracts for the storymap application.
//!
//! This crate defines the domain model of the story-map planning board:
//! stories with their status cycle and priorities, the activity / task /
//! release grid, cell addressing and release progress, filter state,
//! wireframe job states, and the TUI message vocabulary.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`story`]: Story, status cycle, and priority types
//! - [`board`]: Grid types (activity, task, release, project, cells)
//! - [`filter`]: Status/release filter sets
//! - [`wireframe`]: Wireframe generation job states
//! - [`message`]: TUI message types
//! - [`dummy`]: Sample data for demos and tests
//! - [`error`]: Error types for protocol operations
//!
//! # The grid
//!
//! Activities compose the horizontal axis, with their tasks as
//! sub-columns; releases compose the vertical axis. A cell is the
//! `(task, release)` pair, and a task's stories are partitioned across
//! the rows by each story's `release_id`:
//!
//! ```
//! use storymap_protocol::{CellRef, dummy::dummy_project};
//!
//! let project = dummy_project();
//! for story in project.cell_stories(CellRef::new(11, 1)) {
//!     assert_eq!(story.release_id, Some(1));
//! }
//! ```

pub mod board;
pub mod dummy;
pub mod error;
pub mod filter;
pub mod message;
pub mod story;
pub mod wireframe;

// Re-export primary types at crate root for convenience
pub use board::{
    Activity, ActivityId, CellRef, ColumnWidths, Project, ProjectId, Release, ReleaseProgress,
    Task, activity_span,
};
pub use dummy::dummy_project;
pub use error::{ProtocolError, Result};
pub use filter::FilterState;
pub use message::Message;
pub use story::{Priority, ReleaseId, STATUS_CYCLE, Story, StoryId, StoryStatus, TaskId};
pub use wireframe::{JobId, WireframeJob, WireframeStatus};
