//! UI widgets for the story map board.
//!
//! Each widget is a plain render function that draws into a
//! [`ratatui::buffer::Buffer`], which keeps them unit-testable without
//! a terminal:
//!
//! - [`board`]: the grid itself (header band, release gutter, cells)
//! - [`cell`]: one `(task, release)` cell with card virtualization
//! - [`story_card`]: a single story card
//! - [`preview`]: the delayed hover preview
//! - [`draft_form`]: the inline add-card form
//! - [`filter_panel`]: status and release filter checkboxes
//! - [`wireframe`]: the wireframe panel and markdown rendering
//! - [`status_bar`]: key hints, toasts, and the pending-job indicator
//! - [`help`]: the key binding overlay

pub mod board;
pub mod cell;
pub mod draft_form;
pub mod filter_panel;
pub mod help;
pub mod preview;
pub mod status_bar;
pub mod story_card;
pub mod wireframe;

pub use board::render_board;
pub use cell::render_cell;
pub use draft_form::render_draft_form;
pub use filter_panel::{FilterEntry, filter_entries, render_filter_panel};
pub use help::render_help;
pub use preview::render_preview;
pub use status_bar::render_status_bar;
pub use story_card::render_story_card;
pub use wireframe::{render_markdown, render_wireframe_panel};
