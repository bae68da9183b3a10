//! Terminal user interface for the story map board.
//!
//! The UI is an Elm-ish loop: key events become
//! [`Message`](storymap_protocol::Message)s, [`App::update`] applies
//! them synchronously and may emit a backend [`Command`](app::Command),
//! and rendering is a pure function from state to buffer. Backend
//! calls, including the wireframe poll loop, run between frames.

pub mod app;
pub mod drafts;
pub mod event;
pub mod interaction;
pub mod layout;
pub mod state;
pub mod terminal;
pub mod theme;
pub mod virtualize;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

pub use app::{App, Command};
pub use state::{AppState, Focus, Toast};
