//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal key
//! events to application messages. Two keymaps exist: the board map and
//! the draft-form map, which captures text input while a form is open.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use storymap_protocol::Message;

/// Default poll timeout for events.
///
/// Kept short so poller events and hover timers are serviced promptly
/// between keystrokes.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts a terminal key event to an application message.
///
/// Returns `Some(Message)` if the key event maps to an action,
/// or `None` if the key is not bound.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Escape (cancel drag, close panel, clear selection) |
/// | `Left` / `Right` | Move the column cursor |
/// | `Up` / `Down` | Move the card cursor within the cell |
/// | `[` / `]` | Previous / next release row |
/// | `Enter` | Select |
/// | `Backspace` | Back |
/// | `s` | Cycle the selected story's status |
/// | `g` | Grab (pick up or drop the selected card) |
/// | `a` | Open the add-card form for the current cell |
/// | `d` | Delete the selected story |
/// | `f` | Toggle the filter panel |
/// | `c` | Clear all filters |
/// | `w` | Toggle the wireframe panel |
/// | `Shift+G` | Request wireframe generation |
/// | `r` | Refresh the project |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    // Check for Ctrl+C first
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),

        // Navigation (arrow keys only)
        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),
        KeyCode::Char('[') => Some(Message::PrevRelease),
        KeyCode::Char(']') => Some(Message::NextRelease),

        // Selection
        KeyCode::Enter => Some(Message::Select),
        KeyCode::Backspace => Some(Message::Back),

        // Card actions
        KeyCode::Char('s') => Some(Message::CycleStatus),
        KeyCode::Char('g') => Some(Message::Grab),
        KeyCode::Char('a') => Some(Message::OpenAddForm),
        KeyCode::Char('d') => Some(Message::DeleteStory),

        // Panels
        KeyCode::Char('f') => Some(Message::ToggleFilterPanel),
        KeyCode::Char('c') => Some(Message::ResetFilters),
        KeyCode::Char('w') => Some(Message::ToggleWireframePanel),
        KeyCode::Char('G') => Some(Message::GenerateWireframe),

        // Other actions
        KeyCode::Char('r') => Some(Message::Refresh),
        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

/// Converts a key event to a message while a draft form is open.
///
/// In form mode almost every printable key is text input; only a small
/// set of control keys keeps its meaning.
///
/// # Key Bindings (Form Mode)
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Enter` | Submit the draft |
/// | `Esc` | Close the form (content is kept) |
/// | `Tab` | Next field |
/// | `Backspace` | Delete last character |
/// | Any char | Input |
#[must_use]
pub fn key_to_draft_message(key: KeyEvent) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Enter => Some(Message::SubmitDraft),
        KeyCode::Esc => Some(Message::Escape),
        KeyCode::Tab => Some(Message::NextField),
        KeyCode::Backspace => Some(Message::DeleteChar),
        KeyCode::Char(ch) => Some(Message::Input(ch)),
        _ => None,
    }
}
