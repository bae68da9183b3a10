//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application to update state and trigger backend operations.
///
/// # Examples
///
/// ```
/// use storymap_protocol::Message;
///
/// let msg = Message::CycleStatus;
/// assert!(!msg.is_navigation());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move the column cursor left.
    NavigateLeft,
    /// Move the column cursor right.
    NavigateRight,
    /// Move the card selection up within the current cell.
    NavigateUp,
    /// Move the card selection down within the current cell.
    NavigateDown,
    /// Move the row cursor to the previous release.
    PrevRelease,
    /// Move the row cursor to the next release.
    NextRelease,
    /// Select the currently highlighted item.
    Select,
    /// Contextual cancel: drop a drag, close a panel, clear selection.
    Escape,
    /// Go back to the previous view.
    Back,
    /// Advance the selected story's status one step in the cycle.
    CycleStatus,
    /// Pick up the selected card, or drop a card already in hand.
    Grab,
    /// Delete the selected story.
    DeleteStory,
    /// Open the add-card form for the current cell.
    OpenAddForm,
    /// Append a character to the focused draft field.
    Input(char),
    /// Delete the last character of the focused draft field.
    DeleteChar,
    /// Move focus to the next draft field.
    NextField,
    /// Submit the current cell's draft.
    SubmitDraft,
    /// Toggle the filter panel.
    ToggleFilterPanel,
    /// Clear all active filters.
    ResetFilters,
    /// Toggle the wireframe panel.
    ToggleWireframePanel,
    /// Request wireframe generation for the project.
    GenerateWireframe,
    /// Re-fetch the project from the backend.
    Refresh,
    /// Toggle the help overlay.
    ToggleHelp,
    /// Quit the application.
    Quit,
}

impl Message {
    /// Returns `true` if this message is a navigation action.
    ///
    /// # Examples
    ///
    /// ```
    /// use storymap_protocol::Message;
    ///
    /// assert!(Message::NavigateLeft.is_navigation());
    /// assert!(Message::NextRelease.is_navigation());
    /// assert!(!Message::Grab.is_navigation());
    /// ```
    #[must_use]
    pub const fn is_navigation(self) -> bool {
        matches!(
            self,
            Self::NavigateLeft
                | Self::NavigateRight
                | Self::NavigateUp
                | Self::NavigateDown
                | Self::PrevRelease
                | Self::NextRelease
        )
    }

    /// Returns `true` if this message edits draft form text.
    #[must_use]
    pub const fn is_text_edit(self) -> bool {
        matches!(self, Self::Input(_) | Self::DeleteChar | Self::NextField)
    }

    /// Returns `true` if this message should terminate the application.
    #[must_use]
    pub const fn is_terminating(self) -> bool {
        matches!(self, Self::Quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_detection() {
        assert!(Message::NavigateLeft.is_navigation());
        assert!(Message::NavigateRight.is_navigation());
        assert!(Message::NavigateUp.is_navigation());
        assert!(Message::NavigateDown.is_navigation());
        assert!(Message::PrevRelease.is_navigation());
        assert!(Message::NextRelease.is_navigation());
        assert!(!Message::Select.is_navigation());
        assert!(!Message::CycleStatus.is_navigation());
    }

    #[test]
    fn text_edit_detection() {
        assert!(Message::Input('x').is_text_edit());
        assert!(Message::DeleteChar.is_text_edit());
        assert!(Message::NextField.is_text_edit());
        assert!(!Message::SubmitDraft.is_text_edit());
    }

    #[test]
    fn terminating_detection() {
        assert!(Message::Quit.is_terminating());
        assert!(!Message::Escape.is_terminating());
    }

    #[test]
    fn serialization_roundtrip() {
        let messages = [
            Message::NavigateLeft,
            Message::NextRelease,
            Message::CycleStatus,
            Message::Grab,
            Message::Input('a'),
            Message::GenerateWireframe,
            Message::Quit,
        ];

        for msg in messages {
            let json = serde_json::to_string(&msg).expect("serialize");
            let parsed: Message = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(msg, parsed);
        }
    }
}
