//! Visual token registry.
//!
//! This module maps semantic keys (story status, priority, toast severity)
//! to display bundles of label, color, and indicator glyph. It is a pure
//! lookup layer: every widget that needs to style a status or priority goes
//! through these functions so the mapping lives in exactly one place.

use ratatui::style::Color;

use storymap_protocol::{Priority, StoryStatus};

/// A bundle of display attributes for a semantic key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Human-readable label.
    pub label: &'static str,
    /// The color used for text and borders.
    pub color: Color,
    /// A one-character indicator glyph.
    pub indicator: char,
}

/// Severity of a toast or inline validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational notice.
    Info,
    /// Non-blocking warning (e.g. a very short title).
    Warning,
    /// Failure requiring user attention.
    Error,
}

/// Returns the display token for a story status.
///
/// # Status Indicators
///
/// | Status | Symbol | Meaning |
/// |--------|--------|---------|
/// | `Todo` | `○` | Empty circle - not started |
/// | `InProgress` | `●` | Filled circle - active |
/// | `Done` | `✓` | Checkmark - complete |
/// | `Blocked` | `◆` | Diamond - blocked externally |
///
/// # Examples
///
/// ```
/// use storymap_protocol::StoryStatus;
/// use storymap_tui::theme::status_token;
///
/// let token = status_token(StoryStatus::InProgress);
/// assert_eq!(token.label, "In Progress");
/// assert_eq!(token.indicator, '●');
/// ```
#[must_use]
pub const fn status_token(status: StoryStatus) -> Token {
    match status {
        StoryStatus::Todo => Token {
            label: "To Do",
            color: Color::DarkGray,
            indicator: '\u{25CB}', // ○
        },
        StoryStatus::InProgress => Token {
            label: "In Progress",
            color: Color::Blue,
            indicator: '\u{25CF}', // ●
        },
        StoryStatus::Done => Token {
            label: "Done",
            color: Color::Green,
            indicator: '\u{2713}', // ✓
        },
        StoryStatus::Blocked => Token {
            label: "Blocked",
            color: Color::Red,
            indicator: '\u{25C6}', // ◆
        },
    }
}

/// Returns the display token for a story priority.
///
/// # Examples
///
/// ```
/// use storymap_protocol::Priority;
/// use storymap_tui::theme::priority_token;
///
/// assert_eq!(priority_token(Priority::Mvp).label, "MVP");
/// ```
#[must_use]
pub const fn priority_token(priority: Priority) -> Token {
    match priority {
        Priority::Mvp => Token {
            label: "MVP",
            color: Color::Magenta,
            indicator: '\u{2605}', // ★
        },
        Priority::ReleaseOne => Token {
            label: "Release 1",
            color: Color::Cyan,
            indicator: '\u{2606}', // ☆
        },
        Priority::Later => Token {
            label: "Later",
            color: Color::DarkGray,
            indicator: '\u{00B7}', // ·
        },
    }
}

/// Returns the display token for a toast severity.
#[must_use]
pub const fn severity_token(severity: Severity) -> Token {
    match severity {
        Severity::Info => Token {
            label: "Info",
            color: Color::Cyan,
            indicator: '\u{2139}', // ℹ
        },
        Severity::Warning => Token {
            label: "Warning",
            color: Color::Yellow,
            indicator: '\u{26A0}', // ⚠
        },
        Severity::Error => Token {
            label: "Error",
            color: Color::Red,
            indicator: '\u{2717}', // ✗
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_has_a_distinct_indicator() {
        let indicators: Vec<char> = StoryStatus::all()
            .into_iter()
            .map(|s| status_token(s).indicator)
            .collect();
        for (i, a) in indicators.iter().enumerate() {
            for b in &indicators[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn status_labels_match_display_names() {
        for status in StoryStatus::all() {
            assert_eq!(status_token(status).label, status.display_name());
        }
    }

    #[test]
    fn priority_labels_match_display_names() {
        for priority in Priority::all() {
            assert_eq!(priority_token(priority).label, priority.display_name());
        }
    }

    #[test]
    fn severity_colors_escalate() {
        assert_eq!(severity_token(Severity::Warning).color, Color::Yellow);
        assert_eq!(severity_token(Severity::Error).color, Color::Red);
    }
}
