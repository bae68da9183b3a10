//! Board layout tuning.
//!
//! This module provides the [`BoardConfig`] type which controls card
//! geometry, the list-virtualization threshold, and the hover-preview
//! delay. Values come with working defaults; validation keeps them
//! consistent with each other.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default cell size at which card lists switch to windowed rendering.
pub const DEFAULT_VIRTUALIZE_THRESHOLD: usize = 12;

/// Default minimum visible card rows in a windowed cell.
pub const DEFAULT_MIN_VISIBLE_ROWS: usize = 3;

/// Default maximum visible card rows in a windowed cell.
pub const DEFAULT_MAX_VISIBLE_ROWS: usize = 6;

/// Default card height in terminal rows.
pub const DEFAULT_CARD_HEIGHT: u16 = 4;

/// Default vertical gap between cards in terminal rows.
pub const DEFAULT_ROW_GAP: u16 = 1;

/// Default task column width in terminal columns.
pub const DEFAULT_COLUMN_WIDTH: u16 = 24;

/// Default hover delay before the preview appears (milliseconds).
pub const DEFAULT_HOVER_DELAY_MS: u64 = 400;

/// Board layout and interaction tuning.
///
/// # Examples
///
/// ```
/// use storymap_config::BoardConfig;
///
/// let board = BoardConfig::default();
/// assert_eq!(board.virtualize_threshold, 12);
/// assert_eq!(board.max_visible_rows, 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Cell story count at which rendering switches to a window.
    #[serde(default = "default_threshold")]
    pub virtualize_threshold: usize,

    /// Minimum rows kept visible in a windowed cell.
    #[serde(default = "default_min_rows")]
    pub min_visible_rows: usize,

    /// Maximum rows kept visible in a windowed cell.
    #[serde(default = "default_max_rows")]
    pub max_visible_rows: usize,

    /// Card height in terminal rows.
    #[serde(default = "default_card_height")]
    pub card_height: u16,

    /// Vertical gap between cards in terminal rows.
    #[serde(default = "default_row_gap")]
    pub row_gap: u16,

    /// Task column width in terminal columns.
    #[serde(default = "default_column_width")]
    pub column_width: u16,

    /// Hover delay before the preview appears, in milliseconds.
    #[serde(default = "default_hover_delay")]
    pub hover_delay_ms: u64,
}

fn default_threshold() -> usize {
    DEFAULT_VIRTUALIZE_THRESHOLD
}

fn default_min_rows() -> usize {
    DEFAULT_MIN_VISIBLE_ROWS
}

fn default_max_rows() -> usize {
    DEFAULT_MAX_VISIBLE_ROWS
}

fn default_card_height() -> u16 {
    DEFAULT_CARD_HEIGHT
}

fn default_row_gap() -> u16 {
    DEFAULT_ROW_GAP
}

fn default_column_width() -> u16 {
    DEFAULT_COLUMN_WIDTH
}

fn default_hover_delay() -> u64 {
    DEFAULT_HOVER_DELAY_MS
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            virtualize_threshold: DEFAULT_VIRTUALIZE_THRESHOLD,
            min_visible_rows: DEFAULT_MIN_VISIBLE_ROWS,
            max_visible_rows: DEFAULT_MAX_VISIBLE_ROWS,
            card_height: DEFAULT_CARD_HEIGHT,
            row_gap: DEFAULT_ROW_GAP,
            column_width: DEFAULT_COLUMN_WIDTH,
            hover_delay_ms: DEFAULT_HOVER_DELAY_MS,
        }
    }
}

impl BoardConfig {
    /// Returns the hover delay as a [`Duration`].
    #[must_use]
    pub const fn hover_delay(&self) -> Duration {
        Duration::from_millis(self.hover_delay_ms)
    }

    /// Validates the board metrics.
    ///
    /// # Errors
    ///
    /// Returns an error if any metric is zero where it must not be, or
    /// if the row clamp bounds are inverted.
    pub fn validate(&self) -> crate::Result<()> {
        if self.virtualize_threshold == 0 {
            return Err(crate::ConfigError::InvalidBoardMetrics {
                reason: "virtualize_threshold must be at least 1".to_string(),
            });
        }
        if self.min_visible_rows == 0 {
            return Err(crate::ConfigError::InvalidBoardMetrics {
                reason: "min_visible_rows must be at least 1".to_string(),
            });
        }
        if self.min_visible_rows > self.max_visible_rows {
            return Err(crate::ConfigError::InvalidBoardMetrics {
                reason: format!(
                    "min_visible_rows {} exceeds max_visible_rows {}",
                    self.min_visible_rows, self.max_visible_rows
                ),
            });
        }
        if self.card_height == 0 || self.column_width == 0 {
            return Err(crate::ConfigError::InvalidBoardMetrics {
                reason: "card_height and column_width must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
