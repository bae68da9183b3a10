//! Cell list virtualization policy.
//!
//! Cells with few cards render every card eagerly. Once a cell's story
//! count reaches the configured threshold, rendering switches to a
//! windowed mode: only a clamped number of rows is drawn, and a window
//! offset keeps the selected card in view. Cards inside the window stay
//! fully interactive; only off-screen rows are skipped.

use storymap_config::BoardConfig;

/// How a cell's story list should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Render every card directly, at natural height.
    Eager,
    /// Render a fixed-height window over the list.
    Windowed {
        /// Number of card rows kept visible.
        rows: usize,
        /// Total viewport height in terminal rows.
        viewport_height: u16,
    },
}

/// The virtualization decision policy for one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualizePolicy {
    /// Story count at which a cell switches to windowed rendering.
    pub threshold: usize,
    /// Minimum visible rows in a window.
    pub min_rows: usize,
    /// Maximum visible rows in a window.
    pub max_rows: usize,
    /// Height of one card in terminal rows.
    pub card_height: u16,
    /// Gap between consecutive cards in terminal rows.
    pub row_gap: u16,
}

impl Default for VirtualizePolicy {
    fn default() -> Self {
        Self::from_config(&BoardConfig::default())
    }
}

impl VirtualizePolicy {
    /// Builds a policy from the board configuration.
    #[must_use]
    pub const fn from_config(board: &BoardConfig) -> Self {
        Self {
            threshold: board.virtualize_threshold,
            min_rows: board.min_visible_rows,
            max_rows: board.max_visible_rows,
            card_height: board.card_height,
            row_gap: board.row_gap,
        }
    }

    /// Height of one row slot: a card plus the gap below it.
    #[must_use]
    pub const fn row_height(&self) -> u16 {
        self.card_height + self.row_gap
    }

    /// Decides the render mode for a cell holding `story_count` cards.
    ///
    /// Below the threshold every card renders eagerly. At or above it,
    /// the visible row count is the story count clamped to
    /// `[min_rows, max_rows]`, and the viewport height is
    /// `rows * row_height - gap` (the trailing gap is not drawn).
    ///
    /// # Examples
    ///
    /// ```
    /// use storymap_tui::virtualize::{RenderMode, VirtualizePolicy};
    ///
    /// let policy = VirtualizePolicy::default();
    /// assert_eq!(policy.mode_for(11), RenderMode::Eager);
    /// assert!(matches!(
    ///     policy.mode_for(12),
    ///     RenderMode::Windowed { rows: 6, .. }
    /// ));
    /// ```
    #[must_use]
    pub fn mode_for(&self, story_count: usize) -> RenderMode {
        if story_count < self.threshold {
            return RenderMode::Eager;
        }

        let rows = story_count.clamp(self.min_rows, self.max_rows);
        let viewport_height = (rows as u16) * self.row_height() - self.row_gap;
        RenderMode::Windowed {
            rows,
            viewport_height,
        }
    }

    /// Computes the window offset that keeps `selected` visible.
    ///
    /// The selection is centered in the window where possible and the
    /// offset is clamped so the window never runs past the end of the
    /// list.
    #[must_use]
    pub fn window_offset(&self, selected: usize, story_count: usize, rows: usize) -> usize {
        if story_count <= rows {
            return 0;
        }
        let max_offset = story_count - rows;
        selected.saturating_sub(rows / 2).min(max_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_threshold_renders_eagerly() {
        let policy = VirtualizePolicy::default();
        assert_eq!(policy.mode_for(0), RenderMode::Eager);
        assert_eq!(policy.mode_for(11), RenderMode::Eager);
    }

    #[test]
    fn at_threshold_switches_to_window() {
        let policy = VirtualizePolicy::default();
        assert!(matches!(policy.mode_for(12), RenderMode::Windowed { .. }));
    }

    #[test]
    fn twelve_stories_clamp_to_six_rows() {
        let policy = VirtualizePolicy::default();
        let RenderMode::Windowed { rows, .. } = policy.mode_for(12) else {
            panic!("expected windowed mode");
        };
        assert_eq!(rows, 6);
    }

    #[test]
    fn viewport_height_excludes_trailing_gap() {
        // card_height 4, gap 1: 6 rows is 6 * 5 - 1 = 29.
        let policy = VirtualizePolicy::default();
        assert_eq!(
            policy.mode_for(20),
            RenderMode::Windowed {
                rows: 6,
                viewport_height: 29,
            }
        );
    }

    #[test]
    fn custom_threshold_respected() {
        let board = BoardConfig {
            virtualize_threshold: 5,
            ..BoardConfig::default()
        };
        let policy = VirtualizePolicy::from_config(&board);
        assert_eq!(policy.mode_for(4), RenderMode::Eager);
        assert!(matches!(policy.mode_for(5), RenderMode::Windowed { .. }));
    }

    #[test]
    fn window_offset_centers_selection() {
        let policy = VirtualizePolicy::default();
        assert_eq!(policy.window_offset(10, 20, 6), 7);
    }

    #[test]
    fn window_offset_clamps_to_list_end() {
        let policy = VirtualizePolicy::default();
        assert_eq!(policy.window_offset(19, 20, 6), 14);
    }

    #[test]
    fn window_offset_zero_near_start() {
        let policy = VirtualizePolicy::default();
        assert_eq!(policy.window_offset(0, 20, 6), 0);
        assert_eq!(policy.window_offset(2, 20, 6), 0);
    }

    #[test]
    fn window_offset_zero_when_everything_fits() {
        let policy = VirtualizePolicy::default();
        assert_eq!(policy.window_offset(3, 4, 6), 0);
    }
}
