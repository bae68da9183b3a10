//! Centralized layout measurements for the TUI.
//!
//! This module defines shared constants for fixed chrome dimensions.
//! Card geometry and column widths are configurable and live in
//! [`storymap_config::BoardConfig`]; only the measurements that never
//! change belong here.

/// Height of the header bar in rows.
///
/// The header displays the project name and help cue.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar at the bottom of the screen.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the release label gutter on the left of the grid.
pub const RELEASE_GUTTER_WIDTH: u16 = 14;

/// Minimum terminal height for useful rendering.
///
/// Below this height, we display a "terminal too small" message:
/// header, one card row with borders, and the status bar no longer fit.
pub const MIN_HEIGHT: u16 = 12;

/// Minimum terminal height for rendering with header.
///
/// When terminal height is between `MIN_HEIGHT` and
/// `MIN_HEIGHT_WITH_HEADER`, we hide the header to reclaim rows.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// The release gutter plus at least one readable task column.
pub const MIN_WIDTH: u16 = 44;
