//! Wireframe poll timing configuration.
//!
//! This module provides the [`WireframePolling`] type which controls
//! how the wireframe job status endpoint is polled.
//!
//! # Timing
//!
//! Generation jobs usually take a few seconds, so the loop waits a
//! slightly longer initial delay before the first check, then settles
//! into a steady interval:
//!
//! - Initial delay: 1200 ms
//! - Repeat interval: 1500 ms
//!
//! Both are clamped to a sane range during validation so a typo in a
//! config file cannot hammer the backend.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default delay before the first status check (milliseconds).
pub const DEFAULT_INITIAL_DELAY_MS: u64 = 1200;

/// Default interval between subsequent checks (milliseconds).
pub const DEFAULT_INTERVAL_MS: u64 = 1500;

/// Minimum allowed poll timing (250 ms).
pub const MIN_POLL_MS: u64 = 250;

/// Maximum allowed poll timing (1 minute).
pub const MAX_POLL_MS: u64 = 60_000;

/// Configuration for the wireframe status poll loop.
///
/// # Examples
///
/// ```
/// use storymap_config::WireframePolling;
///
/// let polling = WireframePolling::default();
/// assert_eq!(polling.initial_delay_ms, 1200);
/// assert_eq!(polling.interval_ms, 1500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireframePolling {
    /// Delay before the first status check, in milliseconds.
    #[serde(default = "default_initial_delay")]
    pub initial_delay_ms: u64,

    /// Interval between subsequent checks, in milliseconds.
    #[serde(default = "default_interval")]
    pub interval_ms: u64,
}

fn default_initial_delay() -> u64 {
    DEFAULT_INITIAL_DELAY_MS
}

fn default_interval() -> u64 {
    DEFAULT_INTERVAL_MS
}

impl Default for WireframePolling {
    fn default() -> Self {
        Self {
            initial_delay_ms: DEFAULT_INITIAL_DELAY_MS,
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

impl WireframePolling {
    /// Creates a polling configuration with explicit timings.
    ///
    /// # Examples
    ///
    /// ```
    /// use storymap_config::WireframePolling;
    ///
    /// let polling = WireframePolling::new(500, 2000);
    /// assert_eq!(polling.interval_ms, 2000);
    /// ```
    #[must_use]
    pub const fn new(initial_delay_ms: u64, interval_ms: u64) -> Self {
        Self {
            initial_delay_ms,
            interval_ms,
        }
    }

    /// Returns the initial delay as a [`Duration`].
    #[must_use]
    pub const fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    /// Returns the repeat interval as a [`Duration`].
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Validates the polling configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if either timing is outside the allowed range.
    pub fn validate(&self) -> crate::Result<()> {
        for (name, value) in [
            ("initial_delay_ms", self.initial_delay_ms),
            ("interval_ms", self.interval_ms),
        ] {
            if value < MIN_POLL_MS {
                return Err(crate::ConfigError::InvalidPolling {
                    reason: format!("{name} {value} is below minimum of {MIN_POLL_MS} ms"),
                });
            }
            if value > MAX_POLL_MS {
                return Err(crate::ConfigError::InvalidPolling {
                    reason: format!("{name} {value} exceeds maximum of {MAX_POLL_MS} ms"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timings() {
        let polling = WireframePolling::default();
        assert_eq!(polling.initial_delay_ms, DEFAULT_INITIAL_DELAY_MS);
        assert_eq!(polling.interval_ms, DEFAULT_INTERVAL_MS);
        assert!(polling.validate().is_ok());
    }

    #[test]
    fn durations_match_millis() {
        let polling = WireframePolling::new(500, 2000);
        assert_eq!(polling.initial_delay(), Duration::from_millis(500));
        assert_eq!(polling.interval(), Duration::from_millis(2000));
    }

    #[test]
    fn validate_below_minimum() {
        let polling = WireframePolling::new(10, 1500);
        assert!(polling.validate().is_err());

        let polling = WireframePolling::new(1200, 10);
        assert!(polling.validate().is_err());
    }

    #[test]
    fn validate_above_maximum() {
        let polling = WireframePolling::new(1200, 120_000);
        assert!(polling.validate().is_err());
    }

    #[test]
    fn validate_at_boundaries() {
        assert!(WireframePolling::new(MIN_POLL_MS, MAX_POLL_MS).validate().is_ok());
    }

    #[test]
    fn deserialize_with_defaults() {
        let polling: WireframePolling = serde_json5::from_str("{}").unwrap();
        assert_eq!(polling, WireframePolling::default());
    }

    #[test]
    fn deserialize_partial() {
        let polling: WireframePolling =
            serde_json5::from_str(r#"{ interval_ms: 3000 }"#).unwrap();
        assert_eq!(polling.initial_delay_ms, DEFAULT_INITIAL_DELAY_MS);
        assert_eq!(polling.interval_ms, 3000);
    }
}
