// SPDX-License-Identifier: MPL-2.0
//! Client polling newtypes.

use std::time::Duration;

/// Poll interval bounds, in milliseconds.
pub mod poll_interval_bounds {
    /// Minimum poll interval.
    pub const MIN_MS: u64 = 250;
    /// Maximum poll interval.
    pub const MAX_MS: u64 = 60_000;
    /// Default poll interval.
    pub const DEFAULT_MS: u64 = 2_000;
}

/// Interval between two client polls, clamped to [`poll_interval_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollInterval(u64);

impl PollInterval {
    /// Creates a poll interval, clamping to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(poll_interval_bounds::MIN_MS, poll_interval_bounds::MAX_MS))
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for PollInterval {
    fn default() -> Self {
        Self(poll_interval_bounds::DEFAULT_MS)
    }
}
