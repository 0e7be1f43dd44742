// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

pub use crate::domain::client::poll_interval_bounds::{
    DEFAULT_MS as DEFAULT_POLL_INTERVAL_MS, MAX_MS as MAX_POLL_INTERVAL_MS,
    MIN_MS as MIN_POLL_INTERVAL_MS,
};
pub use crate::domain::diagnostics::buffer_capacity_bounds::{
    DEFAULT as DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY, MAX as MAX_DIAGNOSTICS_BUFFER_CAPACITY,
    MIN as MIN_DIAGNOSTICS_BUFFER_CAPACITY,
};

// ==========================================================================
// Spinner Animation
// ==========================================================================

/// Interval between spinner animation frames (in milliseconds).
pub const SPINNER_FRAME_MS: u64 = 50;

/// Rotation applied per spinner frame (in radians).
pub const SPINNER_STEP_RADIANS: f32 = 0.25;

// ==========================================================================
// Locale
// ==========================================================================

/// Locale used when nothing else matches.
pub const DEFAULT_LOCALE: &str = "en-US";

const _: () = {
    assert!(MIN_POLL_INTERVAL_MS < DEFAULT_POLL_INTERVAL_MS);
    assert!(DEFAULT_POLL_INTERVAL_MS < MAX_POLL_INTERVAL_MS);
    assert!(SPINNER_FRAME_MS > 0);
};
