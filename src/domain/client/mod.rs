// SPDX-License-Identifier: MPL-2.0
//! Client polling domain types.
//!
//! - [`PollInterval`]: How often the application asks the client for a fresh snapshot

mod newtypes;

pub use newtypes::{poll_interval_bounds, PollInterval};
