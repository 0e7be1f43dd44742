// SPDX-License-Identifier: MPL-2.0
//! Registration status reported by the subscriptions client.
//!
//! The client reports status as a loose string (or nothing at all while it is
//! still starting). [`Status`] gives the handful of values the page reacts to
//! their own variants and keeps every other value as a free-text label.

use std::fmt;

/// Raw value reported when the host is not registered.
pub const RAW_UNKNOWN: &str = "Unknown";
/// Raw value reported when subscription-manager is not available.
pub const RAW_NOT_FOUND: &str = "not-found";
/// Raw value reported when the current user may not read the status.
pub const RAW_ACCESS_DENIED: &str = "access-denied";
/// Raw value reported while an unregistration is in flight.
pub const RAW_UNREGISTERING: &str = "unregistering";

/// Typed registration status.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    /// No status reported yet.
    #[default]
    Loading,
    /// The host is not registered.
    Unknown,
    /// The subscription service could not be found.
    NotFound,
    /// The current user is not allowed to read the status.
    AccessDenied,
    /// Unregistration is in progress.
    Unregistering,
    /// The host is registered; carries the label reported by the client.
    Registered(String),
}

impl Status {
    /// Builds a status from the raw client value. Never fails: anything that
    /// is not one of the well-known values is a registered label.
    #[must_use]
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            None => Status::Loading,
            Some(RAW_UNKNOWN) => Status::Unknown,
            Some(RAW_NOT_FOUND) => Status::NotFound,
            Some(RAW_ACCESS_DENIED) => Status::AccessDenied,
            Some(RAW_UNREGISTERING) => Status::Unregistering,
            Some(label) => Status::Registered(label.to_string()),
        }
    }

    /// Returns the raw client value, `None` while loading.
    #[must_use]
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Status::Loading => None,
            Status::Unknown => Some(RAW_UNKNOWN),
            Status::NotFound => Some(RAW_NOT_FOUND),
            Status::AccessDenied => Some(RAW_ACCESS_DENIED),
            Status::Unregistering => Some(RAW_UNREGISTERING),
            Status::Registered(label) => Some(label),
        }
    }

    /// Whether the client is reachable and the status can be acted upon.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        !matches!(
            self,
            Status::Loading | Status::NotFound | Status::AccessDenied
        )
    }

    #[must_use]
    pub fn is_unregistering(&self) -> bool {
        matches!(self, Status::Unregistering)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_raw().unwrap_or("<loading>"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_known_values_map_to_variants() {
        assert_eq!(Status::from_raw(None), Status::Loading);
        assert_eq!(Status::from_raw(Some("Unknown")), Status::Unknown);
        assert_eq!(Status::from_raw(Some("not-found")), Status::NotFound);
        assert_eq!(Status::from_raw(Some("access-denied")), Status::AccessDenied);
        assert_eq!(Status::from_raw(Some("unregistering")), Status::Unregistering);
    }

    #[test]
    fn other_values_are_registered_labels() {
        assert_eq!(
            Status::from_raw(Some("registered-to-acme")),
            Status::Registered("registered-to-acme".to_string())
        );
        // Matching is case sensitive, like the client's own values.
        assert_eq!(
            Status::from_raw(Some("unknown")),
            Status::Registered("unknown".to_string())
        );
    }

    #[test]
    fn raw_value_round_trips() {
        for raw in [None, Some("Unknown"), Some("not-found"), Some("Current")] {
            assert_eq!(Status::from_raw(raw).as_raw(), raw);
        }
    }

    #[test]
    fn connected_excludes_curtain_states() {
        assert!(!Status::Loading.is_connected());
        assert!(!Status::NotFound.is_connected());
        assert!(!Status::AccessDenied.is_connected());
        assert!(Status::Unknown.is_connected());
        assert!(Status::Unregistering.is_connected());
        assert!(Status::Registered("Current".into()).is_connected());
    }
}
