// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::client::Intent;
use crate::ui::pointer::PointerButton;

/// User-initiated actions captured for diagnostics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// Primary click on Register.
    Register,

    /// Primary click on Unregister.
    Unregister,

    /// Primary click on the error banner's close control.
    DismissError,

    /// A click with a non-primary button, dropped without an intent.
    IgnoredClick {
        /// Button code (1 = auxiliary, 2 = secondary).
        button: u8,
    },
}

impl UserAction {
    /// Action recorded for a click that was filtered out.
    #[must_use]
    pub fn ignored(button: PointerButton) -> Self {
        UserAction::IgnoredClick {
            button: button.code(),
        }
    }
}

impl From<Intent> for UserAction {
    fn from(intent: Intent) -> Self {
        match intent {
            Intent::Register => UserAction::Register,
            Intent::Unregister => UserAction::Unregister,
            Intent::DismissError => UserAction::DismissError,
        }
    }
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// User-initiated action.
    UserAction { action: UserAction },

    /// The client reported a different registration status.
    StatusChanged {
        /// Previous raw status, absent while loading.
        #[serde(skip_serializing_if = "Option::is_none")]
        from: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        to: Option<String>,
    },

    /// Non-critical issue; the page keeps working with defaults.
    Warning { message: String },

    /// An operation failed.
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_event_new_creates_with_current_timestamp() {
        let before = Instant::now();
        let event = DiagnosticEvent::new(DiagnosticEventKind::UserAction {
            action: UserAction::Register,
        });
        let after = Instant::now();

        assert!(event.timestamp >= before);
        assert!(event.timestamp <= after);
    }

    #[test]
    fn ignored_click_keeps_button_code() {
        assert_eq!(
            UserAction::ignored(PointerButton::Secondary),
            UserAction::IgnoredClick { button: 2 }
        );
    }

    #[test]
    fn intents_map_to_actions() {
        assert_eq!(UserAction::from(Intent::Register), UserAction::Register);
        assert_eq!(UserAction::from(Intent::Unregister), UserAction::Unregister);
        assert_eq!(UserAction::from(Intent::DismissError), UserAction::DismissError);
    }

    #[test]
    fn user_action_serializes_with_tags() {
        let kind = DiagnosticEventKind::UserAction {
            action: UserAction::IgnoredClick { button: 1 },
        };
        let json = serde_json::to_string(&kind).expect("serialization should succeed");
        assert!(json.contains("\"type\":\"user_action\""));
        assert!(json.contains("\"action\":\"ignored_click\""));
        assert!(json.contains("\"button\":1"));
    }

    #[test]
    fn status_change_omits_missing_sides() {
        let kind = DiagnosticEventKind::StatusChanged {
            from: None,
            to: Some("Unknown".into()),
        };
        let json = serde_json::to_string(&kind).expect("serialization should succeed");
        assert!(!json.contains("\"from\""));
        assert!(json.contains("\"to\":\"Unknown\""));
    }

    #[test]
    fn error_deserializes_from_json() {
        let json = r#"{"type":"error","message":"poll failed"}"#;
        let event: DiagnosticEventKind =
            serde_json::from_str(json).expect("deserialization should succeed");
        assert_eq!(
            event,
            DiagnosticEventKind::Error {
                message: "poll failed".into()
            }
        );
    }
}
