// SPDX-License-Identifier: MPL-2.0
//! Diagnostics: a bounded log of what happened on the page.
//!
//! User intents, status transitions, warnings and errors are kept in a
//! memory-bounded [`CircularBuffer`] and can be exported as a JSON report.
//! Warnings and errors are echoed to stderr as they are recorded.

mod buffer;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use events::{DiagnosticEvent, DiagnosticEventKind, UserAction};

use crate::domain::Status;
use serde::Serialize;
use std::time::Instant;

/// Event log owned by the application.
#[derive(Debug, Clone)]
pub struct DiagnosticsLog {
    started_at: Instant,
    events: CircularBuffer<DiagnosticEvent>,
    evicted: usize,
}

/// One exported event, timed relative to the start of the log.
#[derive(Debug, Serialize)]
pub struct SerializableEvent<'a> {
    pub offset_ms: u64,
    #[serde(flatten)]
    pub kind: &'a DiagnosticEventKind,
}

impl Default for DiagnosticsLog {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl DiagnosticsLog {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            started_at: Instant::now(),
            events: CircularBuffer::new(capacity),
            evicted: 0,
        }
    }

    pub fn record(&mut self, kind: DiagnosticEventKind) {
        match &kind {
            DiagnosticEventKind::Warning { message } => eprintln!("[WARN] {message}"),
            DiagnosticEventKind::Error { message } => eprintln!("[ERROR] {message}"),
            _ => {}
        }
        if self.events.push(DiagnosticEvent::new(kind)).is_some() {
            self.evicted += 1;
        }
    }

    pub fn record_action(&mut self, action: UserAction) {
        self.record(DiagnosticEventKind::UserAction { action });
    }

    /// Records a status transition; no-op when the status did not change.
    pub fn record_status_change(&mut self, from: &Status, to: &Status) {
        if from == to {
            return;
        }
        self.record(DiagnosticEventKind::StatusChanged {
            from: from.as_raw().map(str::to_string),
            to: to.as_raw().map(str::to_string),
        });
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.record(DiagnosticEventKind::Warning {
            message: message.into(),
        });
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.record(DiagnosticEventKind::Error {
            message: message.into(),
        });
    }

    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.events.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of events pushed out of the log to make room for newer ones.
    #[must_use]
    pub fn evicted(&self) -> usize {
        self.evicted
    }

    /// Exports the log as a pretty-printed JSON array.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let events: Vec<SerializableEvent<'_>> = self
            .events
            .iter()
            .map(|event| SerializableEvent {
                offset_ms: u64::try_from(
                    event
                        .timestamp
                        .saturating_duration_since(self.started_at)
                        .as_millis(),
                )
                .unwrap_or(u64::MAX),
                kind: &event.kind,
            })
            .collect();
        serde_json::to_string_pretty(&events)
    }
}
