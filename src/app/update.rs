// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers work on an [`UpdateContext`] borrowing the pieces of `App` they
//! touch, so each one can be exercised without building a whole window.

use super::Message;
use crate::client::SubscriptionsClient;
use crate::config::SPINNER_STEP_RADIANS;
use crate::diagnostics::{DiagnosticsLog, UserAction};
use crate::ui::subscriptions_page;
use iced::{window, Task};
use std::f32::consts::TAU;
use std::path::{Path, PathBuf};

/// Mutable view over the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub client: &'a mut dyn SubscriptionsClient,
    pub diagnostics: &'a mut DiagnosticsLog,
    pub spinner_rotation: &'a mut f32,
    pub diagnostics_out: Option<&'a Path>,
}

/// Routes a top-level message to its handler.
pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Page(message) => handle_page_message(ctx, message),
        Message::Tick(_) => {
            *ctx.spinner_rotation = advance_rotation(*ctx.spinner_rotation);
            Task::none()
        }
        Message::Poll(_) => {
            handle_poll(ctx);
            Task::none()
        }
        Message::WindowCloseRequested(id) => handle_close(ctx, id),
        Message::DiagnosticsExported(result) => {
            if let Err(err) = result {
                ctx.diagnostics
                    .error(format!("Failed to write diagnostics: {err}"));
            }
            Task::none()
        }
    }
}

/// Forwards primary clicks to the client and logs everything else as
/// ignored.
pub fn handle_page_message(
    ctx: &mut UpdateContext<'_>,
    message: subscriptions_page::Message,
) -> Task<Message> {
    let Some(intent) = message.intent() else {
        ctx.diagnostics
            .record_action(UserAction::ignored(message.button()));
        return Task::none();
    };

    ctx.diagnostics.record_action(intent.into());

    let before = ctx.client.snapshot().status.clone();
    intent.apply(&mut *ctx.client);
    ctx.diagnostics
        .record_status_change(&before, &ctx.client.snapshot().status);

    Task::none()
}

/// Lets the client refresh and records any status change it reports.
pub fn handle_poll(ctx: &mut UpdateContext<'_>) {
    let before = ctx.client.snapshot().status.clone();
    match ctx.client.poll() {
        Ok(true) => ctx
            .diagnostics
            .record_status_change(&before, &ctx.client.snapshot().status),
        Ok(false) => {}
        Err(err) => ctx.diagnostics.warn(err.to_string()),
    }
}

/// Writes the diagnostics log if requested, then closes the window.
pub fn handle_close(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    let Some(path) = ctx.diagnostics_out else {
        return window::close(id);
    };

    match ctx.diagnostics.to_json() {
        Ok(json) => Task::perform(
            write_diagnostics(path.to_path_buf(), json),
            Message::DiagnosticsExported,
        )
        .chain(window::close(id)),
        Err(err) => {
            ctx.diagnostics
                .error(format!("Failed to serialize diagnostics: {err}"));
            window::close(id)
        }
    }
}

/// Writes an exported diagnostics report to disk.
pub async fn write_diagnostics(path: PathBuf, json: String) -> Result<(), String> {
    tokio::fs::write(&path, json)
        .await
        .map_err(|err| format!("{}: {err}", path.display()))
}

/// Next spinner angle, kept within one turn.
#[must_use]
pub fn advance_rotation(rotation: f32) -> f32 {
    (rotation + SPINNER_STEP_RADIANS) % TAU
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::FixtureClient;
    use crate::diagnostics::DiagnosticEventKind;
    use crate::domain::Status;
    use crate::ui::pointer::PointerButton;

    fn client(toml: &str) -> FixtureClient {
        FixtureClient::from_toml(toml).expect("fixture should parse")
    }

    fn actions(log: &DiagnosticsLog) -> Vec<UserAction> {
        log.events()
            .filter_map(|event| match &event.kind {
                DiagnosticEventKind::UserAction { action } => Some(*action),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn primary_register_reaches_client() {
        let mut client = client("status = \"Unknown\"");
        let mut diagnostics = DiagnosticsLog::default();
        let mut rotation = 0.0;
        let mut ctx = UpdateContext {
            client: &mut client,
            diagnostics: &mut diagnostics,
            spinner_rotation: &mut rotation,
            diagnostics_out: None,
        };

        let _ = handle_page_message(
            &mut ctx,
            subscriptions_page::Message::Register(PointerButton::Primary),
        );

        assert_eq!(
            client.snapshot().status,
            Status::Registered("Current".into())
        );
        assert_eq!(actions(&diagnostics), vec![UserAction::Register]);
    }

    #[test]
    fn secondary_click_is_ignored_and_logged() {
        let mut client = client("status = \"Unknown\"");
        let mut diagnostics = DiagnosticsLog::default();
        let mut rotation = 0.0;
        let mut ctx = UpdateContext {
            client: &mut client,
            diagnostics: &mut diagnostics,
            spinner_rotation: &mut rotation,
            diagnostics_out: None,
        };

        let _ = handle_page_message(
            &mut ctx,
            subscriptions_page::Message::Register(PointerButton::Secondary),
        );

        assert_eq!(client.snapshot().status, Status::Unknown);
        assert_eq!(
            actions(&diagnostics),
            vec![UserAction::IgnoredClick { button: 2 }]
        );
    }

    #[test]
    fn dismiss_clears_error_and_keeps_status() {
        let mut client = client("status = \"registered\"\nerror = \"network timeout\"");
        let mut diagnostics = DiagnosticsLog::default();
        let mut rotation = 0.0;
        let mut ctx = UpdateContext {
            client: &mut client,
            diagnostics: &mut diagnostics,
            spinner_rotation: &mut rotation,
            diagnostics_out: None,
        };

        let _ = handle_page_message(
            &mut ctx,
            subscriptions_page::Message::DismissError(PointerButton::Primary),
        );

        assert_eq!(client.snapshot().error, None);
        assert_eq!(
            client.snapshot().status,
            Status::Registered("registered".into())
        );
    }

    #[test]
    fn unregister_completes_on_poll() {
        let mut client = client("status = \"Current\"");
        let mut diagnostics = DiagnosticsLog::default();
        let mut rotation = 0.0;
        let mut ctx = UpdateContext {
            client: &mut client,
            diagnostics: &mut diagnostics,
            spinner_rotation: &mut rotation,
            diagnostics_out: None,
        };

        let _ = handle_page_message(
            &mut ctx,
            subscriptions_page::Message::Unregister(PointerButton::Primary),
        );
        assert_eq!(ctx.client.snapshot().status, Status::Unregistering);

        handle_poll(&mut ctx);
        assert_eq!(client.snapshot().status, Status::Unknown);

        let transitions: Vec<_> = diagnostics
            .events()
            .filter(|event| matches!(event.kind, DiagnosticEventKind::StatusChanged { .. }))
            .collect();
        assert_eq!(transitions.len(), 2);
    }

    #[test]
    fn rotation_wraps_within_one_turn() {
        let mut rotation = 0.0;
        for _ in 0..1000 {
            rotation = advance_rotation(rotation);
            assert!((0.0..TAU).contains(&rotation));
        }
        assert!((advance_rotation(0.0) - SPINNER_STEP_RADIANS).abs() < 1e-6);
    }

    #[tokio::test]
    async fn diagnostics_are_written_to_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("diagnostics.json");

        write_diagnostics(path.clone(), "[]".to_string())
            .await
            .expect("write should succeed");

        let content = std::fs::read_to_string(&path).expect("file should exist");
        assert_eq!(content, "[]");
    }

    #[tokio::test]
    async fn unwritable_diagnostics_path_reports_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("missing").join("diagnostics.json");

        let result = write_diagnostics(path, "[]".to_string()).await;
        assert!(result.is_err());
    }
}
