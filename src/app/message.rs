// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::subscriptions_page;
use iced::window;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// A control on the subscriptions page was pressed.
    Page(subscriptions_page::Message),
    /// Spinner animation frame.
    Tick(Instant),
    /// Time to ask the client for a fresh snapshot.
    Poll(Instant),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(window::Id),
    /// Result of writing the diagnostics log on exit.
    DiagnosticsExported(Result<(), String>),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override (e.g. `fr`, `en-US`, `fr_FR.UTF-8`).
    pub lang: Option<String>,
    /// Snapshot file for the fixture client, overriding the config value.
    pub snapshot: Option<PathBuf>,
    /// Optional config directory override.
    pub config_dir: Option<String>,
    /// Where to write the diagnostics log when the window closes.
    pub diagnostics_out: Option<PathBuf>,
}
