// SPDX-License-Identifier: MPL-2.0
//! Application root state and wiring between the page, the client, and
//! localization.
//!
//! The `App` struct owns the subscriptions client and translates page
//! messages into client intents. The page itself stays a pure function of
//! the client's snapshot.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use update::{advance_rotation, write_diagnostics};

use crate::client::{FixtureClient, SubscriptionsClient};
use crate::config;
use crate::diagnostics::DiagnosticsLog;
use crate::domain::client::PollInterval;
use crate::domain::Status;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::i18n::Translate;
use crate::ui::subscriptions_page;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    client: Box<dyn SubscriptionsClient>,
    diagnostics: DiagnosticsLog,
    theme_mode: ThemeMode,
    poll_interval: PollInterval,
    /// Current spinner angle in radians.
    spinner_rotation: f32,
    diagnostics_out: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("status", &self.client.snapshot().status)
            .field("config_loaded", &self.client.config().loaded)
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const WINDOW_DEFAULT_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 360;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        // Close requests go through `Message::WindowCloseRequested`.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants a `Fn` boot closure; the flags are only consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the application around an already constructed client.
    pub fn with_client(i18n: I18n, client: Box<dyn SubscriptionsClient>) -> Self {
        Self {
            i18n,
            client,
            diagnostics: DiagnosticsLog::default(),
            theme_mode: ThemeMode::default(),
            poll_interval: PollInterval::default(),
            spinner_rotation: 0.0,
            diagnostics_out: None,
        }
    }

    /// Loads preferences and the snapshot named by the flags or the config.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);
        let mut diagnostics = DiagnosticsLog::new(config.diagnostics.capacity());

        if let Some(key) = config_warning {
            diagnostics.warn(i18n.tr(&key));
        }

        let snapshot_path = flags.snapshot.or(config.client.snapshot_path.clone());
        let client = match snapshot_path {
            Some(path) => FixtureClient::from_path(&path).unwrap_or_else(|err| {
                diagnostics.warn(describe_error(&i18n, &err));
                FixtureClient::unavailable()
            }),
            None => FixtureClient::unavailable(),
        };

        let app = App {
            diagnostics,
            theme_mode: config.general.theme_mode,
            poll_interval: config.client.poll_interval(),
            diagnostics_out: flags.diagnostics_out,
            ..Self::with_client(i18n, Box::new(client))
        };

        (app, Task::none())
    }

    pub fn status(&self) -> &Status {
        &self.client.snapshot().status
    }

    pub fn diagnostics(&self) -> &DiagnosticsLog {
        &self.diagnostics
    }

    pub fn title(&self) -> String {
        match self.status() {
            Status::Registered(label) if !label.trim().is_empty() => self
                .i18n
                .tr_with_args("window-title-registered", &[("status", label.as_str())]),
            _ => self.i18n.tr("window-title"),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let animating = subscriptions_page::is_animating(&view::props(self.client.as_ref()));

        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(animating),
            subscription::create_poll_subscription(self.poll_interval),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            client: self.client.as_mut(),
            diagnostics: &mut self.diagnostics,
            spinner_rotation: &mut self.spinner_rotation,
            diagnostics_out: self.diagnostics_out.as_deref(),
        };
        update::update(&mut ctx, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            client: self.client.as_ref(),
            spinner_rotation: self.spinner_rotation,
        })
    }
}

/// User-facing text for a startup error.
fn describe_error(i18n: &dyn Translate, err: &Error) -> String {
    match err {
        Error::Snapshot(snapshot) => format!("{} ({snapshot})", i18n.tr(snapshot.i18n_key())),
        other => other.to_string(),
    }
}
