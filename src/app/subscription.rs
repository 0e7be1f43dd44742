// SPDX-License-Identifier: MPL-2.0
//! Timers and native event routing for the application.

use super::Message;
use crate::config::SPINNER_FRAME_MS;
use crate::domain::client::PollInterval;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Window close requests, handled so the diagnostics log can be written
/// before the window goes away.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| {
        if let event::Event::Window(iced::window::Event::CloseRequested) = event {
            return Some(Message::WindowCloseRequested(window_id));
        }
        None
    })
}

/// Spinner animation frames, only while a spinner is on screen.
pub fn create_tick_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(Duration::from_millis(SPINNER_FRAME_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Periodic client refresh.
pub fn create_poll_subscription(interval: PollInterval) -> Subscription<Message> {
    time::every(interval.as_duration()).map(Message::Poll)
}
