// SPDX-License-Identifier: MPL-2.0
//! Error banner with a close control.
//!
//! The close control reports which mouse button pressed it; deciding whether
//! that press dismisses anything is left to whoever handles the message.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::pointer::{self, PointerButton};
use crate::ui::styles;
use crate::ui::widgets::{status_glyph, GlyphKind};
use iced::widget::{button, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone)]
pub struct DismissableError<Message> {
    message: String,
    on_dismiss: Option<fn(PointerButton) -> Message>,
}

impl<Message: Clone> DismissableError<Message> {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            on_dismiss: None,
        }
    }

    /// Message emitted when the close control is pressed.
    ///
    /// Without one the close control is still drawn but does nothing.
    pub fn on_dismiss(mut self, on_dismiss: fn(PointerButton) -> Message) -> Self {
        self.on_dismiss = Some(on_dismiss);
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_dismissable(&self) -> bool {
        self.on_dismiss.is_some()
    }

    /// Message the close control would emit for `button`.
    pub fn dismiss_message(&self, button: PointerButton) -> Option<Message> {
        self.on_dismiss.map(|on_dismiss| on_dismiss(button))
    }

    pub fn view<'a>(self) -> Element<'a, Message>
    where
        Message: 'a,
    {
        let close = button(status_glyph::glyph(GlyphKind::Close, sizing::ICON_SM))
            .padding(spacing::XXS)
            .style(styles::button::close);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(status_glyph::small(GlyphKind::Error))
            .push(Text::new(self.message).size(typography::BODY))
            .push(Space::new().width(Length::Fill))
            .push(pointer::tracked(close, self.on_dismiss));

        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(styles::container::danger_banner)
            .into()
    }
}
