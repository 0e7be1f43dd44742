// SPDX-License-Identifier: MPL-2.0
//! Full-page placeholder shown while nothing meaningful can be displayed.
//!
//! A centered block with an icon, an optional heading (the description) and
//! an optional paragraph below it (the message).
//!
//! # Usage
//!
//! ```ignore
//! Curtains::new(CurtainIcon::Spinner { rotation })
//!     .description(i18n.tr("curtains-updating-description"))
//!     .message(i18n.tr("curtains-updating-message"))
//!     .view()
//! ```

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::widgets::{status_glyph, AnimatedSpinner, GlyphKind};
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

/// Icon shown at the top of the curtains.
pub enum CurtainIcon<'a, Message> {
    /// Large animated spinner at the given rotation (radians).
    Spinner { rotation: f32 },
    /// Large error glyph.
    Error,
    /// Caller-built element, rendered as-is.
    Custom(Element<'a, Message>),
}

impl<Message> std::fmt::Debug for CurtainIcon<'_, Message> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CurtainIcon::Spinner { rotation } => {
                f.debug_struct("Spinner").field("rotation", rotation).finish()
            }
            CurtainIcon::Error => f.write_str("Error"),
            CurtainIcon::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl<'a, Message: 'a> CurtainIcon<'a, Message> {
    fn into_element(self) -> Element<'a, Message> {
        match self {
            CurtainIcon::Spinner { rotation } => {
                AnimatedSpinner::new(palette::PRIMARY_500, rotation).into_element()
            }
            CurtainIcon::Error => status_glyph::glyph(GlyphKind::Error, sizing::ICON_XL),
            CurtainIcon::Custom(element) => element,
        }
    }
}

#[derive(Debug)]
pub struct Curtains<'a, Message> {
    icon: CurtainIcon<'a, Message>,
    description: Option<String>,
    message: Option<String>,
}

impl<'a, Message: 'a> Curtains<'a, Message> {
    pub fn new(icon: CurtainIcon<'a, Message>) -> Self {
        Self {
            icon,
            description: None,
            message: None,
        }
    }

    /// Sets the heading line.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the paragraph below the heading.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn icon(&self) -> &CurtainIcon<'a, Message> {
        &self.icon
    }

    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn message_text(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn view(self) -> Element<'a, Message> {
        let mut content = Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .max_width(sizing::CURTAINS_MAX_WIDTH)
            .push(self.icon.into_element());

        if let Some(description) = self.description {
            content = content.push(
                Text::new(description)
                    .size(typography::TITLE_LG)
                    .align_x(alignment::Horizontal::Center),
            );
        }

        if let Some(message) = self.message {
            content = content.push(
                Text::new(message)
                    .size(typography::BODY)
                    .color(palette::GRAY_400)
                    .align_x(alignment::Horizontal::Center),
            );
        }

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .padding(spacing::LG)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    enum TestMessage {}

    #[test]
    fn builder_keeps_texts() {
        let curtains: Curtains<'_, TestMessage> = Curtains::new(CurtainIcon::Error)
            .description("Unable to connect")
            .message("Please retry");

        assert_eq!(curtains.description_text(), Some("Unable to connect"));
        assert_eq!(curtains.message_text(), Some("Please retry"));
        assert!(matches!(curtains.icon(), CurtainIcon::Error));
    }

    #[test]
    fn texts_are_optional() {
        let curtains: Curtains<'_, TestMessage> =
            Curtains::new(CurtainIcon::Spinner { rotation: 0.5 });

        assert!(curtains.description_text().is_none());
        assert!(curtains.message_text().is_none());
        assert!(matches!(
            curtains.icon(),
            CurtainIcon::Spinner { rotation } if *rotation == 0.5
        ));
        let _ = curtains.view();
    }

    #[test]
    fn custom_icon_is_kept() {
        let custom = status_glyph::small::<TestMessage>(GlyphKind::Warning);
        let curtains = Curtains::new(CurtainIcon::Custom(custom)).message("Access denied");
        assert!(matches!(curtains.icon(), CurtainIcon::Custom(_)));
        let _ = curtains.view();
    }
}
