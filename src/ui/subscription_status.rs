// SPDX-License-Identifier: MPL-2.0
//! Registration status section: heading, optional error banner, status
//! label, and the Register or Unregister control.

use crate::domain::Status;
use crate::i18n::Translate;
use crate::ui::components::DismissableError;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::pointer::{self, PointerButton};
use crate::ui::styles;
use crate::ui::subscriptions_page::Message;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, Column, Row, Text};
use iced::{alignment, Element};

/// Control offered next to the status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusAction {
    Register,
    Unregister { enabled: bool },
}

#[derive(Debug, Clone, Copy)]
pub struct SubscriptionStatus<'a> {
    status: &'a Status,
    error: Option<&'a str>,
}

impl<'a> SubscriptionStatus<'a> {
    pub fn new(status: &'a Status, error: Option<&'a str>) -> Self {
        Self { status, error }
    }

    /// "Status: ..." line. Unregistered hosts get an explanatory sentence
    /// instead of the raw value.
    pub fn label(&self, i18n: &dyn Translate) -> String {
        let status = match self.status {
            Status::Unknown => i18n.tr("status-not-registered"),
            other => other.as_raw().unwrap_or_default().to_string(),
        };
        i18n.tr_with_args("status-label", &[("status", status.as_str())])
    }

    pub fn action(&self) -> StatusAction {
        match self.status {
            Status::Unknown => StatusAction::Register,
            other => StatusAction::Unregister {
                enabled: !other.is_unregistering(),
            },
        }
    }

    /// Whether the unregistering indicator is shown.
    pub fn in_progress(&self) -> bool {
        self.status.is_unregistering()
    }

    pub fn error(&self) -> Option<&'a str> {
        self.error
    }

    pub fn view(self, i18n: &dyn Translate, spinner_rotation: f32) -> Element<'a, Message> {
        let mut content = Column::new().spacing(spacing::SM).push(
            Text::new(i18n.tr("subscriptions-heading")).size(typography::TITLE_MD),
        );

        if let Some(error) = self.error {
            content = content.push(
                DismissableError::new(error)
                    .on_dismiss(Message::DismissError)
                    .view(),
            );
        }

        content = content.push(Text::new(self.label(i18n)).size(typography::BODY));

        let control = match self.action() {
            StatusAction::Register => pointer::tracked(
                button(Text::new(i18n.tr("register-button")))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::primary),
                Some(Message::Register),
            ),
            StatusAction::Unregister { enabled } => pointer::tracked(
                button(Text::new(i18n.tr("unregister-button")))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::primary),
                enabled.then_some(Message::Unregister as fn(PointerButton) -> Message),
            ),
        };

        let mut actions = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(control);

        if self.in_progress() {
            actions = actions
                .push(AnimatedSpinner::small(palette::PRIMARY_500, spinner_rotation).into_element())
                .push(Text::new(i18n.tr("unregistering-note")).size(typography::BODY));
        }

        content.push(actions).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::english;

    #[test]
    fn unknown_offers_register() {
        let status = Status::Unknown;
        let section = SubscriptionStatus::new(&status, None);
        assert_eq!(section.action(), StatusAction::Register);
        assert!(!section.in_progress());
        assert_eq!(
            section.label(&english()),
            "Status: This system is currently not registered."
        );
    }

    #[test]
    fn registered_offers_enabled_unregister() {
        let status = Status::from_raw(Some("registered-to-acme"));
        let section = SubscriptionStatus::new(&status, None);
        assert_eq!(section.action(), StatusAction::Unregister { enabled: true });
        assert_eq!(section.label(&english()), "Status: registered-to-acme");
    }

    #[test]
    fn unregistering_disables_control_and_shows_progress() {
        let status = Status::Unregistering;
        let section = SubscriptionStatus::new(&status, None);
        assert_eq!(section.action(), StatusAction::Unregister { enabled: false });
        assert!(section.in_progress());
        assert_eq!(section.label(&english()), "Status: unregistering");
    }

    #[test]
    fn error_is_kept_for_banner() {
        let status = Status::from_raw(Some("registered"));
        let section = SubscriptionStatus::new(&status, Some("network timeout"));
        assert_eq!(section.error(), Some("network timeout"));
        let _ = section.view(&english(), 0.0);
    }
}
