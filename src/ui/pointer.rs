// SPDX-License-Identifier: MPL-2.0
//! Primary-click filtering for actionable controls.
//!
//! Every control on the page reports which mouse button pressed it, and the
//! intent behind the control only goes through for the primary button.
//! [`primary_click`] is the one place that decision is made.

use iced::widget::{button, mouse_area, Button};
use iced::Element;
use serde::{Deserialize, Serialize};

/// Mouse button that pressed a control, numbered like DOM `MouseEvent.button`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    /// Usually the left button (code 0).
    Primary,
    /// Usually the wheel or middle button (code 1).
    Auxiliary,
    /// Usually the right button (code 2).
    Secondary,
}

impl PointerButton {
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            PointerButton::Primary => 0,
            PointerButton::Auxiliary => 1,
            PointerButton::Secondary => 2,
        }
    }

    #[must_use]
    pub const fn is_primary(self) -> bool {
        matches!(self, PointerButton::Primary)
    }
}

/// Lets `intent` through only for a primary-button press.
///
/// ```
/// use iced_subscriptions::ui::pointer::{primary_click, PointerButton};
///
/// assert_eq!(primary_click(PointerButton::Primary, "go"), Some("go"));
/// assert_eq!(primary_click(PointerButton::Secondary, "go"), None);
/// ```
#[must_use]
pub fn primary_click<T>(button: PointerButton, intent: T) -> Option<T> {
    button.is_primary().then_some(intent)
}

/// Makes a button report every mouse button through `on_press`.
///
/// The button handles primary presses itself; the surrounding mouse area
/// picks up auxiliary and secondary presses so they can be filtered the same
/// way. With `on_press` set to `None` the button renders disabled and emits
/// nothing.
pub fn tracked<'a, Message: Clone + 'a>(
    control: Button<'a, Message>,
    on_press: Option<fn(PointerButton) -> Message>,
) -> Element<'a, Message> {
    match on_press {
        Some(on_press) => mouse_area(control.on_press(on_press(PointerButton::Primary)))
            .on_middle_press(on_press(PointerButton::Auxiliary))
            .on_right_press(on_press(PointerButton::Secondary))
            .into(),
        None => control.into(),
    }
}

/// Builds a [`tracked`] button around any content.
pub fn tracked_button<'a, Message: Clone + 'a>(
    content: impl Into<Element<'a, Message>>,
    on_press: Option<fn(PointerButton) -> Message>,
) -> Element<'a, Message> {
    tracked(button(content), on_press)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_dom_numbering() {
        assert_eq!(PointerButton::Primary.code(), 0);
        assert_eq!(PointerButton::Auxiliary.code(), 1);
        assert_eq!(PointerButton::Secondary.code(), 2);
    }

    #[test]
    fn only_primary_passes() {
        assert_eq!(primary_click(PointerButton::Primary, 7), Some(7));
        assert_eq!(primary_click(PointerButton::Auxiliary, 7), None);
        assert_eq!(primary_click(PointerButton::Secondary, 7), None);
    }
}
