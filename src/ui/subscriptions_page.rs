// SPDX-License-Identifier: MPL-2.0
//! Subscriptions page: picks between a full-page curtain and the detail view.
//!
//! Rendering is a pure function of [`Props`]. The page owns no state; every
//! user action leaves as a [`Message`] carrying the mouse button that caused
//! it, and [`Message::intent`] turns primary clicks into client intents.

use crate::client::Intent;
use crate::domain::{ProductRecord, Status};
use crate::i18n::Translate;
use crate::ui::components::{CurtainIcon, Curtains, Listing};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::pointer::{primary_click, PointerButton};
use crate::ui::styles;
use crate::ui::subscription_status::SubscriptionStatus;
use crate::ui::widgets::{status_glyph, GlyphKind};
use iced::widget::{keyed_column, rule, Column, Container, Row, Scrollable, Text};
use iced::{alignment, Element, Length};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Register(PointerButton),
    Unregister(PointerButton),
    DismissError(PointerButton),
}

impl Message {
    /// The client intent behind this message, if the click counts.
    #[must_use]
    pub fn intent(self) -> Option<Intent> {
        match self {
            Message::Register(button) => primary_click(button, Intent::Register),
            Message::Unregister(button) => primary_click(button, Intent::Unregister),
            Message::DismissError(button) => primary_click(button, Intent::DismissError),
        }
    }

    #[must_use]
    pub fn button(self) -> PointerButton {
        match self {
            Message::Register(button)
            | Message::Unregister(button)
            | Message::DismissError(button) => button,
        }
    }
}

/// Everything the page renders from.
#[derive(Debug, Clone, Copy)]
pub struct Props<'a> {
    pub status: &'a Status,
    pub error: Option<&'a str>,
    pub products: &'a [ProductRecord],
    /// Whether the client finished loading its configuration.
    pub config_loaded: bool,
}

/// Which curtain to show when the detail view is not available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurtainsKind {
    /// Status not known yet or client still starting.
    Loading,
    AccessDenied,
    /// Any other status that cannot be shown in detail.
    Unreachable,
}

impl CurtainsKind {
    pub fn message_key(self) -> &'static str {
        match self {
            CurtainsKind::Loading => "curtains-updating-message",
            CurtainsKind::AccessDenied => "curtains-access-denied-message",
            CurtainsKind::Unreachable => "curtains-unreachable-message",
        }
    }

    pub fn description_key(self) -> &'static str {
        match self {
            CurtainsKind::Loading => "curtains-updating-description",
            CurtainsKind::AccessDenied => "curtains-access-denied-description",
            CurtainsKind::Unreachable => "curtains-unreachable-description",
        }
    }

    pub fn shows_spinner(self) -> bool {
        matches!(self, CurtainsKind::Loading)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Curtains(CurtainsKind),
    Detail,
}

/// Decides what the page shows for the given props.
#[must_use]
pub fn layout(props: &Props<'_>) -> Layout {
    if !props.config_loaded || !props.status.is_connected() {
        Layout::Curtains(curtains_kind(props))
    } else {
        Layout::Detail
    }
}

/// Whether a spinner is on screen and needs animation frames.
#[must_use]
pub fn is_animating(props: &Props<'_>) -> bool {
    match layout(props) {
        Layout::Curtains(kind) => kind.shows_spinner(),
        Layout::Detail => props.status.is_unregistering(),
    }
}

fn curtains_kind(props: &Props<'_>) -> CurtainsKind {
    match props.status {
        _ if !props.config_loaded => CurtainsKind::Loading,
        Status::Loading => CurtainsKind::Loading,
        Status::AccessDenied => CurtainsKind::AccessDenied,
        _ => CurtainsKind::Unreachable,
    }
}

/// One installed product row.
#[derive(Debug, Clone, Copy)]
pub struct ProductRow<'a> {
    product: &'a ProductRecord,
}

impl<'a> ProductRow<'a> {
    pub fn new(product: &'a ProductRecord) -> Self {
        Self { product }
    }

    pub fn key(&self) -> &'a str {
        &self.product.product_id
    }

    /// Widget key derived from the product id, so rows keep their widget
    /// state when the list is reordered.
    pub fn widget_key(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.product.product_id.hash(&mut hasher);
        hasher.finish()
    }

    pub fn status_key(&self) -> &'static str {
        if self.product.is_subscribed() {
            "product-status-subscribed"
        } else {
            "product-status-not-subscribed"
        }
    }

    pub fn glyph(&self) -> GlyphKind {
        if self.product.is_subscribed() {
            GlyphKind::Ok
        } else {
            GlyphKind::Error
        }
    }

    /// Label/value pairs in display order.
    pub fn fields(&self, i18n: &dyn Translate) -> Vec<(String, String)> {
        let p = self.product;
        vec![
            (i18n.tr("product-field-name"), p.product_name.clone()),
            (i18n.tr("product-field-id"), p.product_id.clone()),
            (i18n.tr("product-field-version"), p.version.clone()),
            (i18n.tr("product-field-arch"), p.arch.clone()),
            (i18n.tr("product-field-status"), i18n.tr(self.status_key())),
            (i18n.tr("product-field-starts"), p.starts.clone()),
            (i18n.tr("product-field-ends"), p.ends.clone()),
        ]
    }

    pub fn view(self, i18n: &dyn Translate) -> Element<'a, Message> {
        let heading = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(status_glyph::small(self.glyph()))
            .push(Text::new(self.product.product_name.as_str()).size(typography::TITLE_SM));

        let fields = self.fields(i18n).into_iter().fold(
            Column::new().spacing(spacing::XXS),
            |column, (label, value)| {
                column.push(
                    Row::new()
                        .spacing(spacing::SM)
                        .push(
                            Text::new(label)
                                .size(typography::BODY)
                                .color(palette::GRAY_400)
                                .width(Length::Fixed(sizing::FIELD_LABEL_WIDTH))
                                .align_x(alignment::Horizontal::Right),
                        )
                        .push(Text::new(value).size(typography::BODY)),
                )
            },
        );

        Container::new(Column::new().spacing(spacing::SM).push(heading).push(fields))
            .width(Length::Fill)
            .padding(spacing::MD)
            .style(styles::container::card)
            .into()
    }
}

/// Per-frame inputs that are not part of the props.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a dyn Translate,
    /// Current spinner angle in radians.
    pub spinner_rotation: f32,
}

pub fn view<'a>(props: Props<'a>, ctx: ViewContext<'_>) -> Element<'a, Message> {
    match layout(&props) {
        Layout::Curtains(kind) => render_curtains(kind, ctx),
        Layout::Detail => render_subscriptions(props, ctx),
    }
}

/// Builds the curtain for a blocked page.
pub fn curtains<'a>(kind: CurtainsKind, ctx: ViewContext<'_>) -> Curtains<'a, Message> {
    let icon = if kind.shows_spinner() {
        CurtainIcon::Spinner {
            rotation: ctx.spinner_rotation,
        }
    } else {
        CurtainIcon::Custom(status_glyph::glyph(GlyphKind::Warning, sizing::ICON_XL))
    };

    Curtains::new(icon)
        .description(ctx.i18n.tr(kind.description_key()))
        .message(ctx.i18n.tr(kind.message_key()))
}

pub fn render_curtains<'a>(kind: CurtainsKind, ctx: ViewContext<'_>) -> Element<'a, Message> {
    curtains(kind, ctx).view()
}

/// Builds the installed products listing.
pub fn products_listing<'a>(
    products: &'a [ProductRecord],
    i18n: &dyn Translate,
) -> Listing<'a, Message> {
    let listing = Listing::new(i18n.tr("products-title"), i18n.tr("products-empty"));
    if products.is_empty() {
        return listing;
    }

    let rows = keyed_column(products.iter().map(|product| {
        let row = ProductRow::new(product);
        (row.widget_key(), row.view(i18n))
    }))
    .spacing(spacing::SM);

    listing.push(rows)
}

pub fn render_subscriptions<'a>(props: Props<'a>, ctx: ViewContext<'_>) -> Element<'a, Message> {
    let status = SubscriptionStatus::new(props.status, props.error)
        .view(ctx.i18n, ctx.spinner_rotation);

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(status)
        .push(rule::horizontal(1))
        .push(products_listing(props.products, ctx.i18n).view());

    Scrollable::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
