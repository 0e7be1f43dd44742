// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Builds the page props from the client snapshot and hands them to the
//! subscriptions page.

use super::Message;
use crate::client::SubscriptionsClient;
use crate::i18n::Translate;
use crate::ui::subscriptions_page::{self, Props};
use iced::widget::Container;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a dyn Translate,
    pub client: &'a dyn SubscriptionsClient,
    pub spinner_rotation: f32,
}

/// Page props for the client's current snapshot.
pub fn props(client: &dyn SubscriptionsClient) -> Props<'_> {
    let snapshot = client.snapshot();
    Props {
        status: &snapshot.status,
        error: snapshot.error.as_deref(),
        products: &snapshot.products,
        config_loaded: client.config().loaded,
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = subscriptions_page::view(
        props(ctx.client),
        subscriptions_page::ViewContext {
            i18n: ctx.i18n,
            spinner_rotation: ctx.spinner_rotation,
        },
    )
    .map(Message::Page);

    Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
