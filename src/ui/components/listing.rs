// SPDX-License-Identifier: MPL-2.0
//! Titled list container.
//!
//! With children it renders the title followed by the children. Without any
//! it renders the empty caption as its only heading.

use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{Column, Text};
use iced::Element;

pub struct Listing<'a, Message> {
    title: String,
    empty_caption: String,
    children: Vec<Element<'a, Message>>,
}

impl<'a, Message: 'a> Listing<'a, Message> {
    pub fn new(title: impl Into<String>, empty_caption: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            empty_caption: empty_caption.into(),
            children: Vec::new(),
        }
    }

    pub fn push(mut self, child: impl Into<Element<'a, Message>>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The single heading this listing shows: the title, or the empty caption.
    pub fn heading(&self) -> &str {
        if self.has_children() {
            &self.title
        } else {
            &self.empty_caption
        }
    }

    pub fn view(self) -> Element<'a, Message> {
        if self.children.is_empty() {
            return Text::new(self.empty_caption)
                .size(typography::TITLE_SM)
                .color(palette::GRAY_400)
                .into();
        }

        let heading = Text::new(self.title).size(typography::TITLE_MD);

        Column::new()
            .spacing(spacing::SM)
            .push(heading)
            .extend(self.children)
            .into()
    }
}
