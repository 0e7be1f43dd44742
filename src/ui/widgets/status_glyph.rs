// SPDX-License-Identifier: MPL-2.0
//! Status glyphs drawn on a canvas: a colored ring with a mark inside.

use crate::ui::design_tokens::{palette, sizing};
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme, Vector};

/// Which mark to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphKind {
    /// Check mark on green.
    Ok,
    /// Cross on red.
    Error,
    /// Exclamation mark on orange.
    Warning,
    /// Cross without a ring, for close controls.
    Close,
}

impl GlyphKind {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            GlyphKind::Ok => palette::SUCCESS_500,
            GlyphKind::Error => palette::ERROR_500,
            GlyphKind::Warning => palette::WARNING_500,
            GlyphKind::Close => palette::GRAY_400,
        }
    }
}

pub struct StatusGlyph {
    cache: Cache,
    kind: GlyphKind,
    size: f32,
}

impl StatusGlyph {
    #[must_use]
    pub fn new(kind: GlyphKind, size: f32) -> Self {
        Self {
            cache: Cache::default(),
            kind,
            size,
        }
    }

    #[must_use]
    pub fn kind(&self) -> GlyphKind {
        self.kind
    }

    pub fn into_element<'a, Message: 'a>(self) -> iced::Element<'a, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

/// Convenience for a glyph element at the given size.
pub fn glyph<'a, Message: 'a>(kind: GlyphKind, size: f32) -> iced::Element<'a, Message> {
    StatusGlyph::new(kind, size).into_element()
}

/// Small glyph sized for list rows and banners.
pub fn small<'a, Message: 'a>(kind: GlyphKind) -> iced::Element<'a, Message> {
    glyph(kind, sizing::ICON_MD)
}

impl<Message> canvas::Program<Message> for StatusGlyph {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let color = self.kind.color();
        let stroke_width = (self.size / 12.0).max(1.5);
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - stroke_width;
                let stroke = Stroke::default()
                    .with_width(stroke_width)
                    .with_color(color)
                    .with_line_cap(canvas::LineCap::Round);

                if self.kind != GlyphKind::Close {
                    frame.stroke(&Path::circle(center, radius), stroke);
                }

                let inner = radius * 0.5;
                let mark = match self.kind {
                    GlyphKind::Ok => Path::new(|b| {
                        b.move_to(center + Vector::new(-inner, 0.0));
                        b.line_to(center + Vector::new(-inner * 0.25, inner * 0.7));
                        b.line_to(center + Vector::new(inner, -inner * 0.6));
                    }),
                    GlyphKind::Error | GlyphKind::Close => Path::new(|b| {
                        b.move_to(center + Vector::new(-inner, -inner));
                        b.line_to(center + Vector::new(inner, inner));
                        b.move_to(center + Vector::new(inner, -inner));
                        b.line_to(center + Vector::new(-inner, inner));
                    }),
                    GlyphKind::Warning => Path::new(|b| {
                        b.move_to(center + Vector::new(0.0, -inner * 1.2));
                        b.line_to(center + Vector::new(0.0, inner * 0.3));
                    }),
                };
                frame.stroke(&mark, stroke);

                if self.kind == GlyphKind::Warning {
                    let dot = Path::circle(
                        Point::new(center.x, center.y + inner * 0.9),
                        stroke_width * 0.6,
                    );
                    frame.fill(&dot, color);
                }
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_colors_are_distinct() {
        let ok = GlyphKind::Ok.color();
        let error = GlyphKind::Error.color();
        let warning = GlyphKind::Warning.color();
        assert_ne!(ok, error);
        assert_ne!(error, warning);
        assert_ne!(ok, warning);
    }

    #[test]
    fn glyph_keeps_kind() {
        assert_eq!(StatusGlyph::new(GlyphKind::Warning, 16.0).kind(), GlyphKind::Warning);
    }
}
