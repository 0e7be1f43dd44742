// SPDX-License-Identifier: MPL-2.0
pub mod animated_spinner;
pub mod status_glyph;

pub use animated_spinner::AnimatedSpinner;
pub use status_glyph::{GlyphKind, StatusGlyph};
