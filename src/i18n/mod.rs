// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Every user-facing string goes through a [`Translate`] implementation that
//! the caller passes into the view functions. The stock implementation,
//! [`fluent::I18n`], uses the Fluent localization system with `.ftl` files
//! embedded at compile time.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, or system settings
//! - POSIX locale names (`fr_FR.UTF-8`) accepted and normalized
//! - Fallback to the bare language, then to the default locale

pub mod fluent;

/// Translation service: turns a message key and named substitutions into
/// user-facing text.
pub trait Translate {
    /// Translates a message without substitutions.
    fn tr(&self, key: &str) -> String;

    /// Translates a message, substituting `{ $name }` placeables.
    fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String;
}
