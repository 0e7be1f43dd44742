// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Everything here follows the Elm-style "state down, messages up" pattern:
//! views are built from borrowed props and report user actions as messages.
//!
//! # Page
//!
//! - [`subscriptions_page`] - Curtains or detail view, picked from the props
//! - [`subscription_status`] - Registration label and register/unregister control
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Curtains, dismissable error banner, titled listing
//! - [`pointer`] - Primary-click filtering for every actionable control
//! - [`widgets`] - Canvas spinner and status glyphs
//! - [`styles`] - Button and container styles
//! - [`design_tokens`] - Colors, spacing, sizing
//! - [`theming`] - Light/Dark/System theme mode

pub mod components;
pub mod design_tokens;
pub mod pointer;
pub mod styles;
pub mod subscription_status;
pub mod subscriptions_page;
pub mod theming;
pub mod widgets;
