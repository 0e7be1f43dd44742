// SPDX-License-Identifier: MPL-2.0
//! `iced_subscriptions` renders a subscription status page with the Iced GUI
//! framework.
//!
//! The page shows whether the host is registered, lists the installed
//! products with their entitlement status, and forwards register and
//! unregister requests to a [`client::SubscriptionsClient`]. It owns no
//! subscription state of its own.

pub mod app;
pub mod client;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
