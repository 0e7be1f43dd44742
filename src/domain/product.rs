// SPDX-License-Identifier: MPL-2.0
//! Installed product records and their entitlement state.

use serde::{Deserialize, Serialize};

/// Raw product status meaning the product is covered by a subscription.
pub const STATUS_SUBSCRIBED: &str = "subscribed";

/// An installed product as reported by the subscriptions client.
///
/// Field names on the wire follow the client's camelCase convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Unique key of the product within a listing.
    pub product_id: String,
    pub product_name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub arch: String,
    /// Raw entitlement status; only [`STATUS_SUBSCRIBED`] is meaningful.
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub starts: String,
    #[serde(default)]
    pub ends: String,
}

impl ProductRecord {
    /// Whether the product is covered by a valid subscription.
    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.status == STATUS_SUBSCRIBED
    }
}
