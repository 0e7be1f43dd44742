// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for unit tests.

use crate::config::Config;
use crate::domain::ProductRecord;
use crate::i18n::fluent::I18n;

/// Translator pinned to the default English bundle.
pub fn english() -> I18n {
    I18n::new(Some("en-US".into()), &Config::default())
}

/// Product record with plausible field values and the given status.
pub fn product(id: &str, name: &str, status: &str) -> ProductRecord {
    ProductRecord {
        product_id: id.to_string(),
        product_name: name.to_string(),
        version: "1.0".to_string(),
        arch: "x86_64".to_string(),
        status: status.to_string(),
        starts: "2024-01-01".to_string(),
        ends: "2025-01-01".to_string(),
    }
}
