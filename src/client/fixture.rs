// SPDX-License-Identifier: MPL-2.0
//! File-backed subscriptions client.
//!
//! Reads a TOML snapshot written by hand or by a test harness and simulates
//! the client side of register/unregister, so the page can run without a
//! subscription service on the machine.
//!
//! ```toml
//! status = "Current"
//! registered_status = "Current"
//! [[products]]
//! productId = "p1"
//! productName = "Acme Tools"
//! status = "subscribed"
//! ```

use super::{ClientConfig, Snapshot, SubscriptionsClient};
use crate::domain::{ProductRecord, Status};
use crate::error::{Result, SnapshotError};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Label used after a successful register when the fixture names none.
pub const DEFAULT_REGISTERED_STATUS: &str = "Current";

/// On-disk snapshot layout.
#[derive(Debug, Deserialize)]
struct SnapshotFile {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default = "default_config_loaded")]
    config_loaded: bool,
    #[serde(default)]
    registered_status: Option<String>,
    /// When set, register fails with this message instead of succeeding.
    #[serde(default)]
    register_error: Option<String>,
    #[serde(default)]
    products: Vec<ProductRecord>,
}

fn default_config_loaded() -> bool {
    true
}

/// Subscriptions client backed by a snapshot file.
#[derive(Debug, Clone)]
pub struct FixtureClient {
    path: Option<PathBuf>,
    last_modified: Option<SystemTime>,
    config: ClientConfig,
    snapshot: Snapshot,
    registered_status: String,
    register_error: Option<String>,
    unregister_pending: bool,
}

impl FixtureClient {
    /// Loads a client from a snapshot file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|err| SnapshotError::Unreadable(format!("{}: {}", path.display(), err)))?;
        let mut client = Self::from_toml(&content)?;
        client.path = Some(path.to_path_buf());
        client.last_modified = modified_time(path);
        Ok(client)
    }

    /// Parses a client from snapshot TOML.
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: SnapshotFile = toml::from_str(content)
            .map_err(|err| SnapshotError::Malformed(err.to_string()))?;
        ensure_unique_products(&file.products)?;

        Ok(Self {
            path: None,
            last_modified: None,
            config: ClientConfig {
                loaded: file.config_loaded,
            },
            snapshot: Snapshot {
                status: Status::from_raw(file.status.as_deref()),
                error: file.error,
                products: file.products,
            },
            registered_status: file
                .registered_status
                .unwrap_or_else(|| DEFAULT_REGISTERED_STATUS.to_string()),
            register_error: file.register_error,
            unregister_pending: false,
        })
    }

    /// A client that reports subscription-manager as missing.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            path: None,
            last_modified: None,
            config: ClientConfig { loaded: true },
            snapshot: Snapshot {
                status: Status::NotFound,
                ..Snapshot::default()
            },
            registered_status: DEFAULT_REGISTERED_STATUS.to_string(),
            register_error: None,
            unregister_pending: false,
        }
    }

    /// Path of the backing snapshot file, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn reload_if_changed(&mut self) -> Result<bool> {
        let Some(path) = self.path.clone() else {
            return Ok(false);
        };
        let modified = modified_time(&path);
        if modified.is_none() || modified == self.last_modified {
            return Ok(false);
        }

        // A broken file is reported once per version, not on every poll.
        self.last_modified = modified;
        let reloaded = Self::from_path(&path)?;
        let changed = reloaded.snapshot != self.snapshot || reloaded.config != self.config;
        *self = reloaded;
        Ok(changed)
    }
}

impl SubscriptionsClient for FixtureClient {
    fn config(&self) -> ClientConfig {
        self.config
    }

    fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    fn register(&mut self) {
        if self.snapshot.status != Status::Unknown {
            return;
        }
        match &self.register_error {
            Some(message) => self.snapshot.error = Some(message.clone()),
            None => {
                self.snapshot.status = Status::Registered(self.registered_status.clone());
                self.snapshot.error = None;
            }
        }
    }

    fn unregister(&mut self) {
        if matches!(self.snapshot.status, Status::Registered(_)) {
            self.snapshot.status = Status::Unregistering;
            self.unregister_pending = true;
        }
    }

    fn dismiss_error(&mut self) {
        self.snapshot.error = None;
    }

    fn poll(&mut self) -> Result<bool> {
        if self.unregister_pending {
            self.unregister_pending = false;
            self.snapshot.status = Status::Unknown;
            return Ok(true);
        }
        self.reload_if_changed()
    }
}

fn ensure_unique_products(products: &[ProductRecord]) -> Result<()> {
    let mut seen = HashSet::new();
    for product in products {
        if !seen.insert(product.product_id.as_str()) {
            return Err(SnapshotError::DuplicateProduct(product.product_id.clone()).into());
        }
    }
    Ok(())
}

fn modified_time(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|meta| meta.modified()).ok()
}
