// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Snapshot(SnapshotError),
}

/// Problems reading a client snapshot fixture.
/// Used to pick a user-friendly, localized notification.
#[derive(Debug, Clone)]
pub enum SnapshotError {
    /// The snapshot file does not exist or cannot be read.
    Unreadable(String),

    /// The file exists but is not valid snapshot TOML.
    Malformed(String),

    /// Two products share the same product id.
    DuplicateProduct(String),
}

impl SnapshotError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SnapshotError::Unreadable(_) => "error-snapshot-unreadable",
            SnapshotError::Malformed(_) => "error-snapshot-malformed",
            SnapshotError::DuplicateProduct(_) => "error-snapshot-duplicate-product",
        }
    }
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Unreadable(msg) => write!(f, "Snapshot unreadable: {}", msg),
            SnapshotError::Malformed(msg) => write!(f, "Snapshot malformed: {}", msg),
            SnapshotError::DuplicateProduct(id) => {
                write!(f, "Duplicate product id in snapshot: {}", id)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Snapshot(e) => write!(f, "Snapshot Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<SnapshotError> for Error {
    fn from(err: SnapshotError) -> Self {
        Error::Snapshot(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
