// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure types with no UI dependencies.
//!
//! # Modules
//!
//! - [`status`]: Registration status ([`Status`](status::Status))
//! - [`product`]: Installed products ([`ProductRecord`](product::ProductRecord))
//! - [`client`]: Polling values ([`PollInterval`](client::PollInterval))
//! - [`diagnostics`]: Diagnostics values ([`BufferCapacity`](diagnostics::BufferCapacity))

pub mod client;
pub mod diagnostics;
pub mod product;
pub mod status;

pub use product::ProductRecord;
pub use status::Status;
