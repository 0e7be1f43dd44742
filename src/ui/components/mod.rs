// SPDX-License-Identifier: MPL-2.0
//! Reusable building blocks of the subscriptions page.

pub mod curtains;
pub mod dismissable_error;
pub mod listing;

pub use curtains::{CurtainIcon, Curtains};
pub use dismissable_error::DismissableError;
pub use listing::Listing;
