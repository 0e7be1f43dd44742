// SPDX-License-Identifier: MPL-2.0
//! Boundary to the subscriptions client.
//!
//! The page never talks to subscription-manager itself. It reads a
//! [`Snapshot`] and the [`ClientConfig`] readiness flag from a
//! [`SubscriptionsClient`], and hands user intent back as [`Intent`]s.
//! Transport, retries and timing are the client's business.

mod fixture;

pub use fixture::FixtureClient;

use crate::domain::{ProductRecord, Status};
use crate::error::Result;

/// Shared configuration state of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClientConfig {
    /// Whether the client finished loading its own configuration.
    pub loaded: bool,
}

/// Point-in-time view of what the client knows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    pub status: Status,
    /// Last operational error, cleared by [`SubscriptionsClient::dismiss_error`].
    pub error: Option<String>,
    /// Installed products, in the order the client reports them.
    pub products: Vec<ProductRecord>,
}

/// The collaborator owning subscription state.
///
/// Intent methods are fire-and-forget and must tolerate repeated calls.
pub trait SubscriptionsClient {
    fn config(&self) -> ClientConfig;

    fn snapshot(&self) -> &Snapshot;

    /// Begin registering the host.
    fn register(&mut self);

    /// Begin unregistering the host.
    fn unregister(&mut self);

    /// Clear the currently displayed error.
    fn dismiss_error(&mut self);

    /// Gives the client a chance to refresh its snapshot.
    ///
    /// Returns `true` when the snapshot changed.
    fn poll(&mut self) -> Result<bool>;
}

/// A user request forwarded to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Register,
    Unregister,
    DismissError,
}

impl Intent {
    /// Forwards the intent to the client.
    pub fn apply(self, client: &mut dyn SubscriptionsClient) {
        match self {
            Intent::Register => client.register(),
            Intent::Unregister => client.unregister(),
            Intent::DismissError => client.dismiss_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingClient {
        snapshot: Snapshot,
        calls: Vec<&'static str>,
    }

    impl SubscriptionsClient for RecordingClient {
        fn config(&self) -> ClientConfig {
            ClientConfig { loaded: true }
        }

        fn snapshot(&self) -> &Snapshot {
            &self.snapshot
        }

        fn register(&mut self) {
            self.calls.push("register");
        }

        fn unregister(&mut self) {
            self.calls.push("unregister");
        }

        fn dismiss_error(&mut self) {
            self.calls.push("dismiss");
        }

        fn poll(&mut self) -> Result<bool> {
            Ok(false)
        }
    }

    #[test]
    fn intents_reach_the_matching_client_call() {
        let mut client = RecordingClient::default();
        Intent::Register.apply(&mut client);
        Intent::Unregister.apply(&mut client);
        Intent::DismissError.apply(&mut client);
        Intent::DismissError.apply(&mut client);
        assert_eq!(
            client.calls,
            vec!["register", "unregister", "dismiss", "dismiss"]
        );
    }

    #[test]
    fn default_snapshot_is_loading() {
        let snapshot = Snapshot::default();
        assert_eq!(snapshot.status, Status::Loading);
        assert!(snapshot.error.is_none());
        assert!(snapshot.products.is_empty());
    }
}
