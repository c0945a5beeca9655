//! Identity provider seam
//!
//! The host application owns the session; this module only observes it.
//! [`IdentityFeed`] is the publication side: the host calls [`IdentityFeed::set`]
//! on sign-in, sign-out, and user switch, and resolvers subscribe to receive
//! each transition.

use tokio::sync::watch;

/// The signed-in principal as observed from the host application's session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Opaque user identifier, the role store lookup key
    pub id: String,
    /// Email address, used only for the administrator override
    pub email: String,
}

impl Identity {
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
        }
    }
}

/// Publishes identity transitions to subscribed resolvers.
///
/// Backed by a `tokio::sync::watch` channel: subscribers always see the latest
/// identity, and a transition that arrives while a subscriber is busy replaces
/// any earlier unseen value. Dropping the feed ends all subscriptions.
#[derive(Debug)]
pub struct IdentityFeed {
    tx: watch::Sender<Option<Identity>>,
}

impl IdentityFeed {
    /// Create a feed with no signed-in identity
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    /// Publish an identity transition. `None` means signed out.
    pub fn set(&self, identity: Option<Identity>) {
        self.tx.send_replace(identity);
    }

    /// The currently published identity
    pub fn current(&self) -> Option<Identity> {
        self.tx.borrow().clone()
    }

    /// Subscribe to identity transitions
    pub fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.tx.subscribe()
    }
}

impl Default for IdentityFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_feed_publishes_transitions() {
        let feed = IdentityFeed::new();
        let mut rx = feed.subscribe();

        assert_eq!(feed.current(), None);

        feed.set(Some(Identity::new("u1", "farmer@x.com")));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().as_ref().map(|i| i.id.clone()), Some("u1".to_string()));

        feed.set(None);
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_none());
    }

    #[tokio::test]
    async fn test_subscriber_sees_latest_value_only() {
        let feed = IdentityFeed::new();
        let mut rx = feed.subscribe();

        feed.set(Some(Identity::new("u1", "a@x.com")));
        feed.set(Some(Identity::new("u2", "b@x.com")));

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().as_ref().map(|i| i.id.clone()), Some("u2".to_string()));
        assert!(!rx.has_changed().unwrap());
    }
}
