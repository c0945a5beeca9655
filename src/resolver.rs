//! Role resolution
//!
//! Resolves the signed-in identity to a role snapshot: administrator email
//! override first, then a single store lookup, with every non-success outcome
//! coerced to the least-privileged role. Store unavailability must never grant
//! elevated access except through the override path.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::config::Config;
use crate::identity::Identity;
use crate::role::Role;
use crate::store::RoleStore;

/// Read-only resolution snapshot delivered to consumers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSnapshot {
    /// Resolved role; `None` while loading or when signed out
    pub role: Option<Role>,
    pub is_admin: bool,
    pub is_moderator: bool,
    pub is_field_officer: bool,
    /// Whether a store lookup is still in flight
    pub loading: bool,
}

impl RoleSnapshot {
    /// Snapshot published while a store lookup is in flight
    pub fn loading() -> Self {
        Self {
            role: None,
            is_admin: false,
            is_moderator: false,
            is_field_officer: false,
            loading: true,
        }
    }

    /// Terminal snapshot for a resolved role, or its absence when signed out.
    ///
    /// Capability flags are computed here, so `Admin` always carries the
    /// moderator and field-officer capabilities.
    pub fn resolved(role: Option<Role>) -> Self {
        Self {
            role,
            is_admin: role == Some(Role::Admin),
            is_moderator: role.is_some_and(|r| r.implies_moderator()),
            is_field_officer: role.is_some_and(|r| r.implies_field_officer()),
            loading: false,
        }
    }
}

/// Resolves identities to role snapshots
#[derive(Clone)]
pub struct RoleResolver {
    store: Arc<dyn RoleStore>,
    admin_email: String,
}

impl RoleResolver {
    pub fn new(store: Arc<dyn RoleStore>, config: &Config) -> Self {
        Self {
            store,
            admin_email: config.admin_email.clone(),
        }
    }

    /// Resolve the role for the given identity.
    ///
    /// Infallible by policy: a store failure is logged and coerced to
    /// `Role::User`, never surfaced to the caller. The administrator email
    /// comparison is exact and case-sensitive, and short-circuits the store
    /// lookup entirely.
    pub async fn resolve(&self, identity: Option<&Identity>) -> RoleSnapshot {
        let Some(identity) = identity else {
            return RoleSnapshot::resolved(None);
        };

        if identity.email == self.admin_email {
            debug!(user_id = %identity.id, "administrator email override matched");
            return RoleSnapshot::resolved(Some(Role::Admin));
        }

        let role = match self.store.lookup(&identity.id).await {
            Ok(Some(row)) => match row.role.as_deref() {
                Some(value) if !value.is_empty() => Role::from_stored(value),
                _ => Role::User,
            },
            Ok(None) => Role::User,
            Err(error) => {
                warn!(user_id = %identity.id, %error, "role lookup failed, defaulting to user");
                Role::User
            }
        };

        debug!(user_id = %identity.id, role = %role, "role resolved");
        RoleSnapshot::resolved(Some(role))
    }

    /// Whether resolving this identity requires a store lookup
    fn needs_lookup(&self, identity: &Option<Identity>) -> bool {
        matches!(identity, Some(i) if i.email != self.admin_email)
    }

    /// Spawn the re-evaluation loop.
    ///
    /// The loop resolves the current identity once per transition. When a
    /// lookup is required it first publishes the loading snapshot, then races
    /// the lookup against the next identity change: a transition while the
    /// lookup is outstanding drops the stale future without committing it, so
    /// a slow lookup for a previous identity can never populate the snapshot
    /// for a new one.
    pub fn watch(self, mut identity_rx: watch::Receiver<Option<Identity>>) -> RoleWatch {
        let (tx, rx) = watch::channel(RoleSnapshot::loading());

        let handle = tokio::spawn(async move {
            loop {
                let identity = identity_rx.borrow_and_update().clone();

                if self.needs_lookup(&identity) {
                    tx.send_replace(RoleSnapshot::loading());

                    tokio::select! {
                        snapshot = self.resolve(identity.as_ref()) => {
                            tx.send_replace(snapshot);
                        }
                        changed = identity_rx.changed() => {
                            if changed.is_err() {
                                break;
                            }
                            // Stale lookup dropped; restart with the new identity.
                            continue;
                        }
                    }
                } else {
                    // Signed out or administrator override: resolved immediately,
                    // no loading state and no store call.
                    tx.send_replace(self.resolve(identity.as_ref()).await);
                }

                if identity_rx.changed().await.is_err() {
                    break;
                }
            }
        });

        RoleWatch { rx, handle }
    }
}

/// Handle to a running resolution loop.
///
/// Dropping the handle aborts the loop, which is the unsubscribe path when the
/// owning UI context is torn down.
#[derive(Debug)]
pub struct RoleWatch {
    rx: watch::Receiver<RoleSnapshot>,
    handle: JoinHandle<()>,
}

impl RoleWatch {
    /// The latest published snapshot
    pub fn snapshot(&self) -> RoleSnapshot {
        self.rx.borrow().clone()
    }

    /// Wait for the next snapshot change. Returns `false` if the loop has
    /// stopped.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }

    /// Get an additional receiver for the snapshot channel
    pub fn subscribe(&self) -> watch::Receiver<RoleSnapshot> {
        self.rx.clone()
    }
}

impl Drop for RoleWatch {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
