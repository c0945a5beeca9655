//! # AgriLink roles client for Rust
//!
//! Client-side role resolution for the AgriLink platform. Resolves the
//! signed-in principal's authorization role and exposes derived capability
//! flags to consuming UI code.
//!
//! ## Features
//!
//! - **Administrator override**: a configured administrator email resolves to
//!   `admin` before any remote lookup
//! - **Role store lookup**: one query against the hosted backend's `user_roles`
//!   endpoint per identity transition
//! - **Fail-safe-low**: store failures, missing rows, and unrecognized stored
//!   values all coerce to the least-privileged `user` role
//! - **Identity subscription**: a watch loop re-resolves on every sign-in,
//!   sign-out, and user switch, discarding stale in-flight lookups
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use agrilink_roles::{Config, HttpRoleStore, Identity, IdentityFeed, RoleResolver};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::new("https://backend.agrilink.example")
//!         .with_api_key("anon-key")
//!         .with_admin_email("ops@agrilink.example");
//!
//!     let store = Arc::new(HttpRoleStore::new(config.clone())?);
//!     let resolver = RoleResolver::new(store, &config);
//!
//!     let feed = IdentityFeed::new();
//!     let mut roles = resolver.watch(feed.subscribe());
//!
//!     feed.set(Some(Identity::new("u1", "farmer@x.com")));
//!     while roles.changed().await {
//!         let snapshot = roles.snapshot();
//!         if !snapshot.loading {
//!             println!("resolved: {:?}", snapshot.role);
//!             break;
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod identity;
pub mod resolver;
pub mod role;
pub mod store;

// Re-export main types
pub use config::{Config, DEFAULT_ADMIN_EMAIL};
pub use error::{Error, Result};
pub use identity::{Identity, IdentityFeed};
pub use resolver::{RoleResolver, RoleSnapshot, RoleWatch};
pub use role::Role;
pub use store::{HttpRoleStore, RoleStore, StoredRole};
