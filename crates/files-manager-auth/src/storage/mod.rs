//! Collaborator interfaces consumed by the auth core.
//!
//! - [`SessionStore`] - ephemeral key-value store with per-key expiry
//! - [`UserLookup`] - resolves verified credentials to an identity
//! - [`ReadinessProbe`] - liveness capability queried by health checks
//!
//! # Implementations
//!
//! Backends are provided by the serving binary (`files-manager-server`):
//! a Redis-backed and a local in-process session store, and an in-memory user
//! directory.

use async_trait::async_trait;

pub mod session;
pub mod user;

pub use session::{SESSION_KEY_PREFIX, SessionStore, session_key};
pub use user::{CredentialQuery, UserLookup};

/// Readiness capability of a collaborator.
///
/// Replaces a mutable "connected" flag: callers ask the collaborator itself
/// whether it can currently serve requests.
#[async_trait]
pub trait ReadinessProbe: Send + Sync {
    /// Returns `true` if the collaborator can currently serve requests.
    async fn is_ready(&self) -> bool;
}
