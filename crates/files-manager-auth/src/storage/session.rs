//! Session store trait.
//!
//! # Implementation Notes
//!
//! Implementations should:
//!
//! - Treat the store as the only authority on expiry (no separate sweeper)
//! - Make `del` idempotent
//! - Report every I/O failure as [`AuthError::StoreUnavailable`], never as an
//!   absent key
//!
//! # Security Considerations
//!
//! - Never log keys: they embed the session token
//!
//! [`AuthError::StoreUnavailable`]: crate::AuthError::StoreUnavailable

use std::time::Duration;

use async_trait::async_trait;

use crate::AuthResult;

/// Prefix of every session key (`auth_<token>`).
pub const SESSION_KEY_PREFIX: &str = "auth_";

/// Builds the store key for a session token.
#[must_use]
pub fn session_key(token: &str) -> String {
    format!("{SESSION_KEY_PREFIX}{token}")
}

/// String-keyed ephemeral store with per-key expiration.
///
/// The store performs no business validation; it is a pure mapping with TTL.
///
/// # Example Implementation
///
/// ```ignore
/// use files_manager_auth::storage::SessionStore;
/// use files_manager_auth::AuthResult;
///
/// struct NullStore;
///
/// #[async_trait::async_trait]
/// impl SessionStore for NullStore {
///     async fn get(&self, _key: &str) -> AuthResult<Option<String>> {
///         Ok(None)
///     }
///     async fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> AuthResult<()> {
///         Ok(())
///     }
///     async fn del(&self, _key: &str) -> AuthResult<()> {
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key was never set, was deleted, or its TTL
    /// elapsed.
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` if the store cannot be reached.
    async fn get(&self, key: &str) -> AuthResult<Option<String>>;

    /// Creates or overwrites `key`, (re)starting its expiry clock at `ttl`.
    ///
    /// Returns once the store has acknowledged the write.
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` if the write did not land.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AuthResult<()>;

    /// Deletes `key`. Deleting an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` if the store cannot be reached. The key then
    /// survives until its TTL elapses.
    async fn del(&self, key: &str) -> AuthResult<()>;
}
