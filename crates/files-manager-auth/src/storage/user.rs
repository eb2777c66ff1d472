//! User lookup trait.
//!
//! The user directory itself (creation, password provisioning, durable
//! storage) lives outside this crate. The core only asks it one question:
//! which identity, if any, owns these credentials.

use async_trait::async_trait;

use crate::AuthResult;
use crate::types::Identity;

/// Normalized credentials handed to the user directory.
///
/// The secret has already been digested; the plaintext never leaves the
/// verifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialQuery {
    /// Login name presented by the client (an email address).
    pub principal: String,
    /// Lowercase hex digest of the presented secret.
    pub hashed_secret: String,
}

/// Resolves credentials to an identity.
#[async_trait]
pub trait UserLookup: Send + Sync {
    /// Finds the user whose principal and stored hash both match.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(identity))` if exactly that user exists
    /// - `Ok(None)` if no user matches
    ///
    /// # Errors
    ///
    /// Returns `LookupUnavailable` if the directory cannot be reached.
    async fn find_user(&self, query: &CredentialQuery) -> AuthResult<Option<Identity>>;
}
