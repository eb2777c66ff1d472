//! Session lifecycle orchestration.
//!
//! Per token: Unissued → Active → {Revoked, Expired}. The two terminal states
//! are indistinguishable from the outside: both show up as an absent key in
//! the session store.
//!
//! The gateway holds no session cache and takes no locks. Concurrent
//! operations on the same token race at the store; either outcome is valid.

use std::sync::Arc;
use std::time::Duration;

use time::OffsetDateTime;
use tracing::{debug, info};

use crate::AuthResult;
use crate::config::SessionConfig;
use crate::credentials::CredentialVerifier;
use crate::error::AuthError;
use crate::storage::{SessionStore, session_key};
use crate::types::{Identity, Session, SessionToken};

/// Issues, resolves and revokes session tokens.
#[derive(Clone)]
pub struct AuthGateway {
    verifier: CredentialVerifier,
    sessions: Arc<dyn SessionStore>,
    ttl: Duration,
}

impl AuthGateway {
    /// Creates a gateway with the default session lifetime.
    pub fn new(verifier: CredentialVerifier, sessions: Arc<dyn SessionStore>) -> Self {
        Self::with_config(verifier, sessions, &SessionConfig::default())
    }

    /// Creates a gateway using the given session configuration.
    pub fn with_config(
        verifier: CredentialVerifier,
        sessions: Arc<dyn SessionStore>,
        config: &SessionConfig,
    ) -> Self {
        Self {
            verifier,
            sessions,
            ttl: config.ttl(),
        }
    }

    /// Lifetime granted to new sessions.
    #[must_use]
    pub fn session_ttl(&self) -> Duration {
        self.ttl
    }

    /// Verifies credentials and issues a new session token.
    ///
    /// No uniqueness check is made against the store: a token collision would
    /// overwrite the older session.
    ///
    /// # Errors
    ///
    /// - Any verifier error (`MalformedPresentation`, `Unauthenticated`,
    ///   `LookupUnavailable`)
    /// - `StoreUnavailable` if the session could not be written
    pub async fn establish_session(&self, authorization: Option<&str>) -> AuthResult<Session> {
        let identity = self.verifier.verify(authorization).await?;

        let token = SessionToken::generate();
        // `expires_at` must not trail the store's expiry
        let created_at = OffsetDateTime::now_utc();
        self.sessions
            .set(&session_key(token.as_str()), identity.as_str(), self.ttl)
            .await?;

        info!(
            identity = %identity,
            ttl_secs = self.ttl.as_secs(),
            "Session established"
        );

        Ok(Session {
            token,
            identity,
            created_at,
            ttl: self.ttl,
        })
    }

    /// Returns the identity owning an active session.
    ///
    /// Pure read; no state transition.
    ///
    /// # Errors
    ///
    /// - `UnknownSession` if the token is empty, unknown, revoked or expired
    /// - `StoreUnavailable` if the store failed
    pub async fn resolve_session(&self, token: &str) -> AuthResult<Identity> {
        if token.is_empty() {
            return Err(AuthError::UnknownSession);
        }

        match self.sessions.get(&session_key(token)).await? {
            Some(value) if !value.is_empty() => Ok(Identity::from(value)),
            _ => {
                debug!("Session lookup missed");
                Err(AuthError::UnknownSession)
            }
        }
    }

    /// Revokes an active session.
    ///
    /// Revoking a token that is not active is reported exactly like a token
    /// that never existed.
    ///
    /// # Errors
    ///
    /// - `UnknownSession` if the token is not active
    /// - `StoreUnavailable` if the store failed
    pub async fn terminate_session(&self, token: &str) -> AuthResult<()> {
        let identity = self.resolve_session(token).await?;

        self.sessions.del(&session_key(token)).await?;

        info!(identity = %identity, "Session terminated");
        Ok(())
    }
}
