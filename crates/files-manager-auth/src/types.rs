//! Core session types.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Opaque identifier of a user, owned by the user directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// Wraps a user identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identity, returning the inner identifier.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identity {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Identity {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Opaque session token handed to clients.
///
/// Has no `Display` impl and a redacted `Debug`; tokens must not appear in
/// log lines.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Generates a fresh random token (UUID v4, hyphenated).
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(..)")
    }
}

impl From<&str> for SessionToken {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// An issued session.
///
/// Sessions are never mutated after creation. The session store owns
/// existence; this value only describes what was written.
#[derive(Debug, Clone)]
pub struct Session {
    /// The opaque token returned to the client.
    pub token: SessionToken,
    /// Owner of the session.
    pub identity: Identity,
    /// When the session was issued.
    pub created_at: OffsetDateTime,
    /// Lifetime granted at issuance.
    pub ttl: Duration,
}

impl Session {
    /// Returns the instant after which the store will have dropped the session.
    #[must_use]
    pub fn expires_at(&self) -> OffsetDateTime {
        self.created_at + self.ttl
    }
}
