//! Credential verification for HTTP Basic presentations.
//!
//! Parses `Authorization: Basic <base64(principal:secret)>`, digests the
//! secret and asks the [`UserLookup`] collaborator for the owning identity.
//!
//! Every way a presentation can be wrong (missing header, wrong scheme, bad
//! base64, missing colon, empty fields) yields
//! [`AuthError::MalformedPresentation`]. Callers map it to the same
//! `Unauthorized` outcome as a wrong password.

use std::sync::Arc;

use base64::{Engine, engine::general_purpose::STANDARD};
use sha1::{Digest, Sha1};

use crate::AuthResult;
use crate::error::AuthError;
use crate::storage::{CredentialQuery, UserLookup};
use crate::types::Identity;

/// Decoded Basic credentials. Exists only for the duration of one verification.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    /// Login name (an email address).
    pub principal: String,
    /// Plaintext secret.
    pub secret: String,
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("principal", &self.principal)
            .field("secret", &"[redacted]")
            .finish()
    }
}

/// Parses an `Authorization` header value into Basic credentials.
///
/// The header is split on its first space into scheme and payload. The
/// payload is base64 (standard alphabet) of `principal:secret`, split on the
/// first colon, so secrets may themselves contain colons.
///
/// # Errors
///
/// Returns `MalformedPresentation` describing the first problem found.
pub fn parse_authorization(header: &str) -> AuthResult<BasicCredentials> {
    let (scheme, payload) = header
        .trim()
        .split_once(' ')
        .ok_or_else(|| AuthError::malformed("Authorization header has no credentials"))?;

    if !scheme.eq_ignore_ascii_case("basic") {
        return Err(AuthError::malformed(
            "Authorization header must use the Basic scheme",
        ));
    }

    let payload = payload.trim();
    if payload.is_empty() {
        return Err(AuthError::malformed("Authorization header has no credentials"));
    }

    let decoded = STANDARD
        .decode(payload)
        .map_err(|_| AuthError::malformed("Invalid base64 encoding in Authorization header"))?;

    let decoded = String::from_utf8(decoded)
        .map_err(|_| AuthError::malformed("Invalid UTF-8 in decoded credentials"))?;

    let (principal, secret) = decoded
        .split_once(':')
        .ok_or_else(|| AuthError::malformed("Credentials must be in format 'email:password'"))?;

    if principal.is_empty() || secret.is_empty() {
        return Err(AuthError::malformed("Email and password must not be empty"));
    }

    Ok(BasicCredentials {
        principal: principal.to_string(),
        secret: secret.to_string(),
    })
}

/// Digests a secret into the stored hash format: unsalted SHA-1, lowercase hex.
#[must_use]
pub fn hash_secret(secret: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// Resolves credential presentations to identities.
///
/// Stateless apart from its collaborator handle; cheap to clone.
#[derive(Clone)]
pub struct CredentialVerifier {
    users: Arc<dyn UserLookup>,
}

impl CredentialVerifier {
    /// Creates a verifier backed by the given user directory.
    pub fn new(users: Arc<dyn UserLookup>) -> Self {
        Self { users }
    }

    /// Verifies an `Authorization` header value.
    ///
    /// # Errors
    ///
    /// - `MalformedPresentation` if the header is absent or unparseable
    /// - `Unauthenticated` if no user matches
    /// - `LookupUnavailable` if the user directory failed
    pub async fn verify(&self, authorization: Option<&str>) -> AuthResult<Identity> {
        let header =
            authorization.ok_or_else(|| AuthError::malformed("Missing Authorization header"))?;

        let credentials = parse_authorization(header)?;

        let query = CredentialQuery {
            hashed_secret: hash_secret(&credentials.secret),
            principal: credentials.principal,
        };

        match self.users.find_user(&query).await? {
            Some(identity) => {
                tracing::debug!(identity = %identity, "Credentials verified");
                Ok(identity)
            }
            None => {
                tracing::debug!(principal = %query.principal, "No user matches credentials");
                Err(AuthError::Unauthenticated)
            }
        }
    }
}
