//! In-memory user directory.
//!
//! Holds the credential records consulted by `/connect`. Records are keyed by
//! email; the stored secret is the digest produced by
//! [`files_manager_auth::hash_secret`], never the plaintext.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use files_manager_auth::{AuthResult, CredentialQuery, Identity, ReadinessProbe, UserLookup};

/// A stored user credential record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: Identity,
    pub email: String,
    /// SHA-1 lowercase hex digest of the password.
    pub password_hash: String,
}

/// Concurrent email → record map. Cheap to clone; clones share records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    users: Arc<DashMap<String, UserRecord>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the record for `record.email`.
    pub fn insert(&self, record: UserRecord) {
        self.users.insert(record.email.clone(), record);
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserLookup for InMemoryUserDirectory {
    async fn find_user(&self, query: &CredentialQuery) -> AuthResult<Option<Identity>> {
        let identity = self
            .users
            .get(&query.principal)
            .filter(|record| record.password_hash == query.hashed_secret)
            .map(|record| record.id.clone());
        Ok(identity)
    }
}

#[async_trait]
impl ReadinessProbe for InMemoryUserDirectory {
    async fn is_ready(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use files_manager_auth::hash_secret;

    fn directory() -> InMemoryUserDirectory {
        let directory = InMemoryUserDirectory::new();
        directory.insert(UserRecord {
            id: Identity::new("u1"),
            email: "bob@example.com".into(),
            password_hash: hash_secret("secret"),
        });
        directory
    }

    fn query(principal: &str, secret: &str) -> CredentialQuery {
        CredentialQuery {
            principal: principal.into(),
            hashed_secret: hash_secret(secret),
        }
    }

    #[tokio::test]
    async fn finds_user_by_email_and_digest() {
        let found = directory()
            .find_user(&query("bob@example.com", "secret"))
            .await
            .unwrap();
        assert_eq!(found, Some(Identity::new("u1")));
    }

    #[tokio::test]
    async fn wrong_secret_or_unknown_email_is_none() {
        let directory = directory();
        assert!(
            directory
                .find_user(&query("bob@example.com", "nope"))
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            directory
                .find_user(&query("eve@example.com", "secret"))
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn email_match_is_exact() {
        let found = directory()
            .find_user(&query("Bob@Example.com", "secret"))
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn insert_replaces_by_email() {
        let directory = directory();
        directory.insert(UserRecord {
            id: Identity::new("u9"),
            email: "bob@example.com".into(),
            password_hash: hash_secret("other"),
        });
        assert_eq!(directory.len(), 1);
        assert!(!directory.is_empty());
    }
}
