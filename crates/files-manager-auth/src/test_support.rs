//! Test doubles shared by the unit tests of this crate.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use tokio::time::Instant;

use crate::AuthResult;
use crate::config::SessionConfig;
use crate::credentials::{CredentialVerifier, hash_secret};
use crate::error::AuthError;
use crate::gateway::AuthGateway;
use crate::storage::{CredentialQuery, SessionStore, UserLookup};
use crate::types::Identity;

/// Fixed user table: bob@example.com/secret → u1, alice@example.com/wonderland → u2.
pub struct StaticUsers(HashMap<(String, String), Identity>);

impl Default for StaticUsers {
    fn default() -> Self {
        let entries = [
            ("bob@example.com", "secret", "u1"),
            ("alice@example.com", "wonderland", "u2"),
        ];
        Self(
            entries
                .iter()
                .map(|(email, password, id)| {
                    (
                        (email.to_string(), hash_secret(password)),
                        Identity::new(*id),
                    )
                })
                .collect(),
        )
    }
}

#[async_trait]
impl UserLookup for StaticUsers {
    async fn find_user(&self, query: &CredentialQuery) -> AuthResult<Option<Identity>> {
        Ok(self
            .0
            .get(&(query.principal.clone(), query.hashed_secret.clone()))
            .cloned())
    }
}

/// Expiring map driven by Tokio's clock, so paused tests control time.
#[derive(Default)]
pub struct MemoryStore(Mutex<HashMap<String, (String, Instant)>>);

impl MemoryStore {
    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn get(&self, key: &str) -> AuthResult<Option<String>> {
        let map = self.0.lock().unwrap();
        Ok(map
            .get(key)
            .filter(|(_, expires_at)| Instant::now() < *expires_at)
            .map(|(value, _)| value.clone()))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AuthResult<()> {
        self.0
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), Instant::now() + ttl));
        Ok(())
    }

    async fn del(&self, key: &str) -> AuthResult<()> {
        self.0.lock().unwrap().remove(key);
        Ok(())
    }
}

/// Store whose every command fails.
pub struct DownStore;

#[async_trait]
impl SessionStore for DownStore {
    async fn get(&self, _key: &str) -> AuthResult<Option<String>> {
        Err(AuthError::store_unavailable("connection refused"))
    }

    async fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> AuthResult<()> {
        Err(AuthError::store_unavailable("connection refused"))
    }

    async fn del(&self, _key: &str) -> AuthResult<()> {
        Err(AuthError::store_unavailable("connection refused"))
    }
}

pub fn basic(raw: &str) -> String {
    format!("Basic {}", STANDARD.encode(raw))
}

pub fn gateway_with(store: Arc<dyn SessionStore>, ttl_secs: u64) -> AuthGateway {
    AuthGateway::with_config(
        CredentialVerifier::new(Arc::new(StaticUsers::default())),
        store,
        &SessionConfig { ttl_secs },
    )
}
