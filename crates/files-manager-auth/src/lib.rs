//! # files-manager-auth
//!
//! Client authentication and session token lifecycle for the Files Manager
//! API.
//!
//! This crate provides:
//! - Basic credential parsing and verification against a user directory
//! - Opaque session token issuance with a time-to-live
//! - Token-to-identity resolution and explicit revocation
//! - Axum handlers for `GET /connect` and `GET /disconnect`
//!
//! ## Overview
//!
//! ```text
//! Authorization header → CredentialVerifier → Identity
//!                                               ↓
//!                     AuthGateway → SessionStore.set("auth_<token>", identity, ttl)
//!
//! X-Token → AuthGateway → SessionStore.get / del
//! ```
//!
//! Storage is consumed through traits ([`SessionStore`], [`UserLookup`]);
//! concrete backends live in the serving binary.
//!
//! ## Modules
//!
//! - [`config`] - Session lifetime configuration
//! - [`credentials`] - Basic credential parsing and verification
//! - [`gateway`] - Session establish / resolve / terminate
//! - [`storage`] - Collaborator traits
//! - [`http`] - Axum HTTP handlers
//! - [`extractors`] - Axum extractor for session-authenticated routes

pub mod config;
pub mod credentials;
pub mod error;
pub mod extractors;
pub mod gateway;
pub mod http;
pub mod storage;
pub mod types;

#[cfg(test)]
mod test_support;

pub use config::{ConfigError, DEFAULT_SESSION_TTL_SECS, SessionConfig};
pub use credentials::{BasicCredentials, CredentialVerifier, hash_secret, parse_authorization};
pub use error::{AuthError, ErrorCategory};
pub use extractors::SessionAuth;
pub use gateway::AuthGateway;
pub use http::{
    AuthHttpState, ConnectResponse, ErrorBody, SESSION_TOKEN_HEADER, auth_routes,
    connect_handler, disconnect_handler,
};
pub use storage::{
    CredentialQuery, ReadinessProbe, SESSION_KEY_PREFIX, SessionStore, UserLookup, session_key,
};
pub use types::{Identity, Session, SessionToken};

/// Type alias for auth results.
pub type AuthResult<T> = Result<T, AuthError>;

/// Prelude module for convenient imports.
///
/// ```ignore
/// use files_manager_auth::prelude::*;
/// ```
pub mod prelude {
    pub use crate::AuthResult;
    pub use crate::config::SessionConfig;
    pub use crate::credentials::CredentialVerifier;
    pub use crate::error::AuthError;
    pub use crate::extractors::SessionAuth;
    pub use crate::gateway::AuthGateway;
    pub use crate::http::{AuthHttpState, auth_routes};
    pub use crate::storage::{CredentialQuery, ReadinessProbe, SessionStore, UserLookup};
    pub use crate::types::{Identity, Session, SessionToken};
}
