//! Axum HTTP handlers for the session endpoints.
//!
//! | Route | Handler |
//! |-------|---------|
//! | `GET /connect` | [`connect_handler`] |
//! | `GET /disconnect` | [`disconnect_handler`] |
//!
//! # Usage
//!
//! ```ignore
//! use axum::Router;
//! use files_manager_auth::http::{AuthHttpState, auth_routes};
//!
//! let app: Router = auth_routes().with_state(AuthHttpState::new(gateway));
//! ```

mod connect;
mod disconnect;
mod error;

use std::sync::Arc;

use axum::{Router, extract::FromRef, routing::get};

use crate::gateway::AuthGateway;

pub use connect::{ConnectResponse, connect_handler};
pub use disconnect::disconnect_handler;
pub use error::ErrorBody;

/// Header carrying the session token on authenticated requests.
pub const SESSION_TOKEN_HEADER: &str = "x-token";

/// State shared by the session handlers and the [`SessionAuth`] extractor.
///
/// [`SessionAuth`]: crate::extractors::SessionAuth
#[derive(Clone)]
pub struct AuthHttpState {
    /// Session lifecycle manager.
    pub gateway: Arc<AuthGateway>,
}

impl AuthHttpState {
    /// Creates the state from a gateway.
    pub fn new(gateway: Arc<AuthGateway>) -> Self {
        Self { gateway }
    }
}

/// Router with the `/connect` and `/disconnect` routes.
pub fn auth_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    AuthHttpState: FromRef<S>,
{
    Router::new()
        .route("/connect", get(connect_handler))
        .route("/disconnect", get(disconnect_handler))
}
