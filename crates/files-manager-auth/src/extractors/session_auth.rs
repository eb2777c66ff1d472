//! Session token extractor.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use crate::error::AuthError;
use crate::http::{AuthHttpState, SESSION_TOKEN_HEADER};
use crate::types::Identity;

/// Identity of the caller, resolved from the `X-Token` header.
///
/// Rejects with [`AuthError`], which renders as `401 {"error":"Unauthorized"}`
/// for a missing, unknown or expired token and `503` if the store is down.
#[derive(Debug, Clone)]
pub struct SessionAuth(pub Identity);

impl<S> FromRequestParts<S> for SessionAuth
where
    S: Send + Sync,
    AuthHttpState: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthHttpState::from_ref(state);

        let token = parts
            .headers
            .get(SESSION_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or(AuthError::UnknownSession)?;

        let identity = auth_state.gateway.resolve_session(token).await?;

        tracing::debug!(
            identity = %identity,
            endpoint = %parts.uri.path(),
            method = %parts.method,
            "Request authenticated via session token"
        );

        Ok(SessionAuth(identity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use tower::ServiceExt;

    use crate::test_support::{MemoryStore, basic, gateway_with};

    async fn whoami(SessionAuth(identity): SessionAuth) -> String {
        identity.into_inner()
    }

    fn app(state: AuthHttpState) -> Router {
        Router::new()
            .route("/whoami", get(whoami))
            .with_state(state)
    }

    #[tokio::test]
    async fn test_extracts_identity_from_token() {
        let gateway = Arc::new(gateway_with(Arc::new(MemoryStore::default()), 60));
        let session = gateway
            .establish_session(Some(&basic("alice@example.com:wonderland")))
            .await
            .unwrap();

        let response = app(AuthHttpState::new(gateway))
            .oneshot(
                Request::get("/whoami")
                    .header("X-Token", session.token.as_str())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"u2");
    }

    #[tokio::test]
    async fn test_missing_or_unknown_token_is_unauthorized() {
        let gateway = Arc::new(gateway_with(Arc::new(MemoryStore::default()), 60));
        let app = app(AuthHttpState::new(gateway));

        let response = app
            .clone()
            .oneshot(Request::get("/whoami").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app
            .oneshot(
                Request::get("/whoami")
                    .header("X-Token", "not-a-session")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
