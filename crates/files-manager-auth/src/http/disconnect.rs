//! `GET /disconnect`: revoke the session named by `X-Token`.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
};

use super::{AuthHttpState, SESSION_TOKEN_HEADER};
use crate::error::AuthError;

/// Handler for `GET /disconnect`.
///
/// Returns `204 No Content` when the session was active, `401` otherwise
/// (missing header, unknown, revoked or expired token alike).
pub async fn disconnect_handler(
    State(state): State<AuthHttpState>,
    headers: HeaderMap,
) -> Result<StatusCode, AuthError> {
    let token = headers
        .get(SESSION_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    state.gateway.terminate_session(token).await?;

    Ok(StatusCode::NO_CONTENT)
}
