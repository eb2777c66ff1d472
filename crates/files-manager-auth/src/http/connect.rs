//! `GET /connect`: exchange Basic credentials for a session token.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, header::AUTHORIZATION},
};
use serde::Serialize;

use super::AuthHttpState;
use crate::error::AuthError;
use crate::types::SessionToken;

/// Successful `/connect` response body.
#[derive(Debug, Serialize)]
pub struct ConnectResponse {
    /// Newly issued session token.
    pub token: SessionToken,
}

/// Handler for `GET /connect`.
///
/// Reads `Authorization: Basic <base64(email:password)>` and returns
/// `200 {"token": "..."}`. Any authentication failure is `401
/// {"error":"Unauthorized"}`.
pub async fn connect_handler(
    State(state): State<AuthHttpState>,
    headers: HeaderMap,
) -> Result<Json<ConnectResponse>, AuthError> {
    // A header that is not visible ASCII is treated like a missing one.
    let authorization = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());

    let session = state.gateway.establish_session(authorization).await?;

    Ok(Json(ConnectResponse {
        token: session.token,
    }))
}
