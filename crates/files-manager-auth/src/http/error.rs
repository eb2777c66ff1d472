//! HTTP rendering of [`AuthError`].
//!
//! Authentication-domain failures collapse to one opaque `401` so the response
//! never reveals which factor failed. Collaborator failures become `503`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// JSON error body: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    fn new(status: StatusCode) -> Self {
        Self {
            error: status
                .canonical_reason()
                .unwrap_or("Error")
                .to_string(),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = if self.is_server_error() {
            tracing::error!(
                category = %self.category(),
                error = %self,
                "Auth collaborator failure"
            );
            StatusCode::SERVICE_UNAVAILABLE
        } else {
            tracing::debug!(
                category = %self.category(),
                error = %self,
                "Request unauthorized"
            );
            StatusCode::UNAUTHORIZED
        };

        (status, Json(ErrorBody::new(status))).into_response()
    }
}
