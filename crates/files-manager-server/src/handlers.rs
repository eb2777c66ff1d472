use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use files_manager_auth::ReadinessProbe;
use serde::Serialize;
use serde_json::json;

use crate::server::AppState;

#[derive(Serialize)]
pub struct HealthResponse<'a> {
    status: &'a str,
}

/// Reachability of the two storage collaborators.
///
/// `redis` is the readiness of the session store, whichever backend serves
/// it; `session_store` names that backend (`"redis"` or `"local"`).
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct StatusResponse {
    pub redis: bool,
    pub db: bool,
    pub session_store: &'static str,
}

impl StatusResponse {
    async fn probe(state: &AppState) -> Self {
        let sessions: &Arc<dyn ReadinessProbe> = &state.sessions_probe;
        let users: &Arc<dyn ReadinessProbe> = &state.users_probe;
        let (redis, db) = tokio::join!(sessions.is_ready(), users.is_ready());
        Self {
            redis,
            db,
            session_store: state.session_store_mode,
        }
    }

    fn is_ready(&self) -> bool {
        self.redis && self.db
    }
}

pub async fn root() -> impl IntoResponse {
    let body = json!({
        "service": "Files Manager",
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    });
    (StatusCode::OK, Json(body))
}

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse { status: "ok" }))
}

pub async fn status(State(state): State<AppState>) -> impl IntoResponse {
    let status = StatusResponse::probe(&state).await;
    (StatusCode::OK, Json(status))
}

pub async fn readyz(State(state): State<AppState>) -> impl IntoResponse {
    let status = StatusResponse::probe(&state).await;
    if status.is_ready() {
        (StatusCode::OK, Json(HealthResponse { status: "ready" }))
    } else {
        tracing::warn!(redis = status.redis, db = status.db, "Readiness check failed");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "unavailable",
            }),
        )
    }
}
