use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{Router, extract::FromRef, middleware, routing::get};
use files_manager_auth::{
    AuthGateway, AuthHttpState, CredentialVerifier, ReadinessProbe, UserLookup, auth_routes,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    bootstrap::seed_user_directory, config::AppConfig, handlers, middleware as app_middleware,
    session_store::{SessionBackend, create_session_backend},
};

/// Shared state for every route.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthHttpState,
    /// Session store reachability, reported as `redis` by `/status`.
    pub sessions_probe: Arc<dyn ReadinessProbe>,
    /// User directory reachability, reported as `db` by `/status`.
    pub users_probe: Arc<dyn ReadinessProbe>,
    /// Session backend mode, `"local"` or `"redis"`.
    pub session_store_mode: &'static str,
}

impl FromRef<AppState> for AuthHttpState {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}

impl AppState {
    /// Wires the gateway over the given collaborators.
    pub fn new<U>(sessions: Arc<SessionBackend>, users: Arc<U>, cfg: &AppConfig) -> Self
    where
        U: UserLookup + ReadinessProbe + 'static,
    {
        let session_store_mode = sessions.mode();
        let verifier = CredentialVerifier::new(users.clone());
        let gateway = AuthGateway::with_config(verifier, sessions.clone(), &cfg.session);
        Self {
            auth: AuthHttpState::new(Arc::new(gateway)),
            sessions_probe: sessions,
            users_probe: users,
            session_store_mode,
        }
    }

    /// Builds the session backend and user directory described by `cfg`.
    pub async fn from_config(cfg: &AppConfig) -> anyhow::Result<Self> {
        let sessions = create_session_backend(&cfg.redis)
            .await
            .context("session store initialization failed")?;
        let users =
            seed_user_directory(&cfg.bootstrap).context("user directory bootstrap failed")?;

        tracing::info!(
            session_store = sessions.mode(),
            session_ttl_secs = cfg.session.ttl_secs,
            "Session gateway ready"
        );

        Ok(Self::new(Arc::new(sessions), Arc::new(users), cfg))
    }
}

pub fn build_app(state: AppState, cfg: &AppConfig) -> Router {
    let body_limit = cfg.server.body_limit_bytes;
    Router::new()
        // Health and info endpoints
        .route("/", get(handlers::root))
        .route("/healthz", get(handlers::healthz))
        .route("/readyz", get(handlers::readyz))
        .route("/status", get(handlers::status))
        // Session endpoints
        .merge(auth_routes::<AppState>())
        // Middleware stack, innermost first. Request id wraps trace so the
        // span can read it from the request extensions.
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    use tracing::field::Empty;
                    let req_id = req
                        .extensions()
                        .get::<axum::http::HeaderValue>()
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("")
                        .to_string();
                    tracing::info_span!(
                        "http.request",
                        http.method = %req.method(),
                        http.target = %req.uri().path(),
                        http.status_code = Empty,
                        request_id = %req_id
                    )
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &tracing::Span| {
                        span.record(
                            "http.status_code",
                            tracing::field::display(res.status().as_u16()),
                        );
                        tracing::info!(
                            http.status = %res.status().as_u16(),
                            elapsed_ms = %latency.as_millis(),
                            "request handled"
                        );
                    },
                ),
        )
        .layer(middleware::from_fn(app_middleware::request_id))
        .layer(axum::extract::DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

pub struct FilesManagerServer {
    addr: SocketAddr,
    app: Router,
}

pub struct ServerBuilder {
    addr: SocketAddr,
    config: AppConfig,
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ServerBuilder {
    pub fn new() -> Self {
        let cfg = AppConfig::default();
        Self {
            addr: cfg.addr(),
            config: cfg,
        }
    }

    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    pub fn with_config(mut self, cfg: AppConfig) -> Self {
        self.addr = cfg.addr();
        self.config = cfg;
        self
    }

    pub async fn build(self) -> anyhow::Result<FilesManagerServer> {
        let state = AppState::from_config(&self.config).await?;
        let app = build_app(state, &self.config);

        Ok(FilesManagerServer {
            addr: self.addr,
            app,
        })
    }
}

impl FilesManagerServer {
    pub async fn run(self) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        tracing::info!("listening on {}", self.addr);
        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }
}

async fn shutdown_signal() {
    // Wait for Ctrl+C
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
