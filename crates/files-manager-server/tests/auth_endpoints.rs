use base64::{Engine, engine::general_purpose::STANDARD};
use files_manager_server::{AppConfig, AppState, BootstrapUser, build_app};
use reqwest::StatusCode;
use serde_json::Value;
use tokio::task::JoinHandle;

fn test_config() -> AppConfig {
    let mut cfg = AppConfig::default();
    cfg.bootstrap.users = vec![BootstrapUser {
        id: Some("u1".into()),
        email: "bob@example.com".into(),
        password: Some("secret".into()),
        password_hash: None,
    }];
    cfg
}

async fn start_server() -> (String, tokio::sync::oneshot::Sender<()>, JoinHandle<()>) {
    let cfg = test_config();
    let state = AppState::from_config(&cfg).await.expect("build state");
    let app = build_app(state, &cfg);

    // Bind to an ephemeral port
    let listener = tokio::net::TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0))
        .await
        .expect("bind");
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = tokio::sync::oneshot::channel::<()>();

    let server = tokio::spawn(async move {
        let _ = axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = rx.await;
            })
            .await;
    });

    (format!("http://{addr}"), tx, server)
}

fn basic(raw: &str) -> String {
    format!("Basic {}", STANDARD.encode(raw))
}

#[tokio::test]
async fn connect_resolve_disconnect_lifecycle() {
    let (base, shutdown_tx, handle) = start_server().await;
    let client = reqwest::Client::new();

    // GET /connect with valid credentials
    let resp = client
        .get(format!("{base}/connect"))
        .header("authorization", basic("bob@example.com:secret"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    let token = body["token"].as_str().unwrap().to_string();
    assert!(uuid::Uuid::parse_str(&token).is_ok());

    // A second login yields a distinct token
    let resp = client
        .get(format!("{base}/connect"))
        .header("authorization", basic("bob@example.com:secret"))
        .send()
        .await
        .unwrap();
    let other: Value = resp.json().await.unwrap();
    assert_ne!(other["token"], body["token"]);

    // GET /disconnect revokes the token
    let resp = client
        .get(format!("{base}/disconnect"))
        .header("x-token", &token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(resp.text().await.unwrap().is_empty());

    // Revoking again is unauthorized
    let resp = client
        .get(format!("{base}/disconnect"))
        .header("x-token", &token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Unauthorized");

    // The other session is still active
    let resp = client
        .get(format!("{base}/disconnect"))
        .header("x-token", other["token"].as_str().unwrap())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let _ = shutdown_tx.send(());
    let _ = handle.await;
}

#[tokio::test]
async fn connect_rejects_bad_presentations() {
    let (base, shutdown_tx, handle) = start_server().await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/connect")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    for header in [
        "Basic".to_string(),
        "Basic not_base64!".to_string(),
        "Bearer abc".to_string(),
        basic("bob@example.com"),
        basic("bob@example.com:wrong"),
        basic("eve@example.com:secret"),
    ] {
        let resp = client
            .get(format!("{base}/connect"))
            .header("authorization", &header)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{header}");
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["error"], "Unauthorized");
    }

    let resp = client
        .get(format!("{base}/disconnect"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let _ = shutdown_tx.send(());
    let _ = handle.await;
}

#[tokio::test]
async fn operational_endpoints_work() {
    let (base, shutdown_tx, handle) = start_server().await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/")).send().await.unwrap();
    assert!(resp.status().is_success());
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["service"], "Files Manager");

    let resp = client.get(format!("{base}/healthz")).send().await.unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");

    let resp = client.get(format!("{base}/status")).send().await.unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["redis"], true);
    assert_eq!(body["db"], true);
    assert_eq!(body["session_store"], "local");

    let resp = client.get(format!("{base}/readyz")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));

    let _ = shutdown_tx.send(());
    let _ = handle.await;
}
