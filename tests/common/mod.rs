#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceExt;

use progress_board::api::{create_router, AppState};
use progress_board::config::Config;
use progress_board::domain::Task;

pub fn test_config(seed_url: &str) -> Arc<Config> {
    Arc::new(Config {
        port: 3000,
        seed_url: seed_url.to_string(),
        seed_timeout_secs: 2,
        frontend_dir: "../frontend/dist".to_string(),
        cors_origin: "http://localhost:5173".to_string(),
    })
}

pub fn setup_app(seed_url: &str) -> (Router, AppState) {
    let config = test_config(seed_url);
    let (events_tx, _) = broadcast::channel(100);
    let state = AppState::new(events_tx, reqwest::Client::new(), config.clone());
    let app = create_router(state.clone(), &config);
    (app, state)
}

pub async fn seed_board(state: &AppState, tasks: Vec<Task>) {
    state.board.write().await.board.load_seed(tasks);
}

/// Serves `body` with `status` from an in-process listener and returns the URL.
pub async fn spawn_seed_server(status: StatusCode, body: Value) -> String {
    let app = Router::new().route(
        "/todos",
        get(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    );
    serve(app).await
}

pub async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });
    format!("http://{}/todos", addr)
}

pub async fn make_request(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<String>,
) -> (StatusCode, String) {
    let mut request = Request::builder().uri(uri).method(method);

    if body.is_some() {
        request = request.header("content-type", "application/json");
    }

    let request = request
        .body(Body::from(body.unwrap_or_default()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body_str = String::from_utf8(body.to_vec()).unwrap();

    (status, body_str)
}
