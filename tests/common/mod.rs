#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use business_dashboard::api::{self, AppState};
use business_dashboard::config::DelayConfig;
use serde_json::Value;
use std::net::SocketAddr;
use tower::ServiceExt;

pub const FRONTEND_ORIGIN: &str = "http://localhost:3000";

pub fn no_delays() -> DelayConfig {
    DelayConfig {
        business_data_ms: 0,
        regenerate_headline_ms: 0,
    }
}

pub fn test_app(seed: Option<u64>) -> Router {
    test_app_with_delays(no_delays(), seed)
}

pub fn test_app_with_delays(delays: DelayConfig, seed: Option<u64>) -> Router {
    let cors = api::cors_layer(&[FRONTEND_ORIGIN.to_string()]).expect("valid origins");
    api::router(AppState::new(delays, seed), cors)
}

pub async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let res = app.oneshot(req).await.expect("router is infallible");
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("read body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("build request")
}

/// Serve `test_app(seed)` on an ephemeral local port.
pub async fn spawn_server(seed: Option<u64>) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    let app = test_app(seed);
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    addr
}
