#![allow(dead_code)]

use axum::{
    extract::Query,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use business_insight::insight::{BusinessData, HttpBackend, InsightClient};
use serde_json::json;
use std::collections::HashMap;
use std::time::Duration;
use tokio::net::TcpListener;

pub const TEST_SEED: u64 = 2025;

pub fn fixed_payload() -> BusinessData {
    BusinessData {
        rating: 3.9,
        reviews: 1234,
        headline: "Straight from the backend".to_string(),
    }
}

/// Serve `router` on an ephemeral port and return its base URL.
pub async fn spawn_backend(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind backend");
    let addr = listener.local_addr().expect("backend addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve backend");
    });
    format!("http://{addr}")
}

/// A base URL nothing is listening on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind probe");
    let addr = listener.local_addr().expect("probe addr");
    drop(listener);
    format!("http://{addr}")
}

/// Always answers with [`fixed_payload`]; headlines echo the query.
pub fn succeeding_backend() -> Router {
    Router::new()
        .route("/business-data", post(|| async { Json(fixed_payload()) }))
        .route(
            "/regenerate-headline",
            get(|Query(q): Query<HashMap<String, String>>| async move {
                let name = q.get("name").cloned().unwrap_or_default();
                let location = q.get("location").cloned().unwrap_or_default();
                Json(json!({ "headline": format!("{name} live from {location}") }))
            }),
        )
}

pub fn failing_backend(status: StatusCode) -> Router {
    Router::new()
        .route("/business-data", post(move || async move { status }))
        .route("/regenerate-headline", get(move || async move { status }))
}

pub fn malformed_backend() -> Router {
    Router::new()
        .route("/business-data", post(|| async { "<html>not json</html>" }))
        .route(
            "/regenerate-headline",
            get(|| async { Json(json!({ "headline": "" })) }),
        )
}

pub fn slow_backend(delay: Duration) -> Router {
    Router::new()
        .route(
            "/business-data",
            post(move || async move {
                tokio::time::sleep(delay).await;
                Json(fixed_payload())
            }),
        )
        .route(
            "/regenerate-headline",
            get(move || async move {
                tokio::time::sleep(delay).await;
                Json(json!({ "headline": "Too late to matter" }))
            }),
        )
}

pub fn client_for(base_url: &str) -> InsightClient {
    client_with_timeout(base_url, Duration::from_secs(2))
}

pub fn client_with_timeout(base_url: &str, timeout: Duration) -> InsightClient {
    let backend = HttpBackend::new(base_url, timeout).expect("build backend");
    InsightClient::new(backend).with_seed(TEST_SEED)
}
