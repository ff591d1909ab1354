//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use layoutquest_core::clock::Clock;
use layoutquest_guild::application::store::ProgressStore;
use layoutquest_guild::domain::catalog::QuestCatalog;
use layoutquest_record_store::FileRecordStore;
use layoutquest_test_support::{CannedTextGenerator, ManualClock};
use tower::ServiceExt;

use layoutquest_api::routes;
use layoutquest_api::state::AppState;

/// Feedback text returned by the test generator.
pub const FEEDBACK: &str = "The Guild Master stamps your quest card.";

/// Build the full app router over a `FileRecordStore` in `data_dir` and the
/// given clock. Uses the same route structure as `main.rs`.
pub fn build_test_app(data_dir: &Path, clock: Arc<ManualClock>) -> Router {
    let clock: Arc<dyn Clock> = clock;
    let progress_store = ProgressStore::new(Arc::new(FileRecordStore::new(data_dir)));
    let app_state = AppState::new(
        clock,
        progress_store,
        QuestCatalog::default_board().unwrap(),
        Arc::new(CannedTextGenerator::new(FEEDBACK)),
    );
    routes::app(app_state)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    send(app, request).await
}

/// Send a POST request without a body and return the response.
pub async fn post_empty(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}
