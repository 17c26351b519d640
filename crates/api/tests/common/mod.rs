#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderValue, Method, Request};
use axum::response::Response;
use axum::Router;
use dealmyarea_db::{IdStrategy, InMemoryDealStore};
use http_body_util::BodyExt;
use tower::ServiceExt;

use dealmyarea_api::config::ServerConfig;
use dealmyarea_api::router::build_app_router;
use dealmyarea_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:3000` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:3000")],
        request_timeout_secs: 30,
        id_strategy: IdStrategy::Sequential,
        seed_deals: true,
    }
}

/// Build the full application router around the given store.
///
/// Uses the production router builder, so tests exercise the same middleware
/// stack (CORS, request ID, timeout, tracing, panic recovery).
pub fn build_test_app(store: InMemoryDealStore) -> Router {
    let state = AppState::new(Arc::new(store));
    build_app_router(state, &test_config())
}

/// App backed by a fresh store holding the three seed deals (ids "1".."3").
pub fn seeded_app() -> Router {
    build_test_app(InMemoryDealStore::seeded(IdStrategy::Sequential))
}

/// App backed by a fresh, empty store.
pub fn empty_app() -> Router {
    build_test_app(InMemoryDealStore::new(IdStrategy::Sequential))
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A create payload that passes every constraint.
pub fn valid_deal_body() -> serde_json::Value {
    serde_json::json!({
        "title": "Buy one get one coffee",
        "description": "Two lattes for the price of one all week",
        "price": 5.25,
        "store_name": "Bean There",
        "location": {"lat": 37.7793, "lng": -122.4192},
        "category": "Cafe",
        "image_url": "https://example.com/coffee.jpg"
    })
}
