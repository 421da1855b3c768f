#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use grubdash_backend_rs::{
    app::App,
    data,
    types::{AppContext, Context},
    utils::store::InMemoryStore,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub const PENDING_ORDER: &str = "2a3fb3a5a0be2cfa3c27b08c6fd44d90";
pub const OUT_FOR_DELIVERY_ORDER: &str = "f6069a542257054114138301947672ba";
pub const DELIVERED_ORDER: &str = "5a887d326e83d3c5bdcbee398ea32aff";
pub const SEEDED_DISH: &str = "90c3d873684bf381dfab29034b5bba73";

/// A router over freshly seeded stores, so tests never share state.
pub fn router() -> Router {
    let ctx = Context::new(
        AppContext {
            host: "127.0.0.1".to_string(),
            port: 0,
            url: "http://127.0.0.1".to_string(),
        },
        Arc::new(InMemoryStore::with_records(data::dishes())),
        Arc::new(InMemoryStore::with_records(data::orders())),
    );

    App::from_context(Arc::new(ctx)).into_router()
}

pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    let request = match body {
        Some(body) => request.body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let body = match bytes.is_empty() {
        true => Value::Null,
        false => serde_json::from_slice(&bytes).unwrap(),
    };

    (status, body)
}
