use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use server::notifications::NotificationHub;
use shared_types::NotificationSettings;
use std::sync::Arc;
use tower::ServiceExt;

/// A fresh hub, independent of the process-wide one, so tests don't share inboxes.
pub fn test_hub() -> Arc<NotificationHub> {
    Arc::new(NotificationHub::new(&NotificationSettings {
        poll_timeout_secs: 1,
        channel_capacity: 16,
        max_per_worker: 50,
    }))
}

/// Build the REST router around a fresh hub.
pub fn test_app() -> (Router, Arc<NotificationHub>) {
    let hub = test_hub();
    let router = server::rest::api_router(hub.clone());
    (router, hub)
}

/// Send a request and parse the body as JSON (Null when empty or not JSON).
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

/// POST JSON to a route.
pub async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, req).await
}

/// GET a route.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}
