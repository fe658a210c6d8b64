pub mod notification;

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::health;
use crate::notifications::NotificationHub;

/// Build the REST router around the given hub.
pub fn api_router(hub: Arc<NotificationHub>) -> Router {
    Router::new()
        .route(
            "/api/workers/{worker_id}/notifications",
            get(notification::list_notifications).post(notification::create_notification),
        )
        .route("/health", get(health::health_check))
        .with_state(hub)
}
