use dioxus::prelude::*;
use shared_types::{FeatureFlags, Notification, NotificationEvent, WorkerProfile};
use uuid::Uuid;

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

// ── Identity ───────────────────────────────────────────

/// The worker this portal instance serves. Every notification call is
/// scoped to this worker's inbox.
#[cfg(feature = "server")]
fn current_worker_id() -> i64 {
    crate::config::current_worker().id
}

/// Get the current feature flags. No auth required, flags are not sensitive.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::feature_flags().clone())
}

/// Profile of the signed-in worker, shown in the dashboard shell.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_current_worker() -> Result<WorkerProfile, ServerFnError> {
    Ok(crate::config::current_worker().clone())
}

// ── Notifications ──────────────────────────────────────

/// The worker's notifications, newest first.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_notifications() -> Result<Vec<Notification>, ServerFnError> {
    Ok(crate::notifications::hub().list(current_worker_id()))
}

/// Mark a single notification read.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn mark_notification_read(id: Uuid) -> Result<(), ServerFnError> {
    crate::notifications::hub()
        .mark_read(current_worker_id(), id)
        .map_err(|e| e.into_server_fn_error())
}

/// Mark every notification read. Returns how many changed.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn mark_all_notifications_read() -> Result<usize, ServerFnError> {
    Ok(crate::notifications::hub().mark_all_read(current_worker_id()))
}

/// Remove every notification. Returns how many were removed.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn clear_notifications() -> Result<usize, ServerFnError> {
    Ok(crate::notifications::hub().clear_all(current_worker_id()))
}

/// Long-poll for the next notification change.
///
/// Blocks until an event for the current worker arrives or the configured
/// poll timeout elapses, then returns `None` and the client re-polls.
#[server]
pub async fn poll_notification_event() -> Result<Option<NotificationEvent>, ServerFnError> {
    use std::time::Duration;

    let wait = Duration::from_secs(crate::config::notification_settings().poll_timeout_secs);
    let mut rx = crate::notifications::hub().subscribe();

    Ok(crate::notifications::next_event_for(&mut rx, current_worker_id(), wait).await)
}
