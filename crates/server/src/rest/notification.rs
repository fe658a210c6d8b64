use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use shared_types::{AppError, NewNotification, Notification};

use crate::notifications::NotificationHub;

// ---------------------------------------------------------------------------
// GET /api/workers/{worker_id}/notifications
// ---------------------------------------------------------------------------

/// List a worker's notifications, newest first.
pub async fn list_notifications(
    State(hub): State<Arc<NotificationHub>>,
    Path(worker_id): Path<i64>,
) -> Json<Vec<Notification>> {
    Json(hub.list(worker_id))
}

// ---------------------------------------------------------------------------
// POST /api/workers/{worker_id}/notifications
// ---------------------------------------------------------------------------

/// Publish a notification to a worker. Used by upstream producers
/// (dispatch, report review) to reach the portal.
pub async fn create_notification(
    State(hub): State<Arc<NotificationHub>>,
    Path(worker_id): Path<i64>,
    Json(body): Json<NewNotification>,
) -> Result<(StatusCode, Json<Notification>), AppError> {
    validate_new(&body)?;
    let created = hub.publish(worker_id, body);
    Ok((StatusCode::CREATED, Json(created)))
}

fn validate_new(body: &NewNotification) -> Result<(), AppError> {
    if body.title.trim().is_empty() {
        return Err(AppError::bad_request("Notification title is required")
            .with_field_error("title", "must not be blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::NotificationKind;

    #[test]
    fn blank_title_is_rejected() {
        let body = NewNotification::new(NotificationKind::Info, "   ", "body");
        let err = validate_new(&body).unwrap_err();
        assert_eq!(err.kind, shared_types::AppErrorKind::BadRequest);
        assert_eq!(err.field_errors.get("title").map(String::as_str), Some("must not be blank"));
    }

    #[test]
    fn titled_notification_is_accepted() {
        let body = NewNotification::new(NotificationKind::Success, "Shift approved", "");
        assert!(validate_new(&body).is_ok());
    }
}
