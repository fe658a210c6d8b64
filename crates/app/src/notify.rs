use shared_types::{NotificationEvent, NotificationKind};

#[cfg(feature = "desktop")]
const APP_NAME: &str = "Worker Portal";

/// Title and body for a desktop notification, if the event warrants one.
/// Only newly created notifications are announced.
pub fn announcement(event: &NotificationEvent) -> Option<(String, String)> {
    match event {
        NotificationEvent::Created { notification, .. } => {
            let title = match notification.kind {
                NotificationKind::Error => format!("Action needed: {}", notification.title),
                _ => notification.title.clone(),
            };
            Some((title, notification.message.clone()))
        }
        NotificationEvent::Read { .. } | NotificationEvent::AllRead | NotificationEvent::Cleared => {
            None
        }
    }
}

/// Send a desktop notification (no-op on non-desktop platforms).
#[allow(unused_variables)]
pub fn send(title: &str, body: &str) {
    #[cfg(feature = "desktop")]
    {
        if let Err(e) = dioxus_sdk_notification::Notification::new()
            .app_name(APP_NAME.to_string())
            .summary(title.to_string())
            .body(body.to_string())
            .show()
        {
            tracing::warn!(error = %e, "Failed to show desktop notification");
        }
    }
}
