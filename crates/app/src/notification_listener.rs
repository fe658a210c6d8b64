use crate::notifications::use_notifications;
use dioxus::prelude::*;

/// Maximum consecutive errors before the polling loop stops.
/// Reloading the page restarts the listener.
#[allow(dead_code)]
const MAX_CONSECUTIVE_ERRORS: u32 = 10;

/// Headless component that loads the worker's notifications and then
/// long-polls for changes, applying each event to the store.
///
/// Mount once inside the dashboard shell so it runs on every worker page.
#[component]
#[allow(unused_variables, unused_mut)]
pub fn NotificationListener() -> Element {
    let mut store = use_notifications();

    use_coroutine(move |_: UnboundedReceiver<()>| async move {
        // Server functions run as direct calls during SSR, so the long-poll
        // would block the render. Only the hydrated client polls.
        #[cfg(feature = "server")]
        return;

        #[cfg(not(feature = "server"))]
        {
            store.refresh().await;

            let mut consecutive_errors: u32 = 0;

            loop {
                match server::api::poll_notification_event().await {
                    Ok(Some(event)) => {
                        consecutive_errors = 0;
                        if let Some((title, body)) = crate::notify::announcement(&event) {
                            crate::notify::send(&title, &body);
                        }
                        store.apply(&event);
                    }
                    Ok(None) => {
                        // Timeout or lagged subscription: events may have
                        // been missed between polls.
                        consecutive_errors = 0;
                        store.sync().await;
                    }
                    Err(e) => {
                        consecutive_errors += 1;
                        tracing::warn!(
                            error = %e,
                            consecutive_errors,
                            "Notification poll failed"
                        );
                        if consecutive_errors >= MAX_CONSECUTIVE_ERRORS {
                            tracing::warn!("Notification listener stopped after repeated errors");
                            break;
                        }
                    }
                }
            }
        }
    });

    rsx! {}
}
