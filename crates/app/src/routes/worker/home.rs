use crate::notifications::use_notifications;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{FeatureFlags, WorkerProfile};
use shared_ui::{Card, CardContent, CardHeader};

/// Unread summary line for the home card.
pub fn unread_summary(unread: usize) -> String {
    match unread {
        0 => "You're all caught up.".to_string(),
        1 => "You have 1 unread notification.".to_string(),
        n => format!("You have {n} unread notifications."),
    }
}

/// Worker landing page.
#[component]
pub fn WorkerHomePage(worker: WorkerProfile) -> Element {
    let store = use_notifications();
    let flags = use_context::<FeatureFlags>();
    let summary = unread_summary(store.unread_count());

    rsx! {
        div { class: "worker-home",
            h2 { class: "page-heading", "Welcome back, {worker.first_name()}" }

            div { class: "worker-home-grid",
                Card {
                    CardHeader { title: "Notifications", subtitle: summary }
                    CardContent {
                        p { "Use the bell in the top bar to review them." }
                        if flags.demo_seed {
                            p { class: "worker-home-note", "This inbox was seeded with sample notifications." }
                        }
                    }
                }
                Card {
                    CardHeader { title: "Today" }
                    CardContent {
                        Link { to: Route::Tasks {}, class: "worker-home-link", "View assigned tasks" }
                        Link { to: Route::RouteMap {}, class: "worker-home-link", "Open route map" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_wording() {
        assert_eq!(unread_summary(0), "You're all caught up.");
        assert_eq!(unread_summary(1), "You have 1 unread notification.");
        assert_eq!(unread_summary(12), "You have 12 unread notifications.");
    }
}
