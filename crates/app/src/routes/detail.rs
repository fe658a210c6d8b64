use crate::routes::Route;
use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardHeader};

/// Report opened from a notification.
#[component]
pub fn ReportDetailPage(id: String) -> Element {
    rsx! {
        div { class: "worker-page",
            Card {
                CardHeader { title: format!("Report {id}") }
                CardContent {
                    p { "Review status and reviewer comments for this report." }
                    Link { to: Route::WorkerHome {}, class: "worker-home-link", "Back to dashboard" }
                }
            }
        }
    }
}

/// Task opened from a notification.
#[component]
pub fn TaskDetailPage(id: String) -> Element {
    rsx! {
        div { class: "worker-page",
            Card {
                CardHeader { title: format!("Task {id}") }
                CardContent {
                    p { "Location, instructions and checklist for this task." }
                    Link { to: Route::Tasks {}, class: "worker-home-link", "All tasks" }
                }
            }
        }
    }
}
