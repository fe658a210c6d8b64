use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardHeader};

#[component]
pub fn TasksPage() -> Element {
    rsx! {
        div { class: "worker-page",
            Card {
                CardHeader {
                    title: "Assigned tasks",
                    subtitle: "Tasks from dispatch appear here.",
                }
                CardContent {
                    p { class: "worker-page-empty", "No tasks assigned right now." }
                }
            }
        }
    }
}
