use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardHeader};

#[component]
pub fn RouteMapPage() -> Element {
    rsx! {
        div { class: "worker-page",
            Card {
                CardHeader { title: "Today's route" }
                CardContent {
                    div { class: "route-map-placeholder", "aria-label": "Route map",
                        "No stops scheduled."
                    }
                }
            }
        }
    }
}
