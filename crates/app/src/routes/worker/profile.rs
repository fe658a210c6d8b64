use crate::format_helpers::format_title_case;
use dioxus::prelude::*;
use shared_types::WorkerProfile;
use shared_ui::{Badge, BadgeVariant, Card, CardContent, CardHeader};

/// Read-only view of the signed-in worker.
#[component]
pub fn ProfilePage(worker: WorkerProfile) -> Element {
    let role = format_title_case(&worker.role);
    let phone = worker.phone.clone().unwrap_or_else(|| "Not provided".to_string());

    rsx! {
        div { class: "worker-page",
            Card {
                CardHeader { title: worker.display_name.clone() }
                CardContent {
                    dl { class: "profile-details",
                        dt { "Role" }
                        dd {
                            Badge { variant: BadgeVariant::Neutral, "{role}" }
                        }
                        dt { "Email" }
                        dd { "{worker.email}" }
                        dt { "Phone" }
                        dd { "{phone}" }
                        dt { "Worker ID" }
                        dd { "{worker.id}" }
                    }
                }
            }
        }
    }
}
