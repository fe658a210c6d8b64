use dioxus::prelude::*;

use crate::routes::Route;
use shared_ui::{Button, ButtonVariant};

/// Shown after the worker signs out of the dashboard.
#[component]
pub fn SignedOut() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                h1 { class: "not-found-title", "Signed out" }
                p { class: "not-found-message", "You have been signed out of the worker portal." }
                Link { to: Route::WorkerHome {},
                    Button { variant: ButtonVariant::Primary, "Sign back in" }
                }
            }
        }
    }
}
