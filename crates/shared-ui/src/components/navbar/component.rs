use dioxus::prelude::*;

/// Top bar with a title slot on the left and an actions slot on the right.
#[component]
pub fn Navbar(
    title: String,
    leading: Element,
    actions: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "navbar",
            div { class: "navbar-leading", {leading} }
            h1 { class: "navbar-title", "{title}" }
            div { class: "navbar-spacer" }
            div { class: "navbar-actions", {actions} }
        }
    }
}
