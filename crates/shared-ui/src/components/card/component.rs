use dioxus::prelude::*;

/// Bordered content container.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section {
            ..merged,
            {children}
        }
    }
}

/// Card heading row.
#[component]
pub fn CardHeader(title: String, subtitle: Option<String>) -> Element {
    rsx! {
        header { class: "card-header",
            h3 { class: "card-title", "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: "card-subtitle", "{subtitle}" }
            }
        }
    }
}

#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "card-content", {children} }
    }
}
