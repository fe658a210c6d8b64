use dioxus::prelude::*;

// ─── Context ───────────────────────────────────────────────────────────

/// Whether the sidebar is expanded. On narrow viewports this is the mobile
/// menu: open means the overlay is showing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub open: bool,
}

/// Provides sidebar state context to children.
#[component]
pub fn SidebarProvider(#[props(default = true)] default_open: bool, children: Element) -> Element {
    let state = use_signal(|| SidebarState { open: default_open });
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-sidebar-open": if state().open { "true" } else { "false" },
            {children}
        }
    }
}

fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

fn with_class(class: &'static str, attributes: Vec<Attribute>) -> Vec<Attribute> {
    let base = vec![Attribute::new("class", class, None, false)];
    dioxus_primitives::merge_attributes(vec![base, attributes])
}

// ─── Layout ────────────────────────────────────────────────────────────

/// The sidebar column. Shows a tap-to-close backdrop while open.
#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let is_open = state().open;
    let mut merged = with_class("sidebar", attributes);
    merged.push(Attribute::new(
        "data-state",
        if is_open { "open" } else { "closed" },
        None,
        false,
    ));

    rsx! {
        if is_open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| state.set(SidebarState { open: false }),
            }
        }
        aside {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("sidebar-header", attributes);
    rsx! {
        div { ..merged, {children} }
    }
}

#[component]
pub fn SidebarContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("sidebar-content", attributes);
    rsx! {
        nav { ..merged, {children} }
    }
}

#[component]
pub fn SidebarFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("sidebar-footer", attributes);
    rsx! {
        div { ..merged, {children} }
    }
}

// ─── Menu ──────────────────────────────────────────────────────────────

#[component]
pub fn SidebarMenu(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("sidebar-menu", attributes);
    rsx! {
        ul { ..merged, {children} }
    }
}

#[component]
pub fn SidebarMenuItem(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("sidebar-menu-item", attributes);
    rsx! {
        li { ..merged, {children} }
    }
}

/// Menu entry. Choosing an entry closes the mobile menu.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let mut merged = with_class("sidebar-menu-button", attributes);
    merged.push(Attribute::new(
        "data-active",
        if active { "true" } else { "false" },
        None,
        false,
    ));

    rsx! {
        button {
            r#type: "button",
            onclick: move |_| state.set(SidebarState { open: false }),
            ..merged,
            {children}
        }
    }
}

// ─── Controls ──────────────────────────────────────────────────────────

/// Hamburger button toggling the mobile menu.
#[component]
pub fn SidebarTrigger(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let merged = with_class("sidebar-trigger", attributes);

    rsx! {
        button {
            r#type: "button",
            "aria-label": "Toggle menu",
            onclick: move |_| {
                let open = state().open;
                state.set(SidebarState { open: !open });
            },
            ..merged,
            {children}
        }
    }
}

/// Main column next to the sidebar.
#[component]
pub fn SidebarInset(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("sidebar-inset", attributes);
    rsx! {
        div { ..merged, {children} }
    }
}
