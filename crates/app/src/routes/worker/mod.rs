pub mod home;
pub mod profile;
pub mod route_map;
pub mod tasks;

use crate::auth::{use_auth, use_current_worker};
use crate::components::NotificationCenter;
use crate::notification_listener::NotificationListener;
use crate::notifications::use_notifications;
use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdClipboardList, LdLayoutDashboard, LdLogOut, LdMap, LdMenu, LdUser,
};
use dioxus_free_icons::Icon;
use shared_ui::{
    Button, ButtonVariant, Navbar, Sidebar, SidebarContent, SidebarFooter, SidebarHeader,
    SidebarInset, SidebarMenu, SidebarMenuButton, SidebarMenuItem, SidebarProvider,
    SidebarTrigger,
};

/// Title shown when the current path matches no sidebar entry.
pub const DEFAULT_TITLE: &str = "Dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarIcon {
    Dashboard,
    Tasks,
    Routes,
    Profile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarEntry {
    pub label: &'static str,
    pub icon: SidebarIcon,
    pub path: &'static str,
}

pub const SIDEBAR_ITEMS: &[SidebarEntry] = &[
    SidebarEntry {
        label: "Dashboard",
        icon: SidebarIcon::Dashboard,
        path: "/worker",
    },
    SidebarEntry {
        label: "Tasks",
        icon: SidebarIcon::Tasks,
        path: "/worker/tasks",
    },
    SidebarEntry {
        label: "Routes",
        icon: SidebarIcon::Routes,
        path: "/worker/routes",
    },
    SidebarEntry {
        label: "Profile",
        icon: SidebarIcon::Profile,
        path: "/worker/profile",
    },
];

/// Page title for a path: the label of the sidebar entry whose path matches
/// exactly. Sub-routes do not inherit their parent's title.
pub fn title_for_path(path: &str) -> &'static str {
    SIDEBAR_ITEMS
        .iter()
        .find(|entry| entry.path == path)
        .map(|entry| entry.label)
        .unwrap_or(DEFAULT_TITLE)
}

#[component]
fn SidebarIconView(icon: SidebarIcon) -> Element {
    match icon {
        SidebarIcon::Dashboard => rsx! {
            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
        },
        SidebarIcon::Tasks => rsx! {
            Icon::<LdClipboardList> { icon: LdClipboardList, width: 18, height: 18 }
        },
        SidebarIcon::Routes => rsx! {
            Icon::<LdMap> { icon: LdMap, width: 18, height: 18 }
        },
        SidebarIcon::Profile => rsx! {
            Icon::<LdUser> { icon: LdUser, width: 18, height: 18 }
        },
    }
}

/// Dashboard shell: sidebar navigation, top bar with the page title and
/// notification center, and the routed page content.
#[component]
pub fn WorkerDashboard() -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();
    let mut notifications = use_notifications();
    let worker = use_current_worker();

    let path = route.to_string();
    let page_title = title_for_path(&path);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { default_open: false,
            NotificationListener {}

            Sidebar {
                SidebarHeader {
                    div {
                        class: "sidebar-brand",
                        span {
                            class: "sidebar-brand-name",
                            "Worker Portal"
                        }
                    }
                }

                SidebarContent {
                    SidebarMenu {
                        for entry in SIDEBAR_ITEMS.iter() {
                            SidebarMenuItem { key: "{entry.path}",
                                Link { to: entry.path,
                                    SidebarMenuButton { active: entry.path == path,
                                        SidebarIconView { icon: entry.icon }
                                        "{entry.label}"
                                    }
                                }
                            }
                        }
                    }
                }

                SidebarFooter {
                    div {
                        class: "sidebar-footer-row",
                        span { class: "sidebar-avatar", "{worker.initials()}" }
                        div { class: "sidebar-footer-identity",
                            span { class: "sidebar-footer-name", "{worker.display_name}" }
                            span { class: "sidebar-footer-label", "{worker.email}" }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            auth.clear_auth();
                            notifications.reset();
                            navigator().push(Route::SignedOut {});
                        },
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Sign Out"
                    }
                }
            }

            SidebarInset {
                Navbar {
                    title: page_title.to_string(),
                    leading: rsx! {
                        SidebarTrigger {
                            Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
                        }
                    },
                    actions: rsx! {
                        NotificationCenter {}
                    },
                }

                div {
                    class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
