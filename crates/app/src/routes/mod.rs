pub mod detail;
pub mod not_found;
pub mod signed_out;
pub mod worker;

use crate::auth::{use_auth, use_current_worker};
use dioxus::prelude::*;
use shared_types::{AppError, NotificationTarget};
use shared_ui::Skeleton;

use not_found::NotFound;
use signed_out::SignedOut;
use worker::WorkerDashboard;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(WorkerGuard)]
    #[layout(WorkerDashboard)]
    #[route("/worker")]
    WorkerHome {},
    #[route("/worker/tasks")]
    Tasks {},
    #[route("/worker/routes")]
    RouteMap {},
    #[route("/worker/profile")]
    Profile {},
    // Notification click targets
    #[route("/reports/:id")]
    ReportDetail { id: String },
    #[route("/tasks/:id")]
    TaskDetail { id: String },
    #[end_layout]
    #[end_layout]
    #[redirect("/", || Route::WorkerHome {})]
    #[route("/signed-out")]
    SignedOut {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Detail page a notification target opens, if any.
    pub fn for_target(target: &NotificationTarget) -> Option<Route> {
        match target {
            NotificationTarget::Report(id) => Some(Route::ReportDetail { id: id.clone() }),
            NotificationTarget::Task(id) => Some(Route::TaskDetail { id: id.clone() }),
            NotificationTarget::None => None,
        }
    }
}

/// Loads the worker profile before any dashboard page renders.
///
/// `use_server_future` with `?` suspends during SSR until the profile
/// resolves; the `SuspenseBoundary` in `App` shows the fallback meanwhile.
#[component]
fn WorkerGuard() -> Element {
    let mut auth = use_auth();

    let resource =
        use_server_future(move || async move { server::api::get_current_worker().await })?;

    let result = resource.read().as_ref().cloned();

    match result {
        Some(Ok(worker)) => {
            if !auth.is_authenticated() {
                auth.set_worker(worker);
            }
            rsx! { Outlet::<Route> {} }
        }
        Some(Err(e)) => {
            let message = AppError::friendly_message(&e.to_string());
            tracing::warn!(error = %e, "Failed to load worker profile");
            rsx! {
                div { class: "auth-guard-loading",
                    p { class: "auth-guard-error", "{message}" }
                }
            }
        }
        None => {
            rsx! {
                div { class: "auth-guard-loading",
                    Skeleton { lines: 3 }
                }
            }
        }
    }
}

// Worker page route components

#[component]
fn WorkerHome() -> Element {
    let worker = use_current_worker();
    rsx! { worker::home::WorkerHomePage { worker: worker } }
}

#[component]
fn Tasks() -> Element {
    worker::tasks::TasksPage()
}

#[component]
fn RouteMap() -> Element {
    worker::route_map::RouteMapPage()
}

#[component]
fn Profile() -> Element {
    let worker = use_current_worker();
    rsx! { worker::profile::ProfilePage { worker: worker } }
}

#[component]
fn ReportDetail(id: String) -> Element {
    rsx! { detail::ReportDetailPage { id: id } }
}

#[component]
fn TaskDetail(id: String) -> Element {
    rsx! { detail::TaskDetailPage { id: id } }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn worker_paths() {
        assert_eq!(Route::WorkerHome {}.to_string(), "/worker");
        assert_eq!(Route::Tasks {}.to_string(), "/worker/tasks");
        assert_eq!(Route::RouteMap {}.to_string(), "/worker/routes");
        assert_eq!(Route::Profile {}.to_string(), "/worker/profile");
        assert_eq!(Route::SignedOut {}.to_string(), "/signed-out");
    }

    #[test]
    fn targets_map_to_detail_routes() {
        for target in [
            NotificationTarget::Report("r-311".into()),
            NotificationTarget::Task("t-1042".into()),
        ] {
            let route = Route::for_target(&target).unwrap();
            assert_eq!(Some(route.to_string()), target.path());
        }
        assert_eq!(Route::for_target(&NotificationTarget::None), None);
    }

    #[test]
    fn detail_paths_parse_back() {
        let parsed: Route = "/tasks/t-1042".parse().unwrap();
        assert_eq!(parsed, Route::TaskDetail { id: "t-1042".into() });
        let parsed: Route = "/reports/77".parse().unwrap();
        assert_eq!(parsed, Route::ReportDetail { id: "77".into() });
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        let parsed: Route = "/worker/unknown".parse().unwrap();
        assert!(matches!(parsed, Route::NotFound { .. }));
    }
}
