use dioxus::prelude::*;
use shared_types::FeatureFlags;

mod auth;
mod components;
pub mod format_helpers;
pub mod notification_listener;
pub mod notifications;
pub mod notify;
mod routes;
use auth::AuthState;
use notifications::NotificationStore;
use routes::Route;

const PORTAL_CSS: Asset = asset!("/assets/portal.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_config();
        let flags = server::config::feature_flags();

        if flags.telemetry {
            server::telemetry::init_telemetry();
        }
        server::health::record_start_time();

        let hub = server::notifications::hub();

        if flags.demo_seed {
            let worker_id = server::config::current_worker().id;
            if hub.list(worker_id).is_empty() {
                server::notifications::seed_demo(&hub, worker_id);
            }
        }

        let mut router = dioxus::server::router(App).merge(server::rest::api_router(hub));

        if flags.telemetry {
            router = router.layer(server::telemetry::OtelTraceLayer);
        }

        let router = router
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    // Set the X-Client-Platform header on all server function calls
    use_hook(|| {
        use dioxus::fullstack::{set_request_headers, HeaderMap, HeaderValue};

        let mut headers = HeaderMap::new();
        headers.insert(
            "x-client-platform",
            HeaderValue::from_static(client_platform()),
        );
        set_request_headers(headers);
    });

    // Fetch feature flags once and provide via context (defaults all-off on error)
    let flags_resource =
        use_server_future(move || async move { server::api::get_feature_flags().await })?;

    let flags = flags_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(FeatureFlags::default()))
        .unwrap_or_default();

    use_context_provider(|| flags);
    use_context_provider(AuthState::new);
    use_context_provider(NotificationStore::new);

    rsx! {
        document::Link { rel: "stylesheet", href: PORTAL_CSS }
        SuspenseBoundary {
            fallback: |_| rsx! {
                div { class: "auth-guard-loading",
                    p { "Loading..." }
                }
            },
            Router::<Route> {}
        }
    }
}
