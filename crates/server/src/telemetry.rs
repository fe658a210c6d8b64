use axum::{body::Body, http::Request, response::Response};
use opentelemetry::{
    global,
    trace::{SpanKind, TraceContextExt, Tracer},
    Context, KeyValue,
};
use opentelemetry_otlp::{WithExportConfig, WithTonicConfig};
use std::{
    future::Future,
    pin::Pin,
    sync::OnceLock,
    task::{Context as TaskContext, Poll},
};
use tower::{Layer, Service};

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_SERVICE_NAME: &str = "worker-portal";

type InitError = Box<dyn std::error::Error + Send + Sync>;

/// Keeps the LoggerProvider alive for the process lifetime.
static LOGGER_PROVIDER: OnceLock<opentelemetry_sdk::logs::SdkLoggerProvider> = OnceLock::new();

/// Runtime for the OTLP gRPC exporters. Tonic's lazy connect spawns onto
/// the current Tokio runtime, which may not be entered yet when
/// `dioxus::serve` runs the init closure.
static OTEL_RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();

/// Configure OTLP trace and log export.
///
/// Dioxus owns the `tracing` subscriber; this only installs the global
/// tracer provider used by `OtelTraceLayer` and bridges the `log` crate.
///
/// Environment:
///   - `OTEL_EXPORTER_OTLP_ENDPOINT` collector gRPC address, e.g. `http://localhost:4317`
///   - `OTEL_SERVICE_NAME` service name tag (default `worker-portal`)
///   - `DEPLOY_ENV` deployment environment tag (default `development`)
pub fn init_telemetry() {
    let _ = dotenvy::dotenv();

    let Ok(endpoint) = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT") else {
        tracing::info!("OTEL_EXPORTER_OTLP_ENDPOINT not set, skipping OTLP telemetry");
        return;
    };

    match install_exporters(&endpoint) {
        Ok(()) => tracing::info!(
            endpoint = %endpoint,
            version = APP_VERSION,
            "Telemetry initialized, traces and logs exporting"
        ),
        Err(e) => tracing::error!(endpoint = %endpoint, error = %e, "Telemetry setup failed"),
    }
}

fn install_exporters(endpoint: &str) -> Result<(), InitError> {
    let service_name =
        std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| DEFAULT_SERVICE_NAME.to_string());
    let environment = std::env::var("DEPLOY_ENV").unwrap_or_else(|_| "development".to_string());

    let rt = match OTEL_RUNTIME.get() {
        Some(rt) => rt,
        None => {
            let built = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .worker_threads(1)
                .build()?;
            OTEL_RUNTIME.get_or_init(|| built)
        }
    };
    let _guard = rt.enter();

    let tls = endpoint.starts_with("https://");

    let mut span_builder = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint);
    if tls {
        span_builder = span_builder.with_tls_config(
            opentelemetry_otlp::tonic_types::transport::ClientTlsConfig::new().with_native_roots(),
        );
    }
    let span_exporter = span_builder.build()?;

    let resource = opentelemetry_sdk::Resource::builder()
        .with_service_name(service_name)
        .with_attribute(KeyValue::new("service.version", APP_VERSION))
        .with_attribute(KeyValue::new("deployment.environment", environment))
        .build();

    let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
        .with_batch_exporter(span_exporter)
        .with_resource(resource.clone())
        .build();
    global::set_tracer_provider(tracer_provider);

    let mut log_builder = opentelemetry_otlp::LogExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint);
    if tls {
        log_builder = log_builder.with_tls_config(
            opentelemetry_otlp::tonic_types::transport::ClientTlsConfig::new().with_native_roots(),
        );
    }
    let log_exporter = log_builder.build()?;

    let logger_provider = LOGGER_PROVIDER.get_or_init(|| {
        opentelemetry_sdk::logs::SdkLoggerProvider::builder()
            .with_batch_exporter(log_exporter)
            .with_resource(resource)
            .build()
    });

    // The `log` bridge is independent of the Dioxus-owned tracing subscriber.
    let bridge = opentelemetry_appender_log::OpenTelemetryLogBridge::new(logger_provider);
    match log::set_boxed_logger(Box::new(bridge)) {
        Ok(()) => log::set_max_level(log::LevelFilter::Info),
        Err(_) => tracing::warn!("Log bridge skipped, a log crate logger is already set"),
    }

    Ok(())
}

/// Detect client platform from User-Agent and optional X-Client-Platform header.
///
/// An explicit header wins over the User-Agent heuristic. Native clients
/// send no User-Agent and report as "native".
fn detect_platform(ua: &str, explicit: Option<&str>) -> &'static str {
    if let Some(p) = explicit {
        return match p {
            "ios" => "ios",
            "android" => "android",
            "desktop" => "desktop",
            "mobile" => "mobile",
            "web" => "web",
            _ => "unknown",
        };
    }

    if ua == "unknown" || ua.is_empty() {
        return "native";
    }
    if ua.contains("iPhone") || ua.contains("iPad") || ua.contains("CFNetwork") {
        "ios"
    } else if ua.contains("Android") {
        "android"
    } else if ua.contains("Mozilla") || ua.contains("Chrome") || ua.contains("Safari") {
        "web"
    } else {
        "native"
    }
}

/// Span name route: worker ids and notification ids collapse to a
/// placeholder so spans group per endpoint.
fn route_template(path: &str) -> String {
    path.split('/')
        .map(|segment| {
            let is_id = !segment.is_empty()
                && (segment.chars().all(|c| c.is_ascii_digit())
                    || uuid::Uuid::parse_str(segment).is_ok());
            if is_id {
                ":id"
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Tower layer that creates an OpenTelemetry span for each HTTP request.
///
/// Captures: method, path, user-agent, client platform, request ID,
/// the portal's worker id, and response status.
#[derive(Clone)]
pub struct OtelTraceLayer;

impl<S> Layer<S> for OtelTraceLayer {
    type Service = OtelTraceService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        OtelTraceService { inner }
    }
}

#[derive(Clone)]
pub struct OtelTraceService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for OtelTraceService<S>
where
    S: Service<Request<Body>, Response = Response> + Send + Clone + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let tracer = global::tracer(DEFAULT_SERVICE_NAME);
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        let user_agent = req
            .headers()
            .get("user-agent")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
            .to_string();
        let explicit_platform = req
            .headers()
            .get("x-client-platform")
            .and_then(|v| v.to_str().ok());
        let client_platform = detect_platform(&user_agent, explicit_platform);

        let request_id = req
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let attributes = vec![
            KeyValue::new("http.method", method.clone()),
            KeyValue::new("http.target", path.clone()),
            KeyValue::new("http.user_agent", user_agent),
            KeyValue::new("client.platform", client_platform),
            KeyValue::new("http.request_id", request_id),
            KeyValue::new("worker.id", crate::config::current_worker().id),
        ];

        let span = tracer
            .span_builder(format!("{} {}", &method, route_template(&path)))
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        let cx = Context::current_with_span(span);
        let mut inner = self.inner.clone();

        let guard = cx.clone().attach();
        let future = inner.call(req);
        drop(guard);

        Box::pin(async move {
            let response = future.await?;

            let span = cx.span();
            let status = response.status();
            span.set_attribute(KeyValue::new("http.status_code", status.as_u16() as i64));

            if status.is_server_error() {
                span.set_status(opentelemetry::trace::Status::error(status.to_string()));
            } else if status.is_client_error() {
                span.set_attribute(KeyValue::new("error.type", "client_error"));
            }

            Ok(response)
        })
    }
}
