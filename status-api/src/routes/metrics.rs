use axum::http::{StatusCode, header};

/// Content type of the Prometheus text exposition format.
pub const TEXT_FORMAT: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Placeholder exposition body. The counter is never incremented.
pub const METRICS_BODY: &str = "# HELP app_requests_total Total requests\napp_requests_total 1\n";

/// `GET /metrics`
///
/// Serves a fixed text-exposition body for scrapers.
pub async fn metrics() -> (StatusCode, [(header::HeaderName, &'static str); 1], &'static str) {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, TEXT_FORMAT)],
        METRICS_BODY,
    )
}
