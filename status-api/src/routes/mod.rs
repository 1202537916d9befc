//! HTTP routes.
//!
//! - `GET /` returns the liveness JSON with the server clock.
//! - `GET /metrics` returns the placeholder exposition body.
//!
//! Anything else falls through to axum's default 404.

pub mod metrics;
pub mod status;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

/// Builds the router serving both endpoints, with per-request tracing spans.
pub fn router() -> Router {
    Router::new()
        .route("/", get(status::status))
        .route("/metrics", get(metrics::metrics))
        .layer(TraceLayer::new_for_http())
}
