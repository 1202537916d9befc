use std::time::{Duration, SystemTime, UNIX_EPOCH};

use axum::{Json, http::StatusCode};
use serde::Serialize;

/// Liveness response carrying the server clock.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    /// Seconds since the Unix epoch, with sub-second precision.
    pub time: f64,
}

/// `GET /`
///
/// Returns `{"status": "ok", "time": <unix seconds>}` with the time read at
/// handling.
pub async fn status() -> (StatusCode, Json<StatusResponse>) {
    (
        StatusCode::OK,
        Json(StatusResponse {
            status: "ok",
            time: current_unix_time(),
        }),
    )
}

/// Returns the current wall-clock time as fractional seconds since Unix epoch.
///
/// On error (system clock before epoch) this falls back to 0.
fn current_unix_time() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| Duration::from_secs(0))
        .as_secs_f64()
}
