// status-api/src/main.rs

//! Status API binary.
//!
//! Serves two endpoints on `0.0.0.0:5000`:
//!
//! - `GET /` (liveness JSON with the server clock)
//! - `GET /metrics` (static Prometheus text body)

mod config;
mod routes;

use tokio::{net::TcpListener, signal};

use config::ApiConfig;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "status_api=info,tower_http=info".to_string()),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("fatal error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let api_cfg = ApiConfig::default();

    let listener = TcpListener::bind(api_cfg.listen_addr)
        .await
        .map_err(|e| format!("failed to bind {}: {e}", api_cfg.listen_addr))?;

    tracing::info!("status API listening on http://{}", api_cfg.listen_addr);

    serve(listener, shutdown_signal())
        .await
        .map_err(|e| format!("API server error: {e}"))?;

    Ok(())
}

/// Serves the router on `listener` until `shutdown` resolves, then lets
/// in-flight requests drain.
async fn serve<F>(listener: TcpListener, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, routes::router())
        .with_graceful_shutdown(shutdown)
        .await
}

/// Waits for Ctrl-C (or SIGTERM on Unix) and returns, used for graceful
/// shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
