//! Deployment canary service.
//!
//! A small HTTP service used to exercise deployment pipelines: container
//! builds, liveness/readiness probes and rolling restarts.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ TcpListener ─▶ axum Router ─▶ handler ─▶ JSON
//!                                      │
//!                                      ├─ request id / trace / panic catch
//!                                      └─ fallback: 404 Route not found
//!
//!     SIGTERM ─▶ Shutdown ─▶ stop accepting ─▶ drain in-flight ─▶ exit 0
//! ```

use deploy_canary::config;
use deploy_canary::lifecycle::startup;
use deploy_canary::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match config::load_from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("deploy-canary: configuration error: {e}");
            std::process::exit(1);
        }
    };

    logging::init(&config.observability)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "deploy-canary starting"
    );
    tracing::info!(
        bind_address = %config.listener.bind_address(),
        environment = %config.environment,
        metrics_port = ?config.observability.metrics_port,
        "Configuration loaded"
    );

    if let Err(e) = startup::run(config).await {
        tracing::error!(error = %e, "Fatal error");
        return Err(e.into());
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
