//! Startup orchestration.
//!
//! # Responsibilities
//! - Bind the listener
//! - Start the optional metrics exporter
//! - Hook OS signals up to the shutdown coordinator
//! - Serve until shutdown completes

use metrics_exporter_prometheus::BuildError;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ServiceConfig;
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::metrics;

/// Fatal errors while bringing the service up or serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to start metrics exporter: {0}")]
    Metrics(#[from] BuildError),

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Bind, serve, and return once a shutdown signal has drained the server.
pub async fn run(config: ServiceConfig) -> Result<(), StartupError> {
    let address = config.listener.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind {
            address: address.clone(),
            source,
        })?;

    if let Some(metrics_addr) = config
        .observability
        .metrics_address(&config.listener.host)
    {
        metrics::init_metrics(metrics_addr)?;
    }

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        let signal = signals::wait_for_shutdown_signal().await;
        tracing::info!(%signal, "Shutdown signal received, shutting down gracefully");
        signal_shutdown.trigger();
    });

    HttpServer::new(config)
        .run(listener, server_shutdown)
        .await
        .map_err(StartupError::Serve)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bind_conflict_is_fatal() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = taken.local_addr().unwrap().port();

        let mut config = ServiceConfig::default();
        config.listener.host = "127.0.0.1".to_string();
        config.listener.port = port;

        match run(config).await {
            Err(StartupError::Bind { address, .. }) => {
                assert_eq!(address, format!("127.0.0.1:{port}"));
            }
            other => panic!("expected bind error, got {other:?}"),
        }
    }
}
