//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request ID, panic catching, metrics)
//! - Bind server to listener
//! - Drain in-flight requests on shutdown

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    trace::TraceLayer,
};

use crate::api::{self, handlers, RequestCounter};
use crate::config::ServiceConfig;
use crate::http::{request, response};
use crate::observability::metrics;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Counter behind `GET /api/counter`.
    pub counter: Arc<RequestCounter>,
    /// Deployment label reported by `GET /`.
    pub environment: Arc<str>,
    /// When this state was created; basis for reported uptime.
    pub started_at: Instant,
}

impl AppState {
    /// Fresh state with a counter at zero.
    pub fn new(environment: &str) -> Self {
        Self::with_counter(environment, Arc::new(RequestCounter::new()))
    }

    /// State sharing an existing counter.
    pub fn with_counter(environment: &str, counter: Arc<RequestCounter>) -> Self {
        Self {
            counter,
            environment: Arc::from(environment),
            started_at: Instant::now(),
        }
    }
}

/// HTTP server for the service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let state = AppState::new(&config.environment);
        Self::with_state(config, state)
    }

    /// Create a server around caller-provided state.
    pub fn with_state(config: ServiceConfig, state: AppState) -> Self {
        let router = Self::build_router(&config, api::routes(), state.clone());
        Self {
            router,
            config,
            state,
        }
    }

    /// Attach fallbacks, state and the middleware stack to `routes`.
    fn build_router(config: &ServiceConfig, routes: Router<AppState>, state: AppState) -> Router {
        let layers = ServiceBuilder::new()
            .layer(request::set_request_id_layer())
            .layer(TraceLayer::new_for_http().make_span_with(request::make_request_span))
            .layer(request::propagate_request_id_layer())
            .layer(CatchPanicLayer::custom(response::panic_response));

        routes
            .route_layer(middleware::from_fn(metrics::track_requests))
            .fallback(handlers::not_found)
            .method_not_allowed_fallback(handlers::not_found)
            .with_state(state)
            .layer(DefaultBodyLimit::max(config.limits.max_body_bytes))
            .layer(layers)
    }

    /// Run the server until `shutdown` fires, then drain open connections.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            environment = %self.config.environment,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Stopped accepting connections, draining in-flight requests");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The fully assembled router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the shared state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
