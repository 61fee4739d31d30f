//! Application routes.
//!
//! # Routes
//! ```text
//! GET  /health       liveness probe        (health::probes)
//! GET  /ready        readiness probe       (health::probes)
//! GET  /             welcome message
//! GET  /api/info     build & process info
//! GET  /api/counter  increment + read the request counter
//! POST /api/echo     echo the JSON body
//! *                  404 Route not found
//! ```

pub mod counter;
pub mod handlers;
pub mod info;

use axum::{
    routing::{get, post},
    Router,
};
use chrono::{SecondsFormat, Utc};

use crate::health::probes;
use crate::http::server::AppState;

pub use counter::RequestCounter;

/// Reported by `/` and `/api/info`.
pub const VERSION: &str = "1.0.0";

/// Reported by `/api/info`.
pub const APPLICATION_NAME: &str = "Simple Test App";

/// Current time as ISO-8601 UTC with millisecond precision.
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// All application routes, without middleware or fallbacks.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(probes::health))
        .route("/ready", get(probes::ready))
        .route("/", get(handlers::welcome))
        .route("/api/info", get(info::info))
        .route("/api/counter", get(handlers::counter))
        .route("/api/echo", post(handlers::echo))
}
