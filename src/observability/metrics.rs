//! Metrics collection and exposition.
//!
//! # Metrics
//! - `http_requests_total` (counter): requests by method, route, status
//! - `http_request_duration_seconds` (histogram): latency distribution
//!
//! Route labels use the matched path template so unknown paths cannot
//! blow up label cardinality; anything unmatched is labelled `unmatched`.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Route label for requests that hit the fallback.
pub const UNMATCHED_ROUTE: &str = "unmatched";

/// Install the Prometheus recorder and serve it on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one finished request.
pub fn record_request(method: &str, route: &str, status: u16, start: Instant) {
    let method = method.to_string();
    let route = route.to_string();
    let status = status.to_string();

    ::metrics::counter!(
        "http_requests_total",
        "method" => method.clone(),
        "route" => route.clone(),
        "status" => status.clone()
    )
    .increment(1);

    ::metrics::histogram!(
        "http_request_duration_seconds",
        "method" => method,
        "route" => route,
        "status" => status
    )
    .record(start.elapsed().as_secs_f64());
}

/// Route-level middleware that records every matched request.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_owned());

    let response = next.run(request).await;

    record_request(method.as_str(), &route, response.status().as_u16(), start);
    response
}
