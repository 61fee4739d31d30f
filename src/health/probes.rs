use axum::Json;
use serde::Serialize;

use crate::api::timestamp;

#[derive(Debug, Serialize)]
pub struct ProbeResponse {
    pub status: &'static str,
    pub timestamp: String,
}

/// Liveness probe.
pub async fn health() -> Json<ProbeResponse> {
    Json(ProbeResponse {
        status: "healthy",
        timestamp: timestamp(),
    })
}

/// Readiness probe.
pub async fn ready() -> Json<ProbeResponse> {
    Json(ProbeResponse {
        status: "ready",
        timestamp: timestamp(),
    })
}
