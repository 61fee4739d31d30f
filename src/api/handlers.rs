use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, FromRequest, Request, State},
    http::{header, HeaderMap, Method, Uri},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;

use crate::api::{timestamp, VERSION};
use crate::error::ApiError;
use crate::http::server::AppState;
use crate::observability::metrics;

pub const WELCOME_MESSAGE: &str = "Welcome to Simple CI/CD Test Application!";

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub environment: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct CounterResponse {
    pub count: u64,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct EchoResponse {
    pub received: Value,
    pub timestamp: String,
}

pub async fn welcome(State(state): State<AppState>) -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE,
        version: VERSION,
        environment: state.environment.to_string(),
        timestamp: timestamp(),
    })
}

pub async fn counter(State(state): State<AppState>) -> Json<CounterResponse> {
    let count = state.counter.increment();
    tracing::debug!(count, "Counter incremented");

    Json(CounterResponse {
        count,
        timestamp: timestamp(),
    })
}

/// Returns the JSON body unchanged under `received`.
///
/// Bodies without a JSON content type are never read and echo as `{}`,
/// as do empty JSON bodies.
pub async fn echo(request: Request) -> Result<Json<EchoResponse>, ApiError> {
    if !is_json_content(request.headers()) {
        return Ok(Json(EchoResponse {
            received: empty_object(),
            timestamp: timestamp(),
        }));
    }

    let body = Bytes::from_request(request, &())
        .await
        .map_err(|rejection: BytesRejection| ApiError::internal(rejection.body_text()))?;

    let received = if body.is_empty() {
        empty_object()
    } else {
        serde_json::from_slice(&body).map_err(|e| ApiError::internal(e.to_string()))?
    };

    Ok(Json(EchoResponse {
        received,
        timestamp: timestamp(),
    }))
}

/// Fallback for unknown paths and for known paths hit with the wrong method.
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    let start = Instant::now();
    let error = ApiError::not_found(uri.path());
    metrics::record_request(method.as_str(), metrics::UNMATCHED_ROUTE, error.status().as_u16(), start);
    error
}

fn empty_object() -> Value {
    Value::Object(Default::default())
}

fn is_json_content(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}
