//! Request ID handling and per-request spans.
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - A client-supplied `x-request-id` is kept, not replaced
//! - The same ID is copied onto the response

use axum::{body::Body, http::Request};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tracing::Span;

/// Header carrying the request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Access to the correlation ID of a request.
pub trait RequestIdExt {
    fn request_id(&self) -> Option<&str>;
}

impl<B> RequestIdExt for Request<B> {
    fn request_id(&self) -> Option<&str> {
        self.headers()
            .get(X_REQUEST_ID)
            .and_then(|value| value.to_str().ok())
    }
}

/// Assigns a UUID v4 to requests that arrive without an ID.
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::x_request_id(MakeRequestUuid)
}

/// Copies the request ID onto the response.
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::x_request_id()
}

/// Span wrapping one request, used by the trace layer.
pub fn make_request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = request.request_id().unwrap_or("unknown"),
    )
}
