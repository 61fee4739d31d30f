//! Response handling for faults that escape a handler.
//!
//! A panic inside a handler is caught by `CatchPanicLayer` and turned into
//! the same JSON 500 body an `ApiError::Internal` produces, so one bad
//! request never takes the listener down.

use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::error::ApiError;

/// Response builder for `CatchPanicLayer::custom`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "handler panicked".to_string()
    };

    ApiError::internal(message).into_response()
}
