//! Request-level errors and their mapping to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors a handler can return.
///
/// `IntoResponse` below is the only place these become status codes.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Route not found: {path}")]
    NotFound { path: String },

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn not_found(path: impl Into<String>) -> Self {
        ApiError::NotFound { path: path.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }

    /// Status code this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum ErrorBody {
    NotFound { error: &'static str, path: String },
    Internal { error: &'static str, message: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            ApiError::NotFound { path } => {
                tracing::debug!(path = %path, "No route matched");
                ErrorBody::NotFound {
                    error: "Route not found",
                    path,
                }
            }
            ApiError::Internal(message) => {
                tracing::error!(error = %message, "Handler failed");
                ErrorBody::Internal {
                    error: "Internal server error",
                    message,
                }
            }
        };

        (status, Json(body)).into_response()
    }
}
