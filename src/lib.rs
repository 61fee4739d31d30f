//! Deployment canary service library.

pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use api::RequestCounter;
pub use config::ServiceConfig;
pub use error::ApiError;
pub use http::{AppState, HttpServer};
pub use lifecycle::Shutdown;
