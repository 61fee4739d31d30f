//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack, graceful shutdown)
//!     → request.rs (request ID, request span)
//!     → api routes / fallback
//!     → response.rs (panic → JSON 500)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestIdExt, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
