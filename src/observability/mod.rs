//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and middleware produce:
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (request counters and latency histograms)
//!
//! Consumers:
//!     → stdout (pretty locally, JSON in production)
//!     → Prometheus scrape endpoint (only when METRICS_PORT is set)
//! ```
//!
//! # Design Decisions
//! - Request ID is attached to every request span
//! - Metric updates are no-ops until an exporter is installed

pub mod logging;
pub mod metrics;
