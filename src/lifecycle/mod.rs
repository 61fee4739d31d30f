//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Bind listener → Start metrics exporter → Spawn signal watcher → Serve
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain in-flight requests → Exit 0
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Fail fast: a bind failure is fatal and never retried
//! - In-flight requests always finish; no forced deadline

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::StartupError;
