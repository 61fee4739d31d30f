//! Kubernetes-style probe endpoints.
//!
//! # Probes
//! ```text
//! GET /health → liveness:  the process is up and serving
//! GET /ready  → readiness: the process can take traffic
//! ```
//!
//! # Design Decisions
//! - Probes touch no shared state, so they answer even under load
//! - Both always return 200 while the listener is accepting

pub mod probes;
