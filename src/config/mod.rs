//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (PORT, ENVIRONMENT, METRICS_PORT)
//!     → loader.rs (lookup & parse)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!     → cloned into the HTTP server and lifecycle
//! ```
//!
//! # Design Decisions
//! - Config is resolved once at startup and never reloaded
//! - All fields have defaults so an empty environment is a valid config
//! - Validation separates parsing errors from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_from_env, load_from_lookup, ConfigError};
pub use schema::{
    LimitsConfig, ListenerConfig, LogFormat, ObservabilityConfig, ServiceConfig,
};
pub use validation::ValidationError;
