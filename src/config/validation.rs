//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (parsing is handled by the loader)
//! - Validate value ranges (ports non-zero, limits positive)
//! - Detect conflicting listeners
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::ServiceConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener port must be non-zero")]
    ZeroPort,

    #[error("metrics port must be non-zero")]
    ZeroMetricsPort,

    #[error("metrics port {0} conflicts with the listener port")]
    MetricsPortConflict(u16),

    #[error("max body size must be greater than zero")]
    ZeroBodyLimit,
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }

    match config.observability.metrics_port {
        Some(0) => errors.push(ValidationError::ZeroMetricsPort),
        Some(port) if port == config.listener.port => {
            errors.push(ValidationError::MetricsPortConflict(port));
        }
        _ => {}
    }

    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
