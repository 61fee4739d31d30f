//! Structured logging.
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - JSON format for production, pretty format for development
//! - `RUST_LOG` overrides the configured default filter

use tracing_subscriber::{
    layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

use crate::config::{LogFormat, ObservabilityConfig};

/// Install the global tracing subscriber.
///
/// Fails if a subscriber has already been installed.
pub fn init(config: &ObservabilityConfig) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false),
            )
            .try_init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init(),
    }
}
