//! Configuration schema definitions.
//!
//! All types derive Serde traits so the resolved configuration can be
//! logged or inspected as structured data.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Environment label used when `ENVIRONMENT` is unset.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Environment label that switches logging to JSON.
pub const PRODUCTION_ENVIRONMENT: &str = "production";

/// Root configuration for the service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (host, port).
    pub listener: ListenerConfig,

    /// Free-text deployment label surfaced by `GET /`.
    pub environment: String,

    /// Request size limits.
    pub limits: LimitsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            limits: LimitsConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Whether this deployment is labelled as production.
    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case(PRODUCTION_ENVIRONMENT)
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Interface to bind (all interfaces by default).
    pub host: String,

    /// TCP port to listen on.
    pub port: u16,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ListenerConfig {
    /// The `host:port` string handed to the TCP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Request size limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 100 * 1024, // 100KB
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output for local development.
    Pretty,
    /// One JSON object per line for log collectors.
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub log_filter: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Port for the Prometheus scrape endpoint. Disabled when `None`.
    pub metrics_port: Option<u16>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "deploy_canary=info,tower_http=info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_port: None,
        }
    }
}

impl ObservabilityConfig {
    /// Address of the metrics endpoint on the listener's interface.
    pub fn metrics_address(&self, host: &str) -> Option<SocketAddr> {
        let port = self.metrics_port?;
        format!("{}:{}", host, port).parse().ok()
    }
}
