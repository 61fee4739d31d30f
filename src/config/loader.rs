//! Configuration loading from the process environment.

use thiserror::Error;

use crate::config::schema::{LogFormat, ServiceConfig};
use crate::config::validation::{validate_config, ValidationError};

/// Listen port.
pub const PORT_VAR: &str = "PORT";
/// Deployment label.
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";
/// Optional Prometheus scrape port.
pub const METRICS_PORT_VAR: &str = "METRICS_PORT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}: {reason}")]
    InvalidVar {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from the process environment.
pub fn load_from_env() -> Result<ServiceConfig, ConfigError> {
    load_from_lookup(|key| std::env::var(key).ok())
}

/// Load and validate configuration from an arbitrary variable source.
///
/// Empty values are treated as unset.
pub fn load_from_lookup<F>(lookup: F) -> Result<ServiceConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| {
        lookup(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    };

    let mut config = ServiceConfig::default();

    if let Some(port) = get(PORT_VAR) {
        config.listener.port = parse_port(PORT_VAR, port)?;
    }

    if let Some(environment) = get(ENVIRONMENT_VAR) {
        config.environment = environment;
    }

    if let Some(port) = get(METRICS_PORT_VAR) {
        config.observability.metrics_port = Some(parse_port(METRICS_PORT_VAR, port)?);
    }

    if config.is_production() {
        config.observability.log_format = LogFormat::Json;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn parse_port(var: &'static str, value: String) -> Result<u16, ConfigError> {
    value.parse::<u16>().map_err(|e| ConfigError::InvalidVar {
        var,
        reason: e.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = load_from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.listener.port, 8080);
        assert_eq!(config.listener.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.environment, "development");
        assert_eq!(config.observability.log_format, LogFormat::Pretty);
        assert!(config.observability.metrics_port.is_none());
    }

    #[test]
    fn reads_port_and_environment() {
        let config = load_from_lookup(lookup(&[("PORT", "3000"), ("ENVIRONMENT", "staging")])).unwrap();
        assert_eq!(config.listener.port, 3000);
        assert_eq!(config.environment, "staging");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = load_from_lookup(lookup(&[("PORT", "  "), ("ENVIRONMENT", "")])).unwrap();
        assert_eq!(config.listener.port, 8080);
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn production_switches_to_json_logs() {
        let config = load_from_lookup(lookup(&[("ENVIRONMENT", "Production")])).unwrap();
        assert_eq!(config.observability.log_format, LogFormat::Json);
    }

    #[test]
    fn rejects_non_numeric_port() {
        let err = load_from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
        match err {
            ConfigError::InvalidVar { var, value, .. } => {
                assert_eq!(var, "PORT");
                assert_eq!(value, "http");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_out_of_range_port() {
        assert!(matches!(
            load_from_lookup(lookup(&[("PORT", "70000")])),
            Err(ConfigError::InvalidVar { var: "PORT", .. })
        ));
    }

    #[test]
    fn reports_all_validation_errors() {
        let err = load_from_lookup(lookup(&[("PORT", "0"), ("METRICS_PORT", "0")])).unwrap_err();
        match err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
    }
}
