//! `GET /api/info`: build and process details.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::{APPLICATION_NAME, VERSION};
use crate::http::server::AppState;

/// Version of the compiler that built this binary.
pub const RUNTIME_VERSION: &str = env!("DEPLOY_CANARY_RUSTC_VERSION");

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub application: &'static str,
    pub version: &'static str,
    pub runtime_version: &'static str,
    pub uptime_seconds: f64,
    pub memory_stats: MemoryStats,
}

/// Process memory figures in bytes. `None` where the platform has no source.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct MemoryStats {
    pub resident_bytes: Option<u64>,
    pub peak_resident_bytes: Option<u64>,
    pub virtual_bytes: Option<u64>,
}

impl MemoryStats {
    /// Sample the current process.
    #[cfg(target_os = "linux")]
    pub fn sample() -> Self {
        match std::fs::read_to_string("/proc/self/status") {
            Ok(status) => Self::parse_proc_status(&status),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read /proc/self/status");
                Self::default()
            }
        }
    }

    #[cfg(not(target_os = "linux"))]
    pub fn sample() -> Self {
        Self::default()
    }

    /// Parse the `Vm*` lines of a `/proc/<pid>/status` file.
    pub fn parse_proc_status(status: &str) -> Self {
        let mut stats = Self::default();

        for line in status.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let slot = match key {
                "VmRSS" => &mut stats.resident_bytes,
                "VmHWM" => &mut stats.peak_resident_bytes,
                "VmSize" => &mut stats.virtual_bytes,
                _ => continue,
            };
            *slot = parse_kib(value);
        }

        stats
    }
}

// Values look like "   10240 kB".
fn parse_kib(value: &str) -> Option<u64> {
    let mut parts = value.split_whitespace();
    let amount: u64 = parts.next()?.parse().ok()?;
    match parts.next() {
        Some("kB") | None => amount.checked_mul(1024),
        Some(_) => None,
    }
}

pub async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        application: APPLICATION_NAME,
        version: VERSION,
        runtime_version: RUNTIME_VERSION,
        uptime_seconds: state.started_at.elapsed().as_secs_f64(),
        memory_stats: MemoryStats::sample(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUS: &str = "Name:\tdeploy-canary\n\
                          VmPeak:\t  20480 kB\n\
                          VmSize:\t  16384 kB\n\
                          VmHWM:\t    8192 kB\n\
                          VmRSS:\t    4096 kB\n\
                          Threads:\t4\n";

    #[test]
    fn parses_vm_lines() {
        let stats = MemoryStats::parse_proc_status(STATUS);
        assert_eq!(
            stats,
            MemoryStats {
                resident_bytes: Some(4096 * 1024),
                peak_resident_bytes: Some(8192 * 1024),
                virtual_bytes: Some(16384 * 1024),
            }
        );
    }

    #[test]
    fn missing_or_garbled_lines_stay_empty() {
        let stats = MemoryStats::parse_proc_status("VmRSS:\tlots kB\nName:\tx\n");
        assert_eq!(stats, MemoryStats::default());
    }

    #[test]
    fn runtime_version_names_the_compiler() {
        assert!(RUNTIME_VERSION.starts_with("rustc"));
    }
}
