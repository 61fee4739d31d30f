//! Process-local request counter.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic counter behind `GET /api/counter`.
///
/// Starts at zero, only ever moves up by one, and lives as long as the
/// `AppState` that owns it.
#[derive(Debug, Default)]
pub struct RequestCounter {
    value: AtomicU64,
}

impl RequestCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one and return the new value as a single atomic step.
    pub fn increment(&self) -> u64 {
        self.value.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Read the current value without changing it.
    pub fn current(&self) -> u64 {
        self.value.load(Ordering::SeqCst)
    }
}
