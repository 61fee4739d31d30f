//! Shutdown coordination.

use tokio::sync::broadcast;

/// Coordinator for graceful shutdown.
///
/// Long-running tasks subscribe to a broadcast channel and stop when it
/// fires. Subscribe before triggering; a late subscriber misses the signal.
#[derive(Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Fire the shutdown signal. Returns how many subscribers were notified.
    pub fn trigger(&self) -> usize {
        let notified = self.tx.send(()).unwrap_or(0);
        tracing::debug!(notified, "Shutdown triggered");
        notified
    }

    /// Number of subscribers still listening.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
