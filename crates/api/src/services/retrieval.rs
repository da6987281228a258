//! Deferred catalog reads.
//!
//! Models a slow backing store: every read waits for a fixed delay before
//! running. The delay is configurable and may be zero.

use std::time::Duration;

use tracing::debug;

/// Runs an operation after a fixed delay.
#[derive(Debug, Clone, Copy)]
pub struct DelayedRetrieval {
    delay: Duration,
}

impl DelayedRetrieval {
    /// Create a retrieval helper with the given delay.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Wait for the delay, then run `op` and hand back its result.
    ///
    /// `op` runs after the wait, so it observes the state at completion time.
    pub async fn fetch<T, E, F>(&self, op: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if !self.delay.is_zero() {
            debug!(delay_ms = self.delay.as_millis(), "Delaying retrieval");
            tokio::time::sleep(self.delay).await;
        }
        op()
    }
}
