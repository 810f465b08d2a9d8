//! Request pacing between box score fetches.

use std::time::Duration;

use async_trait::async_trait;

/// Default pause between week fetches.
pub const DEFAULT_PACE: Duration = Duration::from_millis(500);

#[async_trait]
pub trait Pacer: Send + Sync {
    /// Wait before the next provider request.
    async fn pause(&self);
}

/// Sleeps for a fixed delay on the tokio timer.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

#[async_trait]
impl Pacer for FixedDelay {
    async fn pause(&self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}

/// Never waits. For tests and `--pace-ms 0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacing;

#[async_trait]
impl Pacer for NoPacing {
    async fn pause(&self) {}
}

/// Pick a pacer for `delay`; zero disables pacing.
pub fn pacer_for(delay: Duration) -> Box<dyn Pacer> {
    if delay.is_zero() {
        Box::new(NoPacing)
    } else {
        Box::new(FixedDelay(delay))
    }
}
