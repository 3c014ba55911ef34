//! Randomized per-request pacing
//!
//! Every worker pauses for a random interval before each network call so
//! the crawler does not hammer the origin. This is a flat per-request
//! pause, not a token bucket: aggregate request rate scales with pool size.

use rand::Rng;
use std::time::Duration;
use tokio::time::sleep;

/// Imposes a uniformly random delay before each network call
#[derive(Debug, Clone)]
pub struct RateLimiter {
    min_ms: u64,
    max_ms: u64,
}

impl RateLimiter {
    /// Creates a limiter drawing pauses from `[min_ms, max_ms]` milliseconds
    ///
    /// Validation guarantees `min_ms <= max_ms`.
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    /// Sleeps the calling task for a random duration within the interval
    ///
    /// The random draw completes before the sleep starts, so no RNG handle
    /// is held across the await point.
    pub async fn pause(&self) {
        let wait_ms = {
            let mut rng = rand::thread_rng();
            rng.gen_range(self.min_ms..=self.max_ms)
        };
        sleep(Duration::from_millis(wait_ms)).await;
    }
}
