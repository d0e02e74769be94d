use std::future::Future;
use std::time::Duration;

use crate::commons::ScrapeError;

/// Exponential backoff applied to rate-limited requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackoffPolicy {
    base: Duration,
    max_attempts: u32,
}

impl BackoffPolicy {
    pub const fn new(base: Duration, max_attempts: u32) -> Self {
        Self { base, max_attempts }
    }

    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Wait after the failed `attempt` (1-based): `base * 2^(attempt-1)`.
    pub fn delay(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        self.base.saturating_mul(1 << exponent)
    }

    /// Run `op` until it succeeds, fails with anything but a rate limit, or
    /// attempts run out.
    pub async fn run<T, F, Fut>(&self, label: &str, mut op: F) -> Result<T, ScrapeError>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, ScrapeError>>,
    {
        let attempts = self.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            match op(attempt).await {
                Err(ScrapeError::RateLimited) if attempt < attempts => {
                    let wait = self.delay(attempt);
                    log::warn!(
                        "{label}: rate limited, waiting {}s before retry {}/{attempts}",
                        wait.as_secs(),
                        attempt + 1
                    );
                    tokio::time::sleep(wait).await;
                    attempt += 1;
                }
                other => return other,
            }
        }
    }
}
