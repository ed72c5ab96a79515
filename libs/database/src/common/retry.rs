use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Backoff policy for establishing database connections at startup
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the first attempt
    pub max_retries: u32,

    /// Delay before the first retry, in milliseconds
    pub initial_delay_ms: u64,

    /// Ceiling for the delay between retries, in milliseconds
    pub max_delay_ms: u64,

    /// Factor applied to the delay after each failed retry
    pub backoff_multiplier: f64,

    /// Randomise each delay to 50-100% of its nominal value
    pub use_jitter: bool,
}

impl RetryConfig {
    /// 5 retries, 200ms initial delay, 5s ceiling, doubling, jittered
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_delay(mut self, delay_ms: u64) -> Self {
        self.initial_delay_ms = delay_ms;
        self
    }

    pub fn with_max_delay(mut self, delay_ms: u64) -> Self {
        self.max_delay_ms = delay_ms;
        self
    }

    pub fn without_jitter(mut self) -> Self {
        self.use_jitter = false;
        self
    }

    /// Nominal (un-jittered) delay before retry number `attempt` (1-based)
    fn nominal_delay(&self, attempt: u32) -> u64 {
        let factor = self.backoff_multiplier.powi(attempt.saturating_sub(1) as i32);
        ((self.initial_delay_ms as f64 * factor) as u64).min(self.max_delay_ms)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 5,
            initial_delay_ms: 200,
            max_delay_ms: 5000,
            backoff_multiplier: 2.0,
            use_jitter: true,
        }
    }
}

/// Retry an async operation with exponential backoff
///
/// The operation is attempted once, then up to `config.max_retries` more
/// times. The last error is returned when every attempt fails.
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut attempt = 0;

    loop {
        match operation().await {
            Ok(value) => {
                if attempt > 0 {
                    debug!(retries = attempt, "Operation succeeded after retrying");
                }
                return Ok(value);
            }
            Err(e) if attempt >= config.max_retries => {
                warn!(attempts = attempt + 1, error = %e, "Giving up after repeated failures");
                return Err(e);
            }
            Err(e) => {
                attempt += 1;

                let nominal = config.nominal_delay(attempt);
                let delay = if config.use_jitter {
                    apply_jitter(nominal)
                } else {
                    nominal
                };

                debug!(
                    attempt,
                    max_retries = config.max_retries,
                    delay_ms = delay,
                    error = %e,
                    "Operation failed, retrying"
                );

                tokio::time::sleep(Duration::from_millis(delay)).await;
            }
        }
    }
}

/// Scale `delay` by a pseudo-random factor in [0.5, 1.0)
fn apply_jitter(delay: u64) -> u64 {
    use std::collections::hash_map::RandomState;
    use std::hash::BuildHasher;

    let random_factor =
        (RandomState::new().hash_one(std::time::SystemTime::now()) % 50) as f64 / 100.0 + 0.5;

    (delay as f64 * random_factor) as u64
}
