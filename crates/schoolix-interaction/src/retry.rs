//! Retry with exponential backoff for remote model calls.
//!
//! Only transient-capacity failures (rate limited, service unavailable) are
//! retried. Anything else goes straight back to the caller.

use std::future::Future;
use std::time::Duration;

use schoolix_core::config::RetrySettings;
use schoolix_core::model::RemoteError;

/// How many times to try and how long to wait in between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, the first call included.
    pub max_attempts: u32,
    pub initial_delay: Duration,
    pub backoff_factor: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&RetrySettings::default())
    }
}

impl From<&RetrySettings> for RetryPolicy {
    fn from(settings: &RetrySettings) -> Self {
        Self {
            max_attempts: settings.max_attempts.max(1),
            initial_delay: Duration::from_millis(settings.initial_delay_ms),
            backoff_factor: settings.backoff_factor,
        }
    }
}

impl RetryPolicy {
    /// Wait after the failed `attempt` (1-based): `initial * factor^(attempt-1)`.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exp = self
            .backoff_factor
            .saturating_pow(attempt.saturating_sub(1));
        self.initial_delay.saturating_mul(exp)
    }
}

/// Runs `f` until it succeeds, fails non-transiently, or attempts run out.
pub async fn with_retry<F, Fut, T>(policy: &RetryPolicy, f: F) -> Result<T, RemoteError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, RemoteError>>,
{
    with_retry_and_hook(policy, f, |_, _, _| {}).await
}

/// Same as [`with_retry`] but calls `hook(attempt, &error, delay)` before each
/// backoff sleep.
pub async fn with_retry_and_hook<F, Fut, T, H>(
    policy: &RetryPolicy,
    mut f: F,
    mut hook: H,
) -> Result<T, RemoteError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, RemoteError>>,
    H: FnMut(u32, &RemoteError, Duration),
{
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;
        match f().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !err.is_transient() || attempt >= policy.max_attempts {
                    return Err(err);
                }
                let delay = policy.delay_for(attempt);
                tracing::warn!(
                    "Model API busy (attempt {}/{}). Retrying in {}ms: {}",
                    attempt,
                    policy.max_attempts,
                    delay.as_millis(),
                    err
                );
                hook(attempt, &err, delay);
                tokio::time::sleep(delay).await;
            }
        }
    }
}
