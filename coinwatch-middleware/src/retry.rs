//! Retrying transient failures with jittered exponential backoff.

use std::time::Duration;

use async_trait::async_trait;
use coinwatch_http::{BoxError, HttpRequest, HttpResponse, Middleware, Next};
use rand::Rng;
use url::Url;

/// Opt-in retry layer.
///
/// Re-runs the inner chain when it fails outright (transport or an inner
/// middleware) or answers with a retryable status code, by default `429`
/// and every `5xx`. A success or non-retryable status is delivered
/// immediately; once attempts are exhausted, the last outcome is delivered
/// as-is, so a stubbornly rate-limited endpoint still reaches the caller's
/// undocumented-status handling instead of turning into a synthetic error.
///
/// Delays grow exponentially from [`Self::min_delay`] by [`Self::factor`]
/// per attempt, capped at [`Self::max_delay`], with uniform random jitter
/// added on top so synchronized clients do not retry in lockstep.
///
/// Serializer and deserializer failures never reach this layer; only the
/// request leg is retried.
#[derive(Debug, Clone)]
pub struct RetryMiddleware {
    max_attempts: u32,
    min_delay: Duration,
    max_delay: Duration,
    factor: u32,
    jitter_percent: u8,
    retry_statuses: Vec<u16>,
    retry_server_errors: bool,
}

impl Default for RetryMiddleware {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            min_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(10),
            factor: 2,
            jitter_percent: 20,
            retry_statuses: vec![429],
            retry_server_errors: true,
        }
    }
}

impl RetryMiddleware {
    /// Retry with the default policy: 3 attempts, 250ms doubling to a 10s
    /// cap, 20% jitter, retry on failure, `429`, and `5xx`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total attempts including the first (minimum 1).
    #[must_use]
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Delay before the first retry.
    #[must_use]
    pub fn min_delay(mut self, min_delay: Duration) -> Self {
        self.min_delay = min_delay;
        self
    }

    /// Upper bound any single delay is clamped to.
    #[must_use]
    pub fn max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    /// Exponential growth factor applied per attempt (>= 1).
    #[must_use]
    pub fn factor(mut self, factor: u32) -> Self {
        self.factor = factor.max(1);
        self
    }

    /// Random jitter percentage `[0, 100]` added to each delay.
    #[must_use]
    pub fn jitter_percent(mut self, jitter_percent: u8) -> Self {
        self.jitter_percent = jitter_percent.min(100);
        self
    }

    /// Replace the exact retryable status codes (`429` by default).
    #[must_use]
    pub fn retry_statuses(mut self, statuses: impl Into<Vec<u16>>) -> Self {
        self.retry_statuses = statuses.into();
        self
    }

    /// Whether every `5xx` counts as retryable (on by default).
    #[must_use]
    pub fn retry_server_errors(mut self, retry: bool) -> Self {
        self.retry_server_errors = retry;
        self
    }

    fn is_retryable_status(&self, status: u16) -> bool {
        self.retry_statuses.contains(&status)
            || (self.retry_server_errors && (500..=599).contains(&status))
    }

    fn delay_for(&self, attempt: u32) -> Duration {
        let growth = u64::from(self.factor).saturating_pow(attempt.saturating_sub(1));
        let min_ms = u64::try_from(self.min_delay.as_millis()).unwrap_or(u64::MAX);
        let max_ms = u64::try_from(self.max_delay.as_millis()).unwrap_or(u64::MAX);
        let base_ms = min_ms.saturating_mul(growth).min(max_ms);
        Duration::from_millis(jittered(base_ms, self.jitter_percent))
    }
}

/// Add uniform random jitter on top of `base_ms`.
fn jittered(base_ms: u64, jitter_percent: u8) -> u64 {
    if jitter_percent == 0 {
        return base_ms;
    }
    let jitter_range = std::cmp::max(1, base_ms.saturating_mul(u64::from(jitter_percent)) / 100);
    let mut rng = rand::rng();
    base_ms.saturating_add(rng.random_range(0..jitter_range))
}

#[async_trait]
impl Middleware for RetryMiddleware {
    fn name(&self) -> &'static str {
        "retry"
    }

    async fn intercept(
        &self,
        request: HttpRequest,
        base_url: &Url,
        next: Next<'_>,
    ) -> Result<HttpResponse, BoxError> {
        let mut attempt = 1u32;
        loop {
            let outcome = next.run(request.clone(), base_url).await;
            let retryable = match &outcome {
                Ok(response) => self.is_retryable_status(response.status),
                Err(_) => true,
            };
            if !retryable || attempt >= self.max_attempts {
                return outcome.map_err(BoxError::from);
            }
            tokio::time::sleep(self.delay_for(attempt)).await;
            attempt += 1;
        }
    }
}
