//! Structured request/response logging.

use std::time::Instant;

use async_trait::async_trait;
use coinwatch_http::{BoxError, HttpRequest, HttpResponse, Middleware, Next};
use url::Url;

/// Emits one `tracing` event per request, response, and failure.
///
/// Place it outermost to measure the whole chain including retries, or
/// innermost to see every individual transport attempt.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    /// Logging middleware with the default target.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[async_trait]
impl Middleware for LoggingMiddleware {
    fn name(&self) -> &'static str {
        "logging"
    }

    async fn intercept(
        &self,
        request: HttpRequest,
        base_url: &Url,
        next: Next<'_>,
    ) -> Result<HttpResponse, BoxError> {
        let method = request.method.as_str();
        let path = request.path.clone();
        tracing::debug!(method, path, "sending request");

        let started = Instant::now();
        match next.run(request, base_url).await {
            Ok(response) => {
                tracing::info!(
                    method,
                    path,
                    status = response.status,
                    elapsed_ms = elapsed_ms(started),
                    "request completed",
                );
                Ok(response)
            }
            Err(error) => {
                tracing::warn!(
                    method,
                    path,
                    error = %error,
                    elapsed_ms = elapsed_ms(started),
                    "request failed",
                );
                Err(BoxError::from(error))
            }
        }
    }
}
