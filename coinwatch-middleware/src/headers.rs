//! Stamping fixed header fields onto every request.

use async_trait::async_trait;
use coinwatch_http::{BoxError, HeaderField, HttpRequest, HttpResponse, Middleware, Next};
use url::Url;

/// Appends a fixed set of header fields to every request before delegating.
///
/// Headers are appended in configuration order after whatever the serializer
/// already set, so an operation-specific header wins only by coming first.
///
/// ```
/// use coinwatch_middleware::StaticHeadersMiddleware;
///
/// let auth = StaticHeadersMiddleware::new()
///     .with_header("x-cg-demo-api-key", "demo-key")
///     .with_header("user-agent", "coinwatch/0.1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticHeadersMiddleware {
    fields: Vec<HeaderField>,
}

impl StaticHeadersMiddleware {
    /// No headers yet; add them with [`Self::with_header`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one header field.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(HeaderField::new(name, value));
        self
    }
}

#[async_trait]
impl Middleware for StaticHeadersMiddleware {
    fn name(&self) -> &'static str {
        "static-headers"
    }

    async fn intercept(
        &self,
        mut request: HttpRequest,
        base_url: &Url,
        next: Next<'_>,
    ) -> Result<HttpResponse, BoxError> {
        for field in &self.fields {
            request = request.with_header(field.name.as_str(), field.value.as_str());
        }
        Ok(next.run(request, base_url).await?)
    }
}
