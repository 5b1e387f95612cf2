//! The request pipeline.
//!
//! [`UniversalClient`] runs every operation through the same four stages:
//! serialize the operation input into an [`HttpRequest`], thread the request
//! through the middleware chain (first configured middleware sees the request
//! first), execute it on the [`Transport`], and deserialize the
//! [`HttpResponse`] into the operation output. Any stage's failure leaves the
//! client as a [`ClientError`] enriched with whatever context existed at the
//! failing stage.

use std::fmt;
use std::sync::Arc;

use url::Url;

use crate::error::{BoxError, ClientError, RuntimeError};
use crate::middleware::{Middleware, Next};
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{HttpRequest, HttpResponse};

/// Generic request pipeline: one base URL, one transport, an ordered
/// middleware chain.
///
/// Cloning is cheap; the transport and middlewares are shared.
#[derive(Clone)]
pub struct UniversalClient {
    base_url: Option<String>,
    transport: Arc<dyn Transport>,
    middlewares: Vec<Arc<dyn Middleware>>,
}

impl UniversalClient {
    /// Start building a client.
    #[must_use]
    pub fn builder() -> UniversalClientBuilder {
        UniversalClientBuilder {
            base_url: None,
            transport: None,
            middlewares: Vec::new(),
        }
    }

    /// Run one operation through the pipeline.
    ///
    /// The `serializer` builds the request from `input`; the `deserializer`
    /// interprets the response. Both report failures as boxed errors, which
    /// the pipeline normalizes into [`ClientError`] with the context fields
    /// known at the failing stage:
    ///
    /// - no usable base URL: cause only, no request;
    /// - serialization: no request, no response;
    /// - middleware or transport: request and base URL, no response;
    /// - deserialization: request, base URL, and response.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "coinwatch_http::client::send",
            skip(self, input, serializer, deserializer),
            fields(base_url = ?self.base_url),
        )
    )]
    pub async fn send<Input, Output, S, D>(
        &self,
        input: Input,
        serializer: S,
        deserializer: D,
    ) -> Result<Output, ClientError>
    where
        Input: fmt::Debug + Send,
        S: FnOnce(&Input) -> Result<HttpRequest, BoxError> + Send,
        D: FnOnce(&HttpResponse) -> Result<Output, BoxError> + Send,
    {
        let base_url = self
            .parse_base_url()
            .map_err(|error| error.or_input(format!("{input:?}")))?;
        let request = serializer(&input)
            .map_err(|error| ClientError::normalize(error).or_input(format!("{input:?}")))?;
        let chain = Next::new(self.transport.as_ref(), &self.middlewares);
        let response = chain
            .run(request.clone(), &base_url)
            .await
            .map_err(|error| {
                error
                    .or_input(format!("{input:?}"))
                    .or_request(&request)
                    .or_base_url(&base_url)
            })?;
        deserializer(&response).map_err(|error| {
            ClientError::normalize(error)
                .or_input(format!("{input:?}"))
                .or_request(&request)
                .or_base_url(&base_url)
                .or_response(&response)
        })
    }

    /// A usable base URL must be configured before anything else runs.
    fn parse_base_url(&self) -> Result<Url, ClientError> {
        let raw = self.base_url.as_deref().unwrap_or_default();
        Url::parse(raw)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| {
                ClientError::normalize(Box::new(RuntimeError::InvalidBaseUrl(raw.to_owned())))
            })
    }
}

/// Builder for [`UniversalClient`].
pub struct UniversalClientBuilder {
    base_url: Option<String>,
    transport: Option<Arc<dyn Transport>>,
    middlewares: Vec<Arc<dyn Middleware>>,
}

impl UniversalClientBuilder {
    /// Set the base URL every request path is resolved against.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Replace the transport. Defaults to [`ReqwestTransport`].
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Append a middleware. The first appended middleware is the outermost
    /// layer: it sees requests first and responses last.
    #[must_use]
    pub fn middleware(mut self, middleware: Arc<dyn Middleware>) -> Self {
        self.middlewares.push(middleware);
        self
    }

    /// Finish building the client.
    #[must_use]
    pub fn build(self) -> UniversalClient {
        UniversalClient {
            base_url: self.base_url,
            transport: self
                .transport
                .unwrap_or_else(|| Arc::new(ReqwestTransport::new())),
            middlewares: self.middlewares,
        }
    }
}
