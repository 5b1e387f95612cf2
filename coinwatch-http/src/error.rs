//! The pipeline's error model.
//!
//! [`RuntimeError`] is the internal wrapper each pipeline layer uses to tag a
//! raw failure with the layer that raised it. [`ClientError`] is the one
//! normalized shape callers see: it is created at the failing layer and
//! enriched on the way out, each outer layer filling only the context fields
//! the inner layers left absent.

use thiserror::Error;
use url::Url;

use crate::types::{HttpRequest, HttpResponse};

/// Type-erased error produced by serializers, transports, middleware, and
/// deserializers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Internal tags identifying which pipeline layer raised an error.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The client has no usable base URL configured.
    #[error("invalid base URL: {0:?}")]
    InvalidBaseUrl(String),

    /// The transport failed to produce a response.
    #[error("transport failed")]
    TransportFailed(#[source] BoxError),

    /// A middleware raised while intercepting the request.
    #[error("middleware '{middleware}' failed")]
    MiddlewareFailed {
        /// Name of the offending middleware, as reported by
        /// [`crate::Middleware::name`].
        middleware: &'static str,
        /// The error the middleware raised.
        #[source]
        source: BoxError,
    },
}

impl RuntimeError {
    /// Unwrap one level: the error this tag wraps, if any.
    fn into_underlying(self) -> Result<BoxError, Self> {
        match self {
            Self::TransportFailed(inner) => Ok(inner),
            Self::MiddlewareFailed { source, .. } => Ok(source),
            err @ Self::InvalidBaseUrl(_) => Err(err),
        }
    }
}

/// The single normalized error leaving [`crate::UniversalClient::send`].
///
/// Context fields start absent and are filled progressively as the error
/// propagates serializer → transport → middleware → deserializer and out of
/// the client. A field set by an inner layer is never overwritten by an
/// outer one, so the innermost cause always survives.
///
/// Field-fill guarantees:
/// - serialization failure: no request, no response;
/// - transport or middleware failure: request (with body), no response;
/// - deserialization failure: request and response.
#[derive(Debug, Error)]
#[error("{cause}")]
pub struct ClientError {
    /// Debug rendering of the operation input, when known.
    pub input: Option<String>,
    /// The serialized request (body included), when one was constructed.
    pub request: Option<HttpRequest>,
    /// The base URL the pipeline resolved against, when known.
    pub base_url: Option<Url>,
    /// The response (body included), when one was received.
    pub response: Option<HttpResponse>,
    /// Human-readable description of the failing layer.
    pub cause: String,
    /// The deepest underlying error, unwrapped one level out of
    /// [`RuntimeError`].
    #[source]
    pub source: BoxError,
}

impl ClientError {
    /// Normalize a raw layer failure.
    ///
    /// An error that is already a `ClientError` passes through unchanged, so
    /// inner context survives. Anything else is wrapped: a [`RuntimeError`]
    /// contributes its tag as the cause and is unwrapped one level to expose
    /// the deepest underlying error; an unrecognized error keeps an
    /// `"unknown"` cause.
    #[must_use]
    pub fn normalize(error: BoxError) -> Self {
        let error = match error.downcast::<Self>() {
            Ok(client) => return *client,
            Err(other) => other,
        };
        match error.downcast::<RuntimeError>() {
            Ok(runtime) => {
                let cause = runtime.to_string();
                let source = match runtime.into_underlying() {
                    Ok(inner) => inner,
                    Err(tag) => Box::new(tag),
                };
                Self::bare(cause, source)
            }
            Err(other) => Self::bare("unknown", other),
        }
    }

    /// Fill the input rendering if no inner layer captured one.
    #[must_use]
    pub fn or_input(mut self, input: impl Into<String>) -> Self {
        if self.input.is_none() {
            self.input = Some(input.into());
        }
        self
    }

    /// Fill the request if no inner layer captured one.
    #[must_use]
    pub fn or_request(mut self, request: &HttpRequest) -> Self {
        if self.request.is_none() {
            self.request = Some(request.clone());
        }
        self
    }

    /// Fill the base URL if no inner layer captured one.
    #[must_use]
    pub fn or_base_url(mut self, base_url: &Url) -> Self {
        if self.base_url.is_none() {
            self.base_url = Some(base_url.clone());
        }
        self
    }

    /// Fill the response if no inner layer captured one.
    #[must_use]
    pub fn or_response(mut self, response: &HttpResponse) -> Self {
        if self.response.is_none() {
            self.response = Some(response.clone());
        }
        self
    }

    fn bare(cause: impl Into<String>, source: BoxError) -> Self {
        Self {
            input: None,
            request: None,
            base_url: None,
            response: None,
            cause: cause.into(),
            source,
        }
    }
}
