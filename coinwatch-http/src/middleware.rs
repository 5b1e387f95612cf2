//! Request interception.
//!
//! Middlewares wrap the transport in configured order: the first middleware
//! given to the client sees the request first and the transport last. Each
//! layer receives a [`Next`] continuation representing everything after it.

use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use crate::error::{BoxError, ClientError, RuntimeError};
use crate::transport::Transport;
use crate::types::{HttpRequest, HttpResponse};

/// Trait implemented by request middleware layers.
///
/// A middleware may rewrite the request, short-circuit with its own
/// response, or invoke [`Next::run`] more than once (retries). Errors it
/// returns are attributed to it by [`Middleware::name`] unless they are
/// already normalized [`ClientError`]s bubbling up from an inner layer.
#[async_trait]
pub trait Middleware: Send + Sync {
    /// Human-readable middleware name used to attribute failures.
    fn name(&self) -> &'static str;

    /// Handle `request`, forwarding to `next` zero or more times.
    async fn intercept(
        &self,
        request: HttpRequest,
        base_url: &Url,
        next: Next<'_>,
    ) -> Result<HttpResponse, BoxError>;
}

/// The remainder of the pipeline after the current middleware.
///
/// Copyable so a middleware can run the rest of the chain several times
/// with cloned requests.
#[derive(Clone, Copy)]
pub struct Next<'a> {
    transport: &'a dyn Transport,
    middlewares: &'a [Arc<dyn Middleware>],
}

impl<'a> Next<'a> {
    pub(crate) fn new(
        transport: &'a dyn Transport,
        middlewares: &'a [Arc<dyn Middleware>],
    ) -> Self {
        Self {
            transport,
            middlewares,
        }
    }

    /// Run the remaining middlewares and, at the end of the chain, the
    /// transport.
    ///
    /// A failure raised here is tagged with the layer that raised it: the
    /// offending middleware's name, or a transport failure. An error that is
    /// already a [`ClientError`] keeps its original tag and context.
    pub async fn run(
        self,
        request: HttpRequest,
        base_url: &Url,
    ) -> Result<HttpResponse, ClientError> {
        match self.middlewares.split_first() {
            Some((current, rest)) => {
                let next = Next::new(self.transport, rest);
                current
                    .intercept(request, base_url, next)
                    .await
                    .map_err(|error| {
                        tag_unless_normalized(error, |source| RuntimeError::MiddlewareFailed {
                            middleware: current.name(),
                            source,
                        })
                    })
            }
            None => self
                .transport
                .send(&request, base_url)
                .await
                .map_err(|error| tag_unless_normalized(error, RuntimeError::TransportFailed)),
        }
    }
}

fn tag_unless_normalized(
    error: BoxError,
    tag: impl FnOnce(BoxError) -> RuntimeError,
) -> ClientError {
    match error.downcast::<ClientError>() {
        Ok(client) => *client,
        Err(other) => ClientError::normalize(Box::new(tag(other))),
    }
}
