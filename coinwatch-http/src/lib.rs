//! coinwatch-http
//!
//! A generic, middleware-composable HTTP request pipeline.
//!
//! - `types`: the wire model (requests, responses, header/query pairs) and
//!   the closed-variant operation outcome.
//! - `error`: the single normalized [`ClientError`] every send produces, plus
//!   the internal [`RuntimeError`] tags that identify the failing layer.
//! - `middleware`: the [`Middleware`] trait and the [`Next`] continuation.
//! - `transport`: the [`Transport`] trait and the production `reqwest`-backed
//!   implementation.
//! - `client`: [`UniversalClient`], which runs
//!   serialize → middleware chain → transport → deserialize.
//!
//! Every failure leaving [`UniversalClient::send`] is a [`ClientError`]. The
//! error starts at the failing layer with only a cause and an underlying
//! error, and outer layers progressively fill the remaining context (request,
//! base URL, response) without ever overwriting what an inner layer set.
#![warn(missing_docs)]

/// The `UniversalClient` request pipeline and its builder.
pub mod client;
/// Pipeline error types and enrichment rules.
pub mod error;
/// Middleware trait and chain continuation.
pub mod middleware;
/// Transport trait, the reqwest-backed transport, and URL resolution.
pub mod transport;
/// Request/response wire model.
pub mod types;

pub use client::{UniversalClient, UniversalClientBuilder};
pub use error::{BoxError, ClientError, RuntimeError};
pub use middleware::{Middleware, Next};
pub use transport::{ReqwestTransport, Transport, resolve_url};
pub use types::{
    ApiOutcome, HeaderField, HttpRequest, HttpResponse, Method, QueryItem, UndocumentedPayload,
};
