//! coinwatch-middleware
//!
//! Optional interceptors for the `coinwatch-http` pipeline. None of these are
//! wired in by default; callers opt in per client via
//! `UniversalClientBuilder::middleware`.
//!
//! - `headers`: [`StaticHeadersMiddleware`] stamps fixed header fields (API
//!   keys, user agents) onto every request.
//! - `retry`: [`RetryMiddleware`] re-runs the inner chain on transport
//!   failures and retryable status codes, with jittered exponential backoff.
//! - `logging` (feature `tracing`): [`LoggingMiddleware`] emits structured
//!   request, response, and failure events.
#![warn(missing_docs)]

/// Fixed request headers.
pub mod headers;
/// Structured request/response logging (feature `tracing`).
#[cfg(feature = "tracing")]
pub mod logging;
/// Retry with jittered exponential backoff.
pub mod retry;

pub use headers::StaticHeadersMiddleware;
#[cfg(feature = "tracing")]
pub use logging::LoggingMiddleware;
pub use retry::RetryMiddleware;
