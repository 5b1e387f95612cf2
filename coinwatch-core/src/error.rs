//! The one error type crossing the worker, store, and orchestrator seams.

use coinwatch_http::ClientError;
use thiserror::Error;

/// Anything a search flow can fail with.
///
/// The orchestrator asks exactly one question of a failure (is this a
/// cancellation?) and routes everything else to a user-visible alert whose
/// message is this error's `Display` output.
#[derive(Debug, Error)]
pub enum SearchError {
    /// An API call failed inside the HTTP pipeline.
    #[error("{0}")]
    Api(#[from] ClientError),

    /// The server answered with a status code the operation does not model.
    ///
    /// Carries enough for callers to decide policy without re-parsing the
    /// response.
    #[error("undocumented response from {endpoint}: status {status}")]
    Undocumented {
        /// HTTP status code as received.
        status: u16,
        /// Path of the operation that received it.
        endpoint: String,
    },

    /// The recent-search store failed to load or save.
    #[error("recent-search store failed: {0}")]
    Store(String),

    /// The surrounding task was cancelled.
    ///
    /// Not a failure: swallowed silently at the orchestrator boundary and
    /// never surfaced to the user.
    #[error("cancelled")]
    Cancelled,
}

impl SearchError {
    /// Undocumented-response error for `endpoint` answering with `status`.
    pub fn undocumented(status: u16, endpoint: impl Into<String>) -> Self {
        Self::Undocumented {
            status,
            endpoint: endpoint.into(),
        }
    }

    /// Store failure with a human-readable reason.
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store(message.into())
    }

    /// True when this is the cooperative-cancellation marker.
    #[must_use]
    pub const fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undocumented_message_names_endpoint_and_status() {
        let err = SearchError::undocumented(418, "search/trending");
        assert_eq!(
            err.to_string(),
            "undocumented response from search/trending: status 418"
        );
        assert!(!err.is_cancellation());
    }

    #[test]
    fn cancellation_is_the_only_swallowed_variant() {
        assert!(SearchError::Cancelled.is_cancellation());
        assert!(!SearchError::store("disk gone").is_cancellation());
    }

    #[test]
    fn api_errors_display_the_pipeline_cause() {
        let inner = ClientError {
            input: None,
            request: None,
            base_url: None,
            response: None,
            cause: "transport failed".into(),
            source: "boom".to_string().into(),
        };
        let err = SearchError::from(inner);
        assert_eq!(err.to_string(), "transport failed");
    }
}
