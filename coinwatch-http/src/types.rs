//! Wire model shared by every layer of the pipeline.
//!
//! Requests are immutable once a serializer has built them; responses are
//! immutable once a transport has produced them. Header and query pairs keep
//! their insertion order and allow duplicates, matching what actually goes
//! over the wire.

/// HTTP methods in the modeled vocabulary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`
    #[default]
    Get,
    /// `PUT`
    Put,
}

impl Method {
    /// Wire name of the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
        }
    }
}

/// One `name=value` query pair. Order and duplicates are preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryItem {
    /// Query parameter name.
    pub name: String,
    /// Query parameter value, unencoded.
    pub value: String,
}

impl QueryItem {
    /// Build a query pair.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One `name: value` header field. Order and duplicates are preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HeaderField {
    /// Header name.
    pub name: String,
    /// Header value.
    pub value: String,
}

impl HeaderField {
    /// Build a header field.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A request as handed to the middleware chain and the transport.
///
/// The path is resolved against the client's base URL by the transport; see
/// [`crate::transport::resolve_url`] for the exact rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpRequest {
    /// Path relative to the base URL, without a leading slash.
    pub path: String,
    /// Query items appended after the base URL's own query.
    pub queries: Vec<QueryItem>,
    /// Request method.
    pub method: Method,
    /// Header fields applied as-is, in order.
    pub header_fields: Vec<HeaderField>,
    /// Optional request body bytes.
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// A `GET` request for `path` with no queries, headers, or body.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// A `PUT` request for `path` with no queries, headers, or body.
    pub fn put(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: Method::Put,
            ..Self::default()
        }
    }

    /// Append one query pair.
    #[must_use]
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.queries.push(QueryItem::new(name, value));
        self
    }

    /// Append one header field.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.header_fields.push(HeaderField::new(name, value));
        self
    }

    /// Attach a body.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }
}

/// A fully materialized response as produced by a [`crate::Transport`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response header fields, in wire order.
    pub header_fields: Vec<HeaderField>,
    /// Optional response body bytes.
    pub body: Option<Vec<u8>>,
}

impl HttpResponse {
    /// Response body as a slice, empty when no body was received.
    #[must_use]
    pub fn body_slice(&self) -> &[u8] {
        self.body.as_deref().unwrap_or_default()
    }
}

/// What the server actually sent when a status code has no modeled success
/// case. Lets callers inspect the raw payload instead of losing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndocumentedPayload {
    /// Response header fields.
    pub header_fields: Vec<HeaderField>,
    /// Optional response body bytes.
    pub body: Option<Vec<u8>>,
}

impl UndocumentedPayload {
    /// Capture headers and body from a response.
    #[must_use]
    pub fn from_response(response: &HttpResponse) -> Self {
        Self {
            header_fields: response.header_fields.clone(),
            body: response.body.clone(),
        }
    }
}

/// Closed-variant outcome of one API operation.
///
/// Every operation must handle all status codes it can receive: either a
/// modeled success or the undocumented fallback. Nothing is silently dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOutcome<T> {
    /// The typed success body for a documented status code.
    Ok(T),
    /// The server responded with a status the operation does not model.
    Undocumented {
        /// Status code as received.
        status: u16,
        /// Headers and body as received.
        payload: UndocumentedPayload,
    },
}

impl<T> ApiOutcome<T> {
    /// `true` for the modeled success variant.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }
}
