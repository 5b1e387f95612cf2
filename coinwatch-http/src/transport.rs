//! Transport boundary: turning an [`HttpRequest`] into an [`HttpResponse`].

use async_trait::async_trait;
use url::Url;

use crate::error::BoxError;
use crate::types::{HeaderField, HttpRequest, HttpResponse, Method};

/// Sends a fully built request against a base URL.
///
/// Implementations materialize the whole response (status, headers, body)
/// before returning; streaming bodies are out of scope. Network-level
/// failures surface as raw errors for the pipeline to tag.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute `request` resolved against `base_url`.
    async fn send(&self, request: &HttpRequest, base_url: &Url) -> Result<HttpResponse, BoxError>;
}

/// Resolve a request's path and query items against a base URL.
///
/// The request path is appended segment by segment, percent-encoding as
/// needed, so a base path without a trailing slash keeps its last segment
/// (`https://host/api/v3` + `coins/list` is `https://host/api/v3/coins/list`).
/// The base URL's own query parameters are preserved and the request's query
/// items are appended after them.
pub fn resolve_url(base_url: &Url, request: &HttpRequest) -> Result<Url, BoxError> {
    let mut url = base_url.clone();
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|()| BoxError::from("base URL cannot be a base"))?;
        segments.pop_if_empty();
        for segment in request.path.split('/').filter(|s| !s.is_empty()) {
            segments.push(segment);
        }
    }
    if !request.queries.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for query in &request.queries {
            pairs.append_pair(&query.name, &query.value);
        }
    }
    Ok(url)
}

/// Production [`Transport`] backed by [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Transport with a default `reqwest` client.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Transport around a preconfigured `reqwest` client.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &HttpRequest, base_url: &Url) -> Result<HttpResponse, BoxError> {
        let url = resolve_url(base_url, request)?;
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Put => reqwest::Method::PUT,
        };
        let mut builder = self.client.request(method, url);
        for header in &request.header_fields {
            builder = builder.header(header.name.as_str(), header.value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let header_fields = response
            .headers()
            .iter()
            .map(|(name, value)| {
                HeaderField::new(name.as_str(), String::from_utf8_lossy(value.as_bytes()))
            })
            .collect();
        let body = response.bytes().await?;
        Ok(HttpResponse {
            status,
            header_fields,
            body: (!body.is_empty()).then(|| body.to_vec()),
        })
    }
}
