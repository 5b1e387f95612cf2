//! Thin typed surface over the CoinGecko REST API.
//!
//! Every operation is one [`UniversalClient::send`] call: a serializer that
//! builds the request and a deserializer that switches on the status code.
//! `200` decodes into the operation's schema; anything else is surfaced as
//! [`ApiOutcome::Undocumented`] with the raw payload attached.

use std::sync::Arc;

use coinwatch_http::{
    ApiOutcome, BoxError, ClientError, HttpRequest, HttpResponse, Middleware, Transport,
    UndocumentedPayload, UniversalClient,
};
use serde::de::DeserializeOwned;

use crate::schema::{ListedCoinSchema, MarketCoinSchema, SearchSchema, TrendingSchema};

/// Public CoinGecko v3 endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3/";

/// Header carrying the demo-plan API key.
const API_KEY_HEADER: &str = "x-cg-demo-api-key";

pub(crate) const TRENDING_PATH: &str = "search/trending";
pub(crate) const MARKETS_PATH: &str = "coins/markets";
pub(crate) const COINS_LIST_PATH: &str = "coins/list";
pub(crate) const SEARCH_PATH: &str = "search";

/// CoinGecko API client.
///
/// Cloning is cheap; the underlying pipeline is shared.
#[derive(Clone)]
pub struct CoinGeckoClient {
    client: UniversalClient,
    api_key: Option<String>,
}

impl CoinGeckoClient {
    /// Start building a client against [`DEFAULT_BASE_URL`].
    #[must_use]
    pub fn builder() -> CoinGeckoClientBuilder {
        CoinGeckoClientBuilder {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key: None,
            transport: None,
            middlewares: Vec::new(),
        }
    }

    /// `GET search/trending`.
    pub async fn trending(&self) -> Result<ApiOutcome<TrendingSchema>, ClientError> {
        self.client
            .send(TRENDING_PATH, |path| Ok(self.request(path)), decode_json)
            .await
    }

    /// `GET coins/markets`, one USD page of ten, largest market cap first.
    pub async fn markets(&self) -> Result<ApiOutcome<Vec<MarketCoinSchema>>, ClientError> {
        self.client
            .send(
                MARKETS_PATH,
                |path| {
                    Ok(self
                        .request(path)
                        .with_query("vs_currency", "usd")
                        .with_query("order", "market_cap_desc")
                        .with_query("per_page", "10")
                        .with_query("page", "1"))
                },
                decode_json,
            )
            .await
    }

    /// `GET coins/list`.
    pub async fn coins_list(&self) -> Result<ApiOutcome<Vec<ListedCoinSchema>>, ClientError> {
        self.client
            .send(COINS_LIST_PATH, |path| Ok(self.request(path)), decode_json)
            .await
    }

    /// `GET search?query=<text>`.
    pub async fn search(&self, query: &str) -> Result<ApiOutcome<SearchSchema>, ClientError> {
        self.client
            .send(
                query,
                |query| Ok(self.request(SEARCH_PATH).with_query("query", *query)),
                decode_json,
            )
            .await
    }

    /// A `GET` request for `path`, carrying the API key when one is set.
    fn request(&self, path: &str) -> HttpRequest {
        let request = HttpRequest::get(path);
        match &self.api_key {
            Some(key) => request.with_header(API_KEY_HEADER, key),
            None => request,
        }
    }
}

/// The shared status switch: `200` decodes, everything else is captured raw.
fn decode_json<T>(response: &HttpResponse) -> Result<ApiOutcome<T>, BoxError>
where
    T: DeserializeOwned,
{
    match response.status {
        200 => serde_json::from_slice(response.body_slice())
            .map(ApiOutcome::Ok)
            .map_err(BoxError::from),
        status => Ok(ApiOutcome::Undocumented {
            status,
            payload: UndocumentedPayload::from_response(response),
        }),
    }
}

/// Builder for [`CoinGeckoClient`].
pub struct CoinGeckoClientBuilder {
    base_url: String,
    api_key: Option<String>,
    transport: Option<Arc<dyn Transport>>,
    middlewares: Vec<Arc<dyn Middleware>>,
}

impl CoinGeckoClientBuilder {
    /// Point the client at a different endpoint.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Attach a demo-plan API key, sent as `x-cg-demo-api-key` on every
    /// request.
    #[must_use]
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Replace the transport. Defaults to the pipeline's reqwest transport.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Append a middleware; the first appended sees requests first.
    #[must_use]
    pub fn middleware(mut self, middleware: Arc<dyn Middleware>) -> Self {
        self.middlewares.push(middleware);
        self
    }

    /// Finish building the client.
    #[must_use]
    pub fn build(self) -> CoinGeckoClient {
        let mut builder = UniversalClient::builder().base_url(self.base_url);
        if let Some(transport) = self.transport {
            builder = builder.transport(transport);
        }
        for middleware in self.middlewares {
            builder = builder.middleware(middleware);
        }
        CoinGeckoClient {
            client: builder.build(),
            api_key: self.api_key,
        }
    }
}
