//! coinwatch-coingecko
//!
//! The CoinGecko REST surface as typed operations over the
//! `coinwatch-http` pipeline, plus the production [`SearchWorker`]
//! implementation built on them.
//!
//! - `schema`: wire schemas for the four operations, decoded from the
//!   API's snake_case JSON, with conversions into `coinwatch-types`
//!   domain payloads.
//! - `client`: [`CoinGeckoClient`]: trending, markets, coins list, and
//!   search, each returning a closed [`ApiOutcome`].
//! - `worker`: [`CoinGeckoWorker`]: shapes API responses into the
//!   payloads the orchestrator consumes and escalates undocumented
//!   responses to typed errors.
//!
//! [`SearchWorker`]: coinwatch_core::SearchWorker
//! [`ApiOutcome`]: coinwatch_http::ApiOutcome
#![warn(missing_docs)]

/// The typed API client and its builder.
pub mod client;
/// Wire schemas and domain conversions.
pub mod schema;
/// The production search worker.
pub mod worker;

pub use client::{CoinGeckoClient, CoinGeckoClientBuilder, DEFAULT_BASE_URL};
pub use schema::{
    CategorySchema, ListedCoinSchema, MarketCoinSchema, NftSchema, SearchSchema, TrendingSchema,
};
pub use worker::CoinGeckoWorker;
