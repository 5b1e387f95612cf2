//! Coinwatch orchestrates a debounced, cancellation-aware crypto market
//! search over pluggable data workers.
//!
//! Overview
//! - Drives the whole search screen lifecycle: initial load, typing,
//!   category selection, and teardown.
//! - Fetches through any [`SearchWorker`] implementation; the
//!   `coinwatch-coingecko` crate provides the production CoinGecko one.
//! - Reports every effect through a [`SearchPresenting`] implementation as
//!   whole-list updates, single-section updates, and navigation requests.
//!
//! Key behaviors
//! - Debounce: keystrokes feed a timer-reset stream; only text that survives
//!   the quiet interval (default 1s) reaches the worker, so rapid typing
//!   costs one request.
//! - Cancellation: every search runs as its own unit under a task registry.
//!   Clearing the field cancels the stream and the in-flight units; a
//!   cancelled unit applies no state, no persistence, and no notification.
//! - Consistency: state changes and the notifications describing them happen
//!   in one lock scope, so observers always see effects in mutation order.
//! - History: a successful search persists its first coin hit; the history
//!   de-duplicates by display identity and keeps the newest three entries.
//!
//! Examples
//! Building an orchestrator against the CoinGecko worker:
//! ```rust,ignore
//! use std::sync::Arc;
//! use coinwatch::SearchOrchestrator;
//! use coinwatch_coingecko::{CoinGeckoClient, CoinGeckoWorker};
//! use coinwatch_core::MemoryRecentStore;
//!
//! let client = CoinGeckoClient::builder().build();
//! let worker = Arc::new(CoinGeckoWorker::new(client, Arc::new(MemoryRecentStore::new())));
//! let orchestrator = SearchOrchestrator::builder(worker, presenter).build();
//!
//! orchestrator.prepare().await;
//! orchestrator.search_field_changed("doge");
//! ```
//!
//! Driving the selector strips:
//! ```rust,ignore
//! // Second visible section, second sub-category: trending NFTs.
//! orchestrator.category_tapped(1, 1);
//! orchestrator.tapped_expand_row();
//! ```
//!
//! See `coinwatch/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

mod builder;
/// Timer-reset debouncing for the keystroke stream.
pub mod debounce;
mod orchestrator;
mod state;

pub use builder::{DEFAULT_DEBOUNCE, SearchOrchestratorBuilder};
pub use orchestrator::SearchOrchestrator;
pub use state::{HIGHLIGHT_ROW_CAP, SEARCH_HIT_CAP, SearchState, TRENDING_ROW_CAP};

pub use coinwatch_core::{
    HISTORY_CAP, MemoryRecentStore, RecentSearchesStore, SearchError, SearchPresenting,
    SearchWorker, TaskRegistry, checkpoint, remember,
};
#[cfg(feature = "tracing")]
pub use coinwatch_middleware::LoggingMiddleware;
pub use coinwatch_middleware::{RetryMiddleware, StaticHeadersMiddleware};

// Re-export the HTTP pipeline for custom worker implementations.
pub use coinwatch_http::{
    ApiOutcome, ClientError, HttpRequest, HttpResponse, Method, Middleware, Next, ReqwestTransport,
    RuntimeError, Transport, UniversalClient, UniversalClientBuilder,
};

// Re-export the data types for convenience.
pub use coinwatch_types::{
    Category, Coin, Destination, HighlightCategory, HighlightPayload, HighlightSection,
    InformationSnapshot, ListUpdate, Nft, Price, RecentSearch, Row, RowData, SearchHit,
    SearchPayload, SearchQuery, Section, SectionUpdate, TrendingCategory, TrendingPayload,
    TrendingSection,
};
