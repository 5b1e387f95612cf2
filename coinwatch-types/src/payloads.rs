//! Payloads flowing between the worker and the orchestrator.

use serde::{Deserialize, Serialize};

use crate::records::{Category, Coin, Nft};
use crate::row::RowData;

/// Everything the trending feed returned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendingPayload {
    /// Trending coins, upstream order preserved.
    pub coins: Vec<Coin>,
    /// Trending NFT collections.
    pub nfts: Vec<Nft>,
    /// Trending market categories.
    pub categories: Vec<Category>,
}

impl TrendingPayload {
    /// True when no sub-category has any data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coins.is_empty() && self.nfts.is_empty() && self.categories.is_empty()
    }
}

/// The three highlight lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HighlightPayload {
    /// Coins sorted by 24h change, best first.
    pub top_gainers: Vec<Coin>,
    /// Coins sorted by 24h change, worst first.
    pub top_losers: Vec<Coin>,
    /// Newly listed coins.
    pub new_coins: Vec<Coin>,
}

impl HighlightPayload {
    /// True when no highlight list has any data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.top_gainers.is_empty() && self.top_losers.is_empty() && self.new_coins.is_empty()
    }
}

/// Input to the search operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free-text query as the user typed it.
    pub query: String,
}

impl SearchQuery {
    /// Wrap a query string.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// One search hit, shaped the same for coins, NFTs, and exchanges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Ticker symbol (for exchanges, the exchange name stands in).
    pub symbol: String,
    /// Full display name.
    pub name: Option<String>,
    /// Thumbnail URL.
    pub thumb: Option<String>,
    /// Market-cap rank, for coin hits that have one.
    pub market_cap_rank: Option<u32>,
}

impl SearchHit {
    /// Project into a list row. Thumbnails that are not absolute `https`
    /// URLs are dropped rather than handed to an image loader.
    #[must_use]
    pub fn row(&self) -> RowData {
        RowData {
            rank: self.market_cap_rank,
            image_url: self
                .thumb
                .as_deref()
                .filter(|thumb| thumb.starts_with("https://"))
                .map(ToOwned::to_owned),
            name: self.name.clone().unwrap_or_default(),
            fullname: self.symbol.clone(),
            price: None,
        }
    }
}

/// A complete search result across the three hit categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPayload {
    /// Coin hits.
    pub coins: Vec<SearchHit>,
    /// NFT hits.
    pub nfts: Vec<SearchHit>,
    /// Exchange hits.
    pub exchanges: Vec<SearchHit>,
}

impl SearchPayload {
    /// True when no category has any hit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coins.is_empty() && self.nfts.is_empty() && self.exchanges.is_empty()
    }

    /// Cap every hit category at `limit` items, dropping the tail.
    #[must_use]
    pub fn truncated(mut self, limit: usize) -> Self {
        self.coins.truncate(limit);
        self.nfts.truncate(limit);
        self.exchanges.truncate(limit);
        self
    }
}
