//! Wire schemas for the four CoinGecko operations.
//!
//! Field names match the API's snake_case JSON one to one, so no rename
//! attributes are needed. Optional wire fields default to absent rather
//! than failing the whole decode.

use coinwatch_types::{Category, Coin, Nft, SearchHit, SearchPayload, TrendingPayload};
use serde::Deserialize;

/// Response body of `GET search/trending`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrendingSchema {
    /// Trending coins, each nested under an `item` wrapper key.
    #[serde(default)]
    pub coins: Vec<TrendingCoinItem>,
    /// Trending NFT collections.
    #[serde(default)]
    pub nfts: Vec<NftSchema>,
    /// Trending market categories.
    #[serde(default)]
    pub categories: Vec<CategorySchema>,
}

/// The `item` wrapper the API puts around each trending coin.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrendingCoinItem {
    /// The wrapped coin.
    pub item: TrendingCoinSchema,
}

/// One trending coin.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrendingCoinSchema {
    /// API id, e.g. `bitcoin`.
    pub id: String,
    /// CoinGecko-internal numeric id.
    #[serde(default)]
    pub coin_id: Option<u64>,
    /// Display name.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Market-cap rank.
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    /// Thumbnail URL.
    #[serde(default)]
    pub thumb: Option<String>,
}

/// One trending NFT collection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NftSchema {
    /// API id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Thumbnail URL.
    pub thumb: String,
    /// Floor price in the collection's native currency.
    pub floor_price_in_native_currency: f64,
    /// 24h floor-price change, percent.
    pub floor_price_24h_percentage_change: f64,
}

/// One trending market category.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategorySchema {
    /// Numeric category id.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// 1h market-cap change, percent.
    pub market_cap_1h_change: f64,
}

/// One row of `GET coins/markets`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MarketCoinSchema {
    /// API id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Full-size image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Market-cap rank.
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    /// Current price in the requested vs-currency.
    #[serde(default)]
    pub current_price: Option<f64>,
    /// 24h price change, percent.
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
}

/// One row of `GET coins/list`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListedCoinSchema {
    /// API id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
}

/// Response body of `GET search`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchSchema {
    /// Coin hits.
    #[serde(default)]
    pub coins: Vec<SearchCoinSchema>,
    /// NFT hits.
    #[serde(default)]
    pub nfts: Vec<SearchNftSchema>,
    /// Exchange hits.
    #[serde(default)]
    pub exchanges: Vec<SearchExchangeSchema>,
}

/// One coin search hit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchCoinSchema {
    /// API id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Market-cap rank.
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    /// Thumbnail URL.
    #[serde(default)]
    pub thumb: Option<String>,
}

/// One NFT search hit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchNftSchema {
    /// API id.
    #[serde(default)]
    pub id: Option<String>,
    /// Display name.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Thumbnail URL.
    #[serde(default)]
    pub thumb: Option<String>,
}

/// One exchange search hit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchExchangeSchema {
    /// API id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Thumbnail URL.
    #[serde(default)]
    pub thumb: Option<String>,
}

impl TrendingSchema {
    /// Flatten the wire nesting into the domain payload.
    #[must_use]
    pub fn into_domain(self) -> TrendingPayload {
        TrendingPayload {
            coins: self
                .coins
                .into_iter()
                .map(|wrapped| wrapped.item.into_domain())
                .collect(),
            nfts: self.nfts.into_iter().map(NftSchema::into_domain).collect(),
            categories: self
                .categories
                .into_iter()
                .map(CategorySchema::into_domain)
                .collect(),
        }
    }
}

impl TrendingCoinSchema {
    fn into_domain(self) -> Coin {
        Coin {
            id: self.id,
            coin_id: self.coin_id,
            name: self.name,
            symbol: self.symbol,
            market_cap_rank: self.market_cap_rank,
            thumb: self.thumb,
            current_price: None,
            price_change_percentage_24h: None,
        }
    }
}

impl NftSchema {
    fn into_domain(self) -> Nft {
        Nft {
            id: self.id,
            name: self.name,
            symbol: self.symbol,
            thumb: self.thumb,
            floor_price_in_native_currency: self.floor_price_in_native_currency,
            floor_price_24h_percentage_change: self.floor_price_24h_percentage_change,
        }
    }
}

impl CategorySchema {
    fn into_domain(self) -> Category {
        Category {
            id: self.id,
            name: self.name,
            market_cap_1h_change: self.market_cap_1h_change,
        }
    }
}

impl MarketCoinSchema {
    /// Market rows carry live pricing; the market image stands in for the
    /// thumbnail.
    #[must_use]
    pub fn into_domain(self) -> Coin {
        Coin {
            id: self.id,
            coin_id: None,
            name: self.name,
            symbol: self.symbol,
            market_cap_rank: self.market_cap_rank,
            thumb: self.image,
            current_price: self.current_price,
            price_change_percentage_24h: self.price_change_percentage_24h,
        }
    }
}

impl ListedCoinSchema {
    /// Listed rows carry identity only.
    #[must_use]
    pub fn into_domain(self) -> Coin {
        Coin {
            id: self.id,
            coin_id: None,
            name: self.name,
            symbol: self.symbol,
            market_cap_rank: None,
            thumb: None,
            current_price: None,
            price_change_percentage_24h: None,
        }
    }
}

impl SearchSchema {
    /// Map the three hit categories into one uniform payload. Exchanges
    /// have no ticker symbol, so their display name stands in.
    #[must_use]
    pub fn into_domain(self) -> SearchPayload {
        SearchPayload {
            coins: self
                .coins
                .into_iter()
                .map(|coin| SearchHit {
                    symbol: coin.symbol,
                    name: Some(coin.name),
                    thumb: coin.thumb,
                    market_cap_rank: coin.market_cap_rank,
                })
                .collect(),
            nfts: self
                .nfts
                .into_iter()
                .map(|nft| SearchHit {
                    symbol: nft.symbol,
                    name: Some(nft.name),
                    thumb: nft.thumb,
                    market_cap_rank: None,
                })
                .collect(),
            exchanges: self
                .exchanges
                .into_iter()
                .map(|exchange| SearchHit {
                    symbol: exchange.name,
                    name: None,
                    thumb: exchange.thumb,
                    market_cap_rank: None,
                })
                .collect(),
        }
    }
}
