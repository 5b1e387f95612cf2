//! Domain records as the worker hands them to the orchestrator.

use serde::{Deserialize, Serialize};

use crate::row::{Price, RowData};

/// A coin, from either the trending feed, a markets page, or the coins list.
///
/// Only `id`, `name`, and `symbol` are guaranteed; the optional fields depend
/// on which feed produced the record (the coins list carries nothing else).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    /// Upstream identifier (slug).
    pub id: String,
    /// Upstream numeric id, when the feed exposes one.
    pub coin_id: Option<u64>,
    /// Full display name.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Market-cap rank.
    pub market_cap_rank: Option<u32>,
    /// Thumbnail URL.
    pub thumb: Option<String>,
    /// Current price in the quote currency.
    pub current_price: Option<f64>,
    /// Percent price change over the last 24 hours.
    pub price_change_percentage_24h: Option<f64>,
}

impl Coin {
    /// Project into a list row. The price fragment needs a current price;
    /// a missing 24h change renders as zero.
    #[must_use]
    pub fn row(&self) -> RowData {
        RowData {
            rank: self.market_cap_rank,
            image_url: self.thumb.clone(),
            name: self.symbol.clone(),
            fullname: self.name.clone(),
            price: self.current_price.map(|current| Price {
                current,
                change_24h: self.price_change_percentage_24h.unwrap_or(0.0),
            }),
        }
    }
}

/// An NFT collection from the trending feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nft {
    /// Upstream identifier.
    pub id: String,
    /// Full display name.
    pub name: String,
    /// Collection symbol.
    pub symbol: String,
    /// Thumbnail URL.
    pub thumb: String,
    /// Floor price in the collection's native currency.
    pub floor_price_in_native_currency: f64,
    /// Percent floor-price change over the last 24 hours.
    pub floor_price_24h_percentage_change: f64,
}

impl Nft {
    /// Project into a list row.
    #[must_use]
    pub fn row(&self) -> RowData {
        RowData {
            rank: None,
            image_url: Some(self.thumb.clone()),
            name: self.symbol.clone(),
            fullname: self.name.clone(),
            price: Some(Price {
                current: self.floor_price_in_native_currency,
                change_24h: self.floor_price_24h_percentage_change,
            }),
        }
    }
}

/// A market category from the trending feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Upstream numeric id.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Percent market-cap change over the last hour.
    pub market_cap_1h_change: f64,
}

impl Category {
    /// Project into a list row. Categories have no short name; the change
    /// percent rides in the price fragment with a zero current value.
    #[must_use]
    pub fn row(&self) -> RowData {
        RowData {
            rank: None,
            image_url: None,
            name: String::new(),
            fullname: self.name.clone(),
            price: Some(Price {
                current: 0.0,
                change_24h: self.market_cap_1h_change,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_coin() -> Coin {
        Coin {
            id: "bitcoin".into(),
            coin_id: None,
            name: "Bitcoin".into(),
            symbol: "btc".into(),
            market_cap_rank: Some(1),
            thumb: None,
            current_price: None,
            price_change_percentage_24h: None,
        }
    }

    #[test]
    fn coin_row_has_no_price_without_current_price() {
        let mut coin = bare_coin();
        coin.price_change_percentage_24h = Some(4.2);
        assert_eq!(coin.row().price, None);
    }

    #[test]
    fn coin_row_defaults_missing_change_to_zero() {
        let mut coin = bare_coin();
        coin.current_price = Some(61_000.0);
        let price = coin.row().price.unwrap();
        assert_eq!(price.current, 61_000.0);
        assert_eq!(price.change_24h, 0.0);
    }

    #[test]
    fn category_row_keeps_change_in_price_fragment() {
        let category = Category {
            id: 12,
            name: "DeFi".into(),
            market_cap_1h_change: -1.5,
        };
        let row = category.row();
        assert_eq!(row.name, "");
        assert_eq!(row.fullname, "DeFi");
        assert_eq!(row.price.unwrap().change_24h, -1.5);
    }
}
