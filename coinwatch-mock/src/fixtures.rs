//! Sample domain values shared across the workspace's test suites.
//!
//! The values are deliberately small and recognizable; tests assert against
//! them by name rather than re-declaring literals.

use coinwatch_types::{
    Category, Coin, HighlightPayload, Nft, RecentSearch, SearchHit, SearchPayload, TrendingPayload,
};

/// The canonical trending coin.
#[must_use]
pub fn trending_coin() -> Coin {
    Coin {
        id: "ABCD".into(),
        coin_id: Some(1),
        name: "bitcoin".into(),
        symbol: "bit".into(),
        market_cap_rank: Some(1),
        thumb: Some("https://img.example.com/bit.png".into()),
        current_price: None,
        price_change_percentage_24h: None,
    }
}

/// A coin with a chosen id and 24h change; everything else minimal.
#[must_use]
pub fn coin(id: &str, change: Option<f64>) -> Coin {
    Coin {
        id: id.into(),
        coin_id: None,
        name: id.to_uppercase(),
        symbol: id.into(),
        market_cap_rank: None,
        thumb: None,
        current_price: None,
        price_change_percentage_24h: change,
    }
}

/// `count` distinct coins `coin-0..`, ranked in order. Handy for row-cap
/// tests that need more data than a section shows.
#[must_use]
pub fn coins(count: usize) -> Vec<Coin> {
    (0..count)
        .map(|index| {
            let mut item = coin(&format!("coin-{index}"), None);
            item.market_cap_rank = u32::try_from(index + 1).ok();
            item
        })
        .collect()
}

/// A single NFT collection.
#[must_use]
pub fn nft(id: &str) -> Nft {
    Nft {
        id: id.into(),
        name: id.to_uppercase(),
        symbol: id.into(),
        thumb: "https://img.example.com/nft.png".into(),
        floor_price_in_native_currency: 12.5,
        floor_price_24h_percentage_change: -2.4,
    }
}

/// A single market category.
#[must_use]
pub fn category(id: u64, name: &str) -> Category {
    Category {
        id,
        name: name.into(),
        market_cap_1h_change: 0.8,
    }
}

/// One coin, one NFT collection, one category.
#[must_use]
pub fn trending_payload() -> TrendingPayload {
    TrendingPayload {
        coins: vec![trending_coin()],
        nfts: vec![nft("punks")],
        categories: vec![category(7, "DeFi")],
    }
}

/// Disjoint gainer, loser, and new-coin lists.
#[must_use]
pub fn highlight_payload() -> HighlightPayload {
    HighlightPayload {
        top_gainers: vec![coin("solana", Some(9.4))],
        top_losers: vec![coin("ripple", Some(-6.1))],
        new_coins: vec![coin("farcoin", None)],
    }
}

/// The canonical persisted history item. Its thumbnail is deliberately not
/// an absolute URL, matching what older stored rows look like.
#[must_use]
pub fn recent_search() -> RecentSearch {
    RecentSearch {
        id: Some(1),
        symbol: "bitcoin".into(),
        name: None,
        thumb: Some("www.bitcoin.com".into()),
        market_cap_rank: None,
    }
}

/// One search hit with a chosen symbol.
#[must_use]
pub fn search_hit(symbol: &str) -> SearchHit {
    SearchHit {
        symbol: symbol.into(),
        name: Some(symbol.to_uppercase()),
        thumb: None,
        market_cap_rank: None,
    }
}

/// A small search result: one coin hit and one exchange hit.
#[must_use]
pub fn search_payload() -> SearchPayload {
    SearchPayload {
        coins: vec![SearchHit {
            symbol: "bit".into(),
            name: Some("bitcoin".into()),
            thumb: Some("https://img.example.com/bit.png".into()),
            market_cap_rank: Some(1),
        }],
        nfts: Vec::new(),
        exchanges: vec![SearchHit {
            symbol: "Binance".into(),
            name: None,
            thumb: None,
            market_cap_rank: None,
        }],
    }
}
