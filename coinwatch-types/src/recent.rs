//! Recent-search history items.

use serde::{Deserialize, Serialize};

use crate::payloads::SearchHit;
use crate::row::RowData;

/// One saved recent search.
///
/// History keeps at most 3 entries; inserts deduplicate by [`identity`]
/// (the display name when present, otherwise the symbol) and evict the
/// insertion-order oldest entry once the cap is exceeded.
///
/// [`identity`]: RecentSearch::identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentSearch {
    /// Storage id assigned by the backing store, absent before saving.
    pub id: Option<i64>,
    /// Ticker symbol of the searched item.
    pub symbol: String,
    /// Full display name.
    pub name: Option<String>,
    /// Thumbnail URL.
    pub thumb: Option<String>,
    /// Market-cap rank at the time of the search.
    pub market_cap_rank: Option<u32>,
}

impl RecentSearch {
    /// De-duplication key: the display name when present, else the symbol.
    #[must_use]
    pub fn identity(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.symbol)
    }

    /// Project into a history row, shaped like a search hit row.
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

impl From<SearchHit> for RecentSearch {
    fn from(hit: SearchHit) -> Self {
        Self {
            id: None,
            symbol: hit.symbol,
            name: hit.name,
            thumb: hit.thumb,
            market_cap_rank: hit.market_cap_rank,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_prefers_name_over_symbol() {
        let mut item = RecentSearch {
            id: None,
            symbol: "btc".into(),
            name: Some("Bitcoin".into()),
            thumb: None,
            market_cap_rank: None,
        };
        assert_eq!(item.identity(), "Bitcoin");
        item.name = None;
        assert_eq!(item.identity(), "btc");
    }
}
