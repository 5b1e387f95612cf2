//! Section identities for the visible list.

use serde::{Deserialize, Serialize};

use crate::category::{HighlightCategory, TrendingCategory};

/// Identity of one visible section.
///
/// The section list is always derived from current state, never stored:
/// while browsing it is history / trending / highlight (each present only
/// when it has data, the latter two carrying their selected sub-category);
/// while a search result is active it is the non-empty hit categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    /// Recent-search history.
    History,
    /// Trending feed with its selected sub-category.
    Trending(TrendingCategory),
    /// Highlight lists with their selected sub-category.
    Highlight(HighlightCategory),
    /// Coin hits of the active search result.
    Coins,
    /// NFT hits of the active search result.
    Nfts,
    /// Exchange hits of the active search result.
    Exchanges,
}
