//! Sub-category selectors for the trending and highlight sections.

use serde::{Deserialize, Serialize};

/// Sub-categories of the trending section, in header-tab order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrendingCategory {
    /// Trending coins.
    #[default]
    Coin,
    /// Trending NFT collections.
    Nft,
    /// Trending market categories.
    Category,
}

impl TrendingCategory {
    /// Selector for a zero-based header-tab index, if one exists.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Coin),
            1 => Some(Self::Nft),
            2 => Some(Self::Category),
            _ => None,
        }
    }

    /// Zero-based header-tab index of this selector.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Coin => 0,
            Self::Nft => 1,
            Self::Category => 2,
        }
    }
}

/// Sub-categories of the highlight section, in header-tab order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HighlightCategory {
    /// Largest 24h gainers.
    #[default]
    TopGainers,
    /// Largest 24h losers.
    TopLosers,
    /// Newly listed coins.
    NewListings,
}

impl HighlightCategory {
    /// Selector for a zero-based header-tab index, if one exists.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::TopGainers),
            1 => Some(Self::TopLosers),
            2 => Some(Self::NewListings),
            _ => None,
        }
    }

    /// Zero-based header-tab index of this selector.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::TopGainers => 0,
            Self::TopLosers => 1,
            Self::NewListings => 2,
        }
    }
}
