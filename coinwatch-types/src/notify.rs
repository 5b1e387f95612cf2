//! Payloads handed to a presenter.
//!
//! Everything here derives `PartialEq` so tests assert on notifications
//! structurally instead of inspecting fields one by one.

use serde::{Deserialize, Serialize};

use crate::category::{HighlightCategory, TrendingCategory};
use crate::payloads::{HighlightPayload, SearchPayload, TrendingPayload};
use crate::recent::RecentSearch;

/// Trending section snapshot: the data plus how it is currently shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingSection {
    /// The full trending payload.
    pub data: TrendingPayload,
    /// Whether the coin list shows every row or the capped prefix.
    pub is_expanded: bool,
    /// Currently selected sub-category.
    pub selected: TrendingCategory,
}

/// Highlight section snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightSection {
    /// The full highlight payload.
    pub data: HighlightPayload,
    /// Currently selected sub-category.
    pub selected: HighlightCategory,
}

/// Full browsing snapshot: everything the idle screen shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InformationSnapshot {
    /// Recent-search history, oldest first.
    pub recent_searches: Vec<RecentSearch>,
    /// Trending section.
    pub trending: TrendingSection,
    /// Highlight section.
    pub highlight: HighlightSection,
}

/// A whole-list notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ListUpdate {
    /// Replace the list with the full browsing snapshot.
    Information(InformationSnapshot),
    /// A search is in flight for the current query.
    Loading,
    /// Replace the list with a completed search result.
    Search(SearchPayload),
}

/// A single-section notification; the rest of the list is untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SectionUpdate {
    /// Re-render the trending section.
    Trending(TrendingSection),
    /// Re-render the highlight section.
    Highlight(HighlightSection),
}

/// A navigation request raised by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Destination {
    /// Show an alert with a human-readable message.
    Alert {
        /// Message to display.
        message: String,
    },
}
