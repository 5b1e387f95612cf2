//! Screen state and the projections derived from it.

use coinwatch_types::{
    Destination, HighlightCategory, HighlightPayload, HighlightSection, InformationSnapshot,
    RecentSearch, Row, RowData, SearchHit, SearchPayload, Section, TrendingCategory,
    TrendingPayload, TrendingSection,
};

/// Rows shown for the collapsed trending coin list, before the expand row.
pub const TRENDING_ROW_CAP: usize = 7;
/// Rows shown per highlight list.
pub const HIGHLIGHT_ROW_CAP: usize = 7;
/// Hits kept per search sub-list when a result is stored.
pub const SEARCH_HIT_CAP: usize = 5;

/// Everything the search screen knows, in one place.
///
/// The orchestrator guards one value of this type with a mutex and treats
/// each lock scope as a single logical mutation: state changes and the
/// notifications describing them happen inside the same scope, so observers
/// always see effects in mutation order.
///
/// The visible section list is never stored. It is re-derived on demand by
/// [`sections`](Self::sections): while browsing it is history, trending, and
/// highlight (each present only when it has data); while a search result is
/// active it is the non-empty hit categories of that result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    /// Current text in the search field.
    pub query: String,
    /// Trending payload from the last successful fetch.
    pub trending: TrendingPayload,
    /// Selected trending sub-category.
    pub selected_trending: TrendingCategory,
    /// Whether the trending coin list shows every row.
    pub is_trending_expanded: bool,
    /// Highlight payload from the last successful fetch.
    pub highlight: HighlightPayload,
    /// Selected highlight sub-category.
    pub selected_highlight: HighlightCategory,
    /// Active search result. While present it replaces the browsing sections.
    pub search_results: Option<SearchPayload>,
    /// Recent-search history, oldest first.
    pub recent_searches: Vec<RecentSearch>,
    /// Last destination handed to the presenter.
    pub destination: Option<Destination>,
}

impl SearchState {
    /// The visible sections, in display order.
    #[must_use]
    pub fn sections(&self) -> Vec<Section> {
        let mut sections = Vec::new();
        if let Some(results) = &self.search_results {
            if !results.coins.is_empty() {
                sections.push(Section::Coins);
            }
            if !results.nfts.is_empty() {
                sections.push(Section::Nfts);
            }
            if !results.exchanges.is_empty() {
                sections.push(Section::Exchanges);
            }
            return sections;
        }
        if !self.recent_searches.is_empty() {
            sections.push(Section::History);
        }
        if !self.trending.is_empty() {
            sections.push(Section::Trending(self.selected_trending));
        }
        if !self.highlight.is_empty() {
            sections.push(Section::Highlight(self.selected_highlight));
        }
        sections
    }

    /// The rows of one section under the display caps.
    ///
    /// The collapsed trending coin list shows at most [`TRENDING_ROW_CAP`]
    /// rows followed by the synthetic [`Row::LoadMore`] trigger; expanding
    /// removes both the cap and the trigger. Trending NFT and category lists
    /// are uncapped. Highlight lists cap at [`HIGHLIGHT_ROW_CAP`]. Search
    /// sub-lists were already truncated when the result was stored.
    #[must_use]
    pub fn rows(&self, section: Section) -> Vec<Row> {
        match section {
            Section::History => {
                data_rows(self.recent_searches.iter().map(RecentSearch::row))
            }
            Section::Trending(TrendingCategory::Coin) => {
                let rows = self.trending.coins.iter().map(|coin| Row::Data(coin.row()));
                if self.is_trending_expanded {
                    rows.collect()
                } else {
                    let mut rows: Vec<Row> = rows.take(TRENDING_ROW_CAP).collect();
                    rows.push(Row::LoadMore);
                    rows
                }
            }
            Section::Trending(TrendingCategory::Nft) => {
                data_rows(self.trending.nfts.iter().map(|nft| nft.row()))
            }
            Section::Trending(TrendingCategory::Category) => {
                data_rows(self.trending.categories.iter().map(|category| category.row()))
            }
            Section::Highlight(category) => {
                let coins = match category {
                    HighlightCategory::TopGainers => &self.highlight.top_gainers,
                    HighlightCategory::TopLosers => &self.highlight.top_losers,
                    HighlightCategory::NewListings => &self.highlight.new_coins,
                };
                data_rows(coins.iter().take(HIGHLIGHT_ROW_CAP).map(|coin| coin.row()))
            }
            Section::Coins => hit_rows(self.search_results.as_ref().map(|r| &r.coins)),
            Section::Nfts => hit_rows(self.search_results.as_ref().map(|r| &r.nfts)),
            Section::Exchanges => hit_rows(self.search_results.as_ref().map(|r| &r.exchanges)),
        }
    }

    /// Snapshot of the trending section as currently shown.
    #[must_use]
    pub fn trending_section(&self) -> TrendingSection {
        TrendingSection {
            data: self.trending.clone(),
            is_expanded: self.is_trending_expanded,
            selected: self.selected_trending,
        }
    }

    /// Snapshot of the highlight section as currently shown.
    #[must_use]
    pub fn highlight_section(&self) -> HighlightSection {
        HighlightSection {
            data: self.highlight.clone(),
            selected: self.selected_highlight,
        }
    }

    /// The full browsing snapshot handed out with
    /// [`ListUpdate::Information`](coinwatch_types::ListUpdate::Information).
    #[must_use]
    pub fn information(&self) -> InformationSnapshot {
        InformationSnapshot {
            recent_searches: self.recent_searches.clone(),
            trending: self.trending_section(),
            highlight: self.highlight_section(),
        }
    }
}

fn data_rows(rows: impl Iterator<Item = RowData>) -> Vec<Row> {
    rows.map(Row::Data).collect()
}

fn hit_rows(hits: Option<&Vec<SearchHit>>) -> Vec<Row> {
    match hits {
        Some(hits) => data_rows(hits.iter().map(SearchHit::row)),
        None => Vec::new(),
    }
}
