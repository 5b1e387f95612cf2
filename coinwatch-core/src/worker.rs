//! The async seam between the orchestrator and whatever fetches market data.

use async_trait::async_trait;
use coinwatch_types::{HighlightPayload, RecentSearch, SearchPayload, SearchQuery, TrendingPayload};
use tokio_util::sync::CancellationToken;

use crate::error::SearchError;

/// Everything the search orchestrator needs from the outside world.
///
/// Network-backed methods take a [`CancellationToken`] and are expected to
/// observe it cooperatively: return [`SearchError::Cancelled`] promptly once
/// the token fires instead of finishing work nobody will apply. History
/// methods talk to local storage and carry no token.
///
/// Implementations live behind `Arc<dyn SearchWorker>` so one worker serves
/// every flow of an orchestrator instance.
#[async_trait]
pub trait SearchWorker: Send + Sync {
    /// Load the persisted recent-search history, oldest first.
    async fn load_search_history(&self) -> Result<Vec<RecentSearch>, SearchError>;

    /// Persist one recent search.
    ///
    /// Implementations apply the same dedup-and-cap rule the orchestrator
    /// mirrors in memory (see [`crate::store`]).
    async fn save_search_history(&self, item: RecentSearch) -> Result<(), SearchError>;

    /// Fetch the trending feed (coins, NFT collections, categories).
    async fn trending(&self, cancel: &CancellationToken) -> Result<TrendingPayload, SearchError>;

    /// Fetch the three highlight lists (top gainers, top losers, new coins).
    async fn highlight(&self, cancel: &CancellationToken)
    -> Result<HighlightPayload, SearchError>;

    /// Run a free-text search across coins, NFTs, and exchanges.
    async fn search(
        &self,
        query: SearchQuery,
        cancel: &CancellationToken,
    ) -> Result<SearchPayload, SearchError>;
}
