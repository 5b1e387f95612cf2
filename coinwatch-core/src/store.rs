//! Recent-search persistence: the contract plus the reference store.

use std::sync::Mutex;

use async_trait::async_trait;
use coinwatch_types::RecentSearch;

use crate::error::SearchError;

/// Maximum number of recent searches kept anywhere.
pub const HISTORY_CAP: usize = 3;

/// Apply the dedup-and-cap rule in place.
///
/// An item whose identity already exists is a no-op, not an error. Otherwise
/// the item is appended (newest last) and, once the collection exceeds
/// [`HISTORY_CAP`], the single oldest entry is evicted. Returns whether the
/// item was inserted.
///
/// The orchestrator applies this to its in-memory history and every store
/// implementation mirrors it, so both views of the history agree.
pub fn remember(history: &mut Vec<RecentSearch>, item: RecentSearch) -> bool {
    if history
        .iter()
        .any(|existing| existing.identity() == item.identity())
    {
        return false;
    }
    history.push(item);
    if history.len() > HISTORY_CAP {
        history.remove(0);
    }
    true
}

/// Load/save contract for recent-search history.
///
/// `save` is expected to apply the same rule as [`remember`]: skip
/// same-identity duplicates silently and evict the oldest entry past the
/// cap.
#[async_trait]
pub trait RecentSearchesStore: Send + Sync {
    /// All stored items, oldest first.
    async fn load(&self) -> Result<Vec<RecentSearch>, SearchError>;

    /// Insert one item under the dedup-and-cap rule.
    async fn save(&self, item: RecentSearch) -> Result<(), SearchError>;
}

/// Mutex-guarded in-memory [`RecentSearchesStore`].
///
/// Mirrors the original backing table's shape: monotonically increasing
/// auto-assigned ids, so the insertion-order oldest entry is also the one
/// with the lowest id.
#[derive(Debug, Default)]
pub struct MemoryRecentStore {
    inner: Mutex<StoreInner>,
}

#[derive(Debug, Default)]
struct StoreInner {
    rows: Vec<RecentSearch>,
    next_id: i64,
}

impl MemoryRecentStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecentSearchesStore for MemoryRecentStore {
    async fn load(&self) -> Result<Vec<RecentSearch>, SearchError> {
        let inner = self.inner.lock().expect("store lock poisoned");
        Ok(inner.rows.clone())
    }

    async fn save(&self, mut item: RecentSearch) -> Result<(), SearchError> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        item.id = Some(inner.next_id);
        if remember(&mut inner.rows, item) {
            inner.next_id += 1;
        }
        Ok(())
    }
}
