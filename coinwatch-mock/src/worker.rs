//! A [`SearchWorker`] whose every method is programmed with a closure.

use std::sync::Mutex;

use async_trait::async_trait;
use coinwatch_core::{SearchError, SearchWorker};
use coinwatch_types::{
    HighlightPayload, RecentSearch, SearchPayload, SearchQuery, TrendingPayload,
};
use tokio_util::sync::CancellationToken;

/// How one mocked call should behave.
pub enum MockBehavior<T> {
    /// Complete immediately with this value.
    Return(T),
    /// Fail immediately with this error.
    Fail(SearchError),
    /// Stall until the call is cancelled. Token-carrying methods then report
    /// [`SearchError::Cancelled`]; history methods stall forever.
    Hang,
}

type Rule<T> = Box<dyn Fn() -> MockBehavior<T> + Send + Sync>;
type SaveRule = Box<dyn Fn(&RecentSearch) -> MockBehavior<()> + Send + Sync>;
type SearchRule = Box<dyn Fn(&SearchQuery) -> MockBehavior<SearchPayload> + Send + Sync>;

/// One call that reached the worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerCall {
    /// `load_search_history`.
    LoadHistory,
    /// `save_search_history`, carrying the item's identity.
    SaveHistory(String),
    /// `trending`.
    Trending,
    /// `highlight`.
    Highlight,
    /// `search`, carrying the query text.
    Search(String),
}

/// Programmable [`SearchWorker`] with a call log.
///
/// Data-producing methods (`trending`, `highlight`, `search`) panic when
/// called without a rule, which keeps a test honest about what it expects to
/// reach the worker. The history methods default to an empty history and a
/// successful save, since most flows touch them incidentally; the call log
/// still records every call, so saves stay observable.
#[derive(Default)]
pub struct MockWorker {
    load_history: Option<Rule<Vec<RecentSearch>>>,
    save_history: Option<SaveRule>,
    trending: Option<Rule<TrendingPayload>>,
    highlight: Option<Rule<HighlightPayload>>,
    search: Option<SearchRule>,
    calls: Mutex<Vec<WorkerCall>>,
}

impl MockWorker {
    /// A worker with no rules programmed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Program `load_search_history`.
    #[must_use]
    pub fn on_load_history(
        mut self,
        rule: impl Fn() -> MockBehavior<Vec<RecentSearch>> + Send + Sync + 'static,
    ) -> Self {
        self.load_history = Some(Box::new(rule));
        self
    }

    /// Program `save_search_history`. The rule sees the item being saved.
    #[must_use]
    pub fn on_save_history(
        mut self,
        rule: impl Fn(&RecentSearch) -> MockBehavior<()> + Send + Sync + 'static,
    ) -> Self {
        self.save_history = Some(Box::new(rule));
        self
    }

    /// Program `trending`.
    #[must_use]
    pub fn on_trending(
        mut self,
        rule: impl Fn() -> MockBehavior<TrendingPayload> + Send + Sync + 'static,
    ) -> Self {
        self.trending = Some(Box::new(rule));
        self
    }

    /// Program `highlight`.
    #[must_use]
    pub fn on_highlight(
        mut self,
        rule: impl Fn() -> MockBehavior<HighlightPayload> + Send + Sync + 'static,
    ) -> Self {
        self.highlight = Some(Box::new(rule));
        self
    }

    /// Program `search`. The rule sees the query, so behavior can differ per
    /// text.
    #[must_use]
    pub fn on_search(
        mut self,
        rule: impl Fn(&SearchQuery) -> MockBehavior<SearchPayload> + Send + Sync + 'static,
    ) -> Self {
        self.search = Some(Box::new(rule));
        self
    }

    /// Every call that reached the worker, in order.
    pub fn calls(&self) -> Vec<WorkerCall> {
        self.calls.lock().expect("mock worker lock poisoned").clone()
    }

    /// Query text of every `search` call, in order.
    #[must_use]
    pub fn search_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                WorkerCall::Search(query) => Some(query),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: WorkerCall) {
        self.calls.lock().expect("mock worker lock poisoned").push(call);
    }
}

/// Resolve a behavior for a token-carrying method.
async fn resolve<T>(
    behavior: MockBehavior<T>,
    cancel: &CancellationToken,
) -> Result<T, SearchError> {
    match behavior {
        MockBehavior::Return(value) => Ok(value),
        MockBehavior::Fail(error) => Err(error),
        MockBehavior::Hang => {
            cancel.cancelled().await;
            Err(SearchError::Cancelled)
        }
    }
}

/// Resolve a behavior for a method with no token; `Hang` stalls forever.
async fn resolve_detached<T>(behavior: MockBehavior<T>) -> Result<T, SearchError> {
    match behavior {
        MockBehavior::Return(value) => Ok(value),
        MockBehavior::Fail(error) => Err(error),
        MockBehavior::Hang => {
            std::future::pending::<()>().await;
            unreachable!()
        }
    }
}

#[async_trait]
impl SearchWorker for MockWorker {
    async fn load_search_history(&self) -> Result<Vec<RecentSearch>, SearchError> {
        self.record(WorkerCall::LoadHistory);
        match &self.load_history {
            Some(rule) => resolve_detached(rule()).await,
            None => Ok(Vec::new()),
        }
    }

    async fn save_search_history(&self, item: RecentSearch) -> Result<(), SearchError> {
        self.record(WorkerCall::SaveHistory(item.identity().to_owned()));
        match &self.save_history {
            Some(rule) => resolve_detached(rule(&item)).await,
            None => Ok(()),
        }
    }

    async fn trending(&self, cancel: &CancellationToken) -> Result<TrendingPayload, SearchError> {
        self.record(WorkerCall::Trending);
        match &self.trending {
            Some(rule) => resolve(rule(), cancel).await,
            None => panic!("mock worker: trending called without a rule"),
        }
    }

    async fn highlight(
        &self,
        cancel: &CancellationToken,
    ) -> Result<HighlightPayload, SearchError> {
        self.record(WorkerCall::Highlight);
        match &self.highlight {
            Some(rule) => resolve(rule(), cancel).await,
            None => panic!("mock worker: highlight called without a rule"),
        }
    }

    async fn search(
        &self,
        query: SearchQuery,
        cancel: &CancellationToken,
    ) -> Result<SearchPayload, SearchError> {
        self.record(WorkerCall::Search(query.query.clone()));
        match &self.search {
            Some(rule) => resolve(rule(&query), cancel).await,
            None => panic!("mock worker: search called without a rule"),
        }
    }
}
