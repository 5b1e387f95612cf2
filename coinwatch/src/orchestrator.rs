//! The search orchestrator: screen state, flows, and their cancellation
//! story.

use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use coinwatch_core::{
    SearchError, SearchPresenting, SearchWorker, TaskRegistry, checkpoint, remember,
};
use coinwatch_types::{
    Destination, HighlightCategory, ListUpdate, RecentSearch, SearchPayload, SearchQuery, Section,
    SectionUpdate, TrendingCategory,
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::builder::SearchOrchestratorBuilder;
use crate::debounce::{self, Debounced};
use crate::state::{SEARCH_HIT_CAP, SearchState};

/// Drives the search screen: holds its state, runs its background flows, and
/// reports every effect through a [`SearchPresenting`] implementation.
///
/// # Flows
///
/// [`prepare`](Self::prepare) loads recent-search history, then fetches the
/// trending and highlight feeds concurrently. Typing goes through
/// [`search_field_changed`](Self::search_field_changed): keystrokes feed a
/// debounced stream, and each query that survives the quiet interval runs as
/// its own cancellable search unit. Clearing the field cancels the stream
/// and every in-flight unit before the browsing snapshot is shown again.
///
/// # Consistency
///
/// All state lives behind one mutex. Each lock scope is a single logical
/// mutation: the state change and the notification describing it happen in
/// the same scope, so notifications arrive in mutation order. The lock is
/// never held across an await. Background flows re-check their cancellation
/// token under the lock before applying effects, which is what makes a clear
/// final: a unit that lost the race observes the cancelled token and applies
/// nothing.
///
/// Presenter calls are made synchronously, sometimes under the state lock.
/// Implementations must hand the update off (queue it, send it to a UI
/// thread) rather than call back into the orchestrator.
///
/// # Teardown
///
/// Background flows hold only weak handles, so dropping the last external
/// [`Arc`] drops the orchestrator; drop cancels the prepare token and the
/// task registry, which cancels the stream and every in-flight unit.
pub struct SearchOrchestrator {
    worker: Arc<dyn SearchWorker>,
    presenter: Arc<dyn SearchPresenting>,
    state: Mutex<SearchState>,
    registry: TaskRegistry,
    debounce: Duration,
    keystrokes: Mutex<Option<mpsc::UnboundedSender<String>>>,
    lifecycle: CancellationToken,
}

impl SearchOrchestrator {
    /// Start building an orchestrator around a worker and a presenter.
    pub fn builder(
        worker: Arc<dyn SearchWorker>,
        presenter: Arc<dyn SearchPresenting>,
    ) -> SearchOrchestratorBuilder {
        SearchOrchestratorBuilder::new(worker, presenter)
    }

    pub(crate) fn assemble(
        worker: Arc<dyn SearchWorker>,
        presenter: Arc<dyn SearchPresenting>,
        debounce: Duration,
        state: SearchState,
    ) -> Arc<Self> {
        Arc::new(Self {
            worker,
            presenter,
            state: Mutex::new(state),
            registry: TaskRegistry::new(),
            debounce,
            keystrokes: Mutex::new(None),
            lifecycle: CancellationToken::new(),
        })
    }

    /// A point-in-time copy of the screen state.
    #[must_use]
    pub fn snapshot(&self) -> SearchState {
        self.state.lock().expect("state lock poisoned").clone()
    }

    /// Load the screen: history first, then trending and highlight.
    ///
    /// History gates the rest. When it fails with anything but cancellation,
    /// exactly one alert is raised and no feed is fetched. On success the
    /// two feeds are fetched concurrently; each one that succeeds is applied
    /// even if the other fails. Both succeeding emits one consolidated
    /// [`ListUpdate::Information`]; any real failure emits one alert with
    /// the first failure's message instead; cancellation emits nothing.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "coinwatch::orchestrator::prepare", skip(self))
    )]
    pub async fn prepare(&self) {
        match self.worker.load_search_history().await {
            Ok(history) => {
                let mut state = self.state.lock().expect("state lock poisoned");
                state.recent_searches = history;
            }
            Err(error) => {
                if !error.is_cancellation() {
                    self.alert(&error);
                }
                return;
            }
        }

        let (trending, highlight) = futures::join!(
            self.worker.trending(&self.lifecycle),
            self.worker.highlight(&self.lifecycle),
        );

        let mut cancelled = false;
        let mut failure: Option<SearchError> = None;
        let mut note = |error: SearchError| {
            if error.is_cancellation() {
                cancelled = true;
            } else if failure.is_none() {
                failure = Some(error);
            }
        };

        match trending {
            Ok(payload) => {
                let mut state = self.state.lock().expect("state lock poisoned");
                state.trending = payload;
            }
            Err(error) => note(error),
        }
        match highlight {
            Ok(payload) => {
                let mut state = self.state.lock().expect("state lock poisoned");
                state.highlight = payload;
            }
            Err(error) => note(error),
        }

        if let Some(error) = failure {
            self.alert(&error);
        } else if !cancelled {
            let state = self.state.lock().expect("state lock poisoned");
            self.presenter
                .update_list(ListUpdate::Information(state.information()));
        }
    }

    /// The search field changed.
    ///
    /// Empty text clears: the stream and every in-flight search unit are
    /// cancelled, typed state is flushed, and one
    /// [`ListUpdate::Information`] with the browsing snapshot is emitted.
    /// Non-empty text stores the query, emits [`ListUpdate::Loading`]
    /// immediately, and enqueues the text for the debounced stream; only
    /// text that survives the quiet interval reaches the worker.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn search_field_changed(self: &Arc<Self>, text: &str) {
        if text.is_empty() {
            self.clear_search();
            return;
        }
        {
            let mut state = self.state.lock().expect("state lock poisoned");
            state.query = text.to_owned();
            self.presenter.update_list(ListUpdate::Loading);
        }
        self.push_keystroke(text.to_owned());
    }

    /// A row in one of the category selector strips was tapped.
    ///
    /// `section` indexes the currently visible sections, `row` the
    /// sub-category within the strip. Only the trending and highlight strips
    /// respond. An out-of-range section is ignored; an unknown row keeps the
    /// current selection. The strip is re-rendered either way, from state
    /// already in hand; no network activity is involved.
    pub fn category_tapped(&self, section: usize, row: usize) {
        let mut state = self.state.lock().expect("state lock poisoned");
        match state.sections().get(section) {
            Some(Section::Trending(_)) => {
                if let Some(selected) = TrendingCategory::from_index(row) {
                    state.selected_trending = selected;
                }
                self.presenter
                    .update_section(SectionUpdate::Trending(state.trending_section()));
            }
            Some(Section::Highlight(_)) => {
                if let Some(selected) = HighlightCategory::from_index(row) {
                    state.selected_highlight = selected;
                }
                self.presenter
                    .update_section(SectionUpdate::Highlight(state.highlight_section()));
            }
            _ => {}
        }
    }

    /// The synthetic "load more" row of the collapsed trending coin list was
    /// tapped: show every trending coin from now on.
    pub fn tapped_expand_row(&self) {
        let mut state = self.state.lock().expect("state lock poisoned");
        state.is_trending_expanded = true;
        self.presenter
            .update_section(SectionUpdate::Trending(state.trending_section()));
    }

    /// Cancel the stream and every in-flight unit, then show the browsing
    /// snapshot.
    fn clear_search(&self) {
        {
            let mut keystrokes = self.keystrokes.lock().expect("keystroke lock poisoned");
            // Cancel before dropping the sender: the stream must observe its
            // token, not the channel closing, or it would flush the pending
            // keystroke as a settled query.
            self.registry.cancel_sentinel();
            keystrokes.take();
        }
        let mut state = self.state.lock().expect("state lock poisoned");
        state.query.clear();
        state.search_results = None;
        self.presenter
            .update_list(ListUpdate::Information(state.information()));
    }

    /// Hand a keystroke to the stream, starting it on first use.
    fn push_keystroke(self: &Arc<Self>, text: String) {
        let mut keystrokes = self.keystrokes.lock().expect("keystroke lock poisoned");
        let sender = keystrokes.get_or_insert_with(|| {
            let (sender, debounced) = debounce::channel(self.debounce);
            let weak = Arc::downgrade(self);
            self.registry
                .install_sentinel(move |cancel| Self::run_stream(weak, debounced, cancel));
            sender
        });
        // Send fails only while the runtime tears the stream down; the
        // keystroke is moot then.
        let _ = sender.send(text);
    }

    /// Sentinel body: spawn one search unit per settled query.
    ///
    /// Holds only a weak handle so the stream never keeps the orchestrator
    /// alive. The `biased` order matters: once the token fires, a
    /// simultaneously settled query must lose.
    async fn run_stream(
        orchestrator: Weak<Self>,
        mut keystrokes: Debounced<String>,
        cancel: CancellationToken,
    ) {
        loop {
            let settled = tokio::select! {
                biased;
                () = cancel.cancelled() => return,
                settled = keystrokes.settled() => settled,
            };
            let Some(query) = settled else { return };
            let Some(orchestrator) = orchestrator.upgrade() else { return };
            orchestrator.spawn_search(query, &cancel);
        }
    }

    /// Spawn one cancellable search unit for a settled query.
    fn spawn_search(self: &Arc<Self>, query: String, stream: &CancellationToken) {
        // The keystroke lock makes the spawn atomic with a concurrent clear:
        // either the clear already fired the stream token, or the unit
        // registers as a child of the still-live sentinel and the clear
        // reaches it.
        let _keystrokes = self.keystrokes.lock().expect("keystroke lock poisoned");
        if stream.is_cancelled() {
            return;
        }
        let worker = Arc::clone(&self.worker);
        let weak = Arc::downgrade(self);
        self.registry.spawn_one_shot(move |cancel| async move {
            let result = worker.search(SearchQuery::new(query), &cancel).await;
            let Some(orchestrator) = weak.upgrade() else {
                return;
            };
            match orchestrator.apply_search(result, &cancel).await {
                Ok(()) => {}
                Err(error) if error.is_cancellation() => {}
                Err(error) => orchestrator.alert(&error),
            }
        });
    }

    /// Apply a finished search.
    ///
    /// Stores the capped result, persists the first coin hit and mirrors it
    /// into the in-memory history, then emits [`ListUpdate::Search`]. Both
    /// lock scopes re-check the token first, so a unit that lost to a clear
    /// applies nothing.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "coinwatch::orchestrator::apply_search", skip_all)
    )]
    async fn apply_search(
        &self,
        result: Result<SearchPayload, SearchError>,
        cancel: &CancellationToken,
    ) -> Result<(), SearchError> {
        let payload = result?.truncated(SEARCH_HIT_CAP);
        {
            let mut state = self.state.lock().expect("state lock poisoned");
            checkpoint(cancel)?;
            state.search_results = Some(payload.clone());
        }

        let remembered = payload.coins.first().cloned().map(RecentSearch::from);
        if let Some(item) = remembered.clone() {
            self.worker.save_search_history(item).await?;
        }

        let mut state = self.state.lock().expect("state lock poisoned");
        checkpoint(cancel)?;
        if let Some(item) = remembered {
            remember(&mut state.recent_searches, item);
        }
        self.presenter.update_list(ListUpdate::Search(payload));
        Ok(())
    }

    /// Record an alert destination and surface it.
    fn alert(&self, error: &SearchError) {
        let destination = Destination::Alert {
            message: error.to_string(),
        };
        let mut state = self.state.lock().expect("state lock poisoned");
        state.destination = Some(destination.clone());
        self.presenter.change_destination(destination);
    }
}

impl Drop for SearchOrchestrator {
    fn drop(&mut self) {
        // The registry's own drop cancels the stream and the in-flight
        // units; this token reaches the prepare fetches.
        self.lifecycle.cancel();
    }
}
