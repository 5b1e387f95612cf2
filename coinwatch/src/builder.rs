//! Assembling an orchestrator.

use std::sync::Arc;
use std::time::Duration;

use coinwatch_core::{SearchPresenting, SearchWorker};

use crate::orchestrator::SearchOrchestrator;
use crate::state::SearchState;

/// Default quiet interval between the last keystroke and the search it
/// triggers.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_secs(1);

/// Builder for [`SearchOrchestrator`].
///
/// The worker and presenter are required up front; the debounce interval and
/// the initial state have defaults. Obtained through
/// [`SearchOrchestrator::builder`].
///
/// ```rust,ignore
/// let orchestrator = SearchOrchestrator::builder(worker, presenter)
///     .debounce(Duration::from_millis(300))
///     .build();
/// orchestrator.prepare().await;
/// ```
pub struct SearchOrchestratorBuilder {
    worker: Arc<dyn SearchWorker>,
    presenter: Arc<dyn SearchPresenting>,
    debounce: Duration,
    state: SearchState,
}

impl SearchOrchestratorBuilder {
    pub(crate) fn new(
        worker: Arc<dyn SearchWorker>,
        presenter: Arc<dyn SearchPresenting>,
    ) -> Self {
        Self {
            worker,
            presenter,
            debounce: DEFAULT_DEBOUNCE,
            state: SearchState::default(),
        }
    }

    /// Quiet interval between the last keystroke and the search it triggers.
    #[must_use]
    pub fn debounce(mut self, interval: Duration) -> Self {
        self.debounce = interval;
        self
    }

    /// Seed the initial screen state, mainly for tests and previews.
    #[must_use]
    pub fn state(mut self, state: SearchState) -> Self {
        self.state = state;
        self
    }

    /// Build the orchestrator.
    ///
    /// Background flows hold weak handles to it, so it is handed out behind
    /// an [`Arc`]; dropping the last clone cancels everything still in
    /// flight.
    #[must_use]
    pub fn build(self) -> Arc<SearchOrchestrator> {
        SearchOrchestrator::assemble(self.worker, self.presenter, self.debounce, self.state)
    }
}
