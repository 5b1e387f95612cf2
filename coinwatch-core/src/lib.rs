//! coinwatch-core
//!
//! Contracts and concurrency utilities shared by every coinwatch worker and
//! orchestrator implementation.
//!
//! - `worker`: the [`SearchWorker`] trait, the async seam between the
//!   orchestrator and whatever fetches market data.
//! - `presenter`: the [`SearchPresenting`] trait, the synchronous seam
//!   towards the UI layer.
//! - `store`: the [`RecentSearchesStore`] contract plus the in-memory
//!   reference implementation.
//! - `error`: [`SearchError`], the one error type crossing those seams.
//! - `registry`: the cancellable [`TaskRegistry`] with its sentinel identity
//!   for the long-lived search stream.
#![warn(missing_docs)]

/// Search error taxonomy.
pub mod error;
/// Presenter notification seam.
pub mod presenter;
/// Cancellable task registry and cooperative checkpoints.
pub mod registry;
/// Recent-search persistence contract and reference store.
pub mod store;
/// Market-data worker seam.
pub mod worker;

pub use error::SearchError;
pub use presenter::SearchPresenting;
pub use registry::{TaskId, TaskRegistry, checkpoint};
pub use store::{HISTORY_CAP, MemoryRecentStore, RecentSearchesStore, remember};
pub use worker::SearchWorker;
