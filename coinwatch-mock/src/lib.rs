//! coinwatch-mock
//!
//! Deterministic test doubles for the coinwatch stack:
//!
//! - `worker`: [`MockWorker`], a closure-programmable
//!   [`SearchWorker`](coinwatch_core::SearchWorker) with a call log.
//! - `presenter`: [`MockPresenter`], recording every notification in
//!   arrival order.
//! - `transport`: [`MockTransport`], serving scripted responses by request
//!   path.
//! - `fixtures`: sample domain values shared across the workspace's test
//!   suites.
#![warn(missing_docs)]

/// Sample domain values.
pub mod fixtures;
/// Recording presenter double.
pub mod presenter;
/// Scripted transport double.
pub mod transport;
/// Programmable worker double.
pub mod worker;

pub use presenter::{MockPresenter, PresenterEvent};
pub use transport::MockTransport;
pub use worker::{MockBehavior, MockWorker, WorkerCall};
