//! Cancellable task registry with a sentinel identity.
//!
//! The orchestrator runs two kinds of background work: one long-lived
//! debounced search stream, registered under the fixed [`TaskId::Sentinel`]
//! identity, and short-lived one-shot units (one per executed search) whose
//! tokens are children of the sentinel's. Cancelling the sentinel therefore
//! reaches any search still in flight.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, Weak};

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::error::SearchError;

/// Cooperative cancellation checkpoint.
///
/// Call between sequential steps of a multi-call flow so a cancellation
/// requested mid-flow is observed promptly rather than at the next await.
pub fn checkpoint(cancel: &CancellationToken) -> Result<(), SearchError> {
    if cancel.is_cancelled() {
        return Err(SearchError::Cancelled);
    }
    Ok(())
}

/// Identity of one registered task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskId {
    /// The fixed, reused identity of the long-lived search stream. At most
    /// one entry exists under it at any time.
    Sentinel,
    /// A freshly generated one-shot unit of work.
    OneShot(u64),
}

struct Entry {
    serial: u64,
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl Entry {
    /// Request cooperative cancellation; the task runs its cancellation
    /// branch and removes its own entry.
    fn cancel(self) {
        self.token.cancel();
    }

    /// Teardown: cancel, then abort as a backstop for tasks that never
    /// reach an await.
    fn shutdown(self) {
        self.token.cancel();
        if !self.handle.is_finished() {
            self.handle.abort();
        }
    }
}

#[derive(Default)]
struct Inner {
    entries: HashMap<TaskId, Entry>,
    counter: u64,
}

impl Inner {
    fn bump(&mut self) -> u64 {
        let serial = self.counter;
        self.counter += 1;
        serial
    }
}

/// Registry of cancellable background tasks.
///
/// Guarded by a mutex because completion callbacks run on whatever worker
/// thread finished the task. Each spawned unit removes its own entry on
/// completion (including cooperative cancellation), so the registry cannot
/// grow without bound. Dropping the registry cancels everything still
/// registered.
///
/// Registering requires a running Tokio runtime, as tasks are spawned
/// immediately.
#[derive(Default)]
pub struct TaskRegistry {
    inner: Arc<Mutex<Inner>>,
}

impl TaskRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the long-lived task under the sentinel identity.
    ///
    /// An incumbent sentinel entry is cancelled and replaced. The task
    /// receives a fresh token; one-shots spawned while it lives get child
    /// tokens of it.
    pub fn install_sentinel<F, Fut>(&self, task: F)
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let previous;
        {
            let mut inner = self.inner.lock().expect("registry lock poisoned");
            previous = inner.entries.remove(&TaskId::Sentinel);
            let serial = inner.bump();
            let token = CancellationToken::new();
            let cleanup = Arc::downgrade(&self.inner);
            let body = task(token.clone());
            let handle = tokio::spawn(async move {
                body.await;
                remove_completed(&cleanup, TaskId::Sentinel, serial);
            });
            inner.entries.insert(
                TaskId::Sentinel,
                Entry {
                    serial,
                    token,
                    handle,
                },
            );
        }
        if let Some(entry) = previous {
            entry.cancel();
        }
    }

    /// Spawn a one-shot unit of work.
    ///
    /// Its token is a child of the sentinel's when a sentinel is installed,
    /// so the sentinel cancellation path reaches it; otherwise it gets an
    /// independent token. The entry removes itself once the task completes.
    pub fn spawn_one_shot<F, Fut>(&self, task: F) -> TaskId
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let mut inner = self.inner.lock().expect("registry lock poisoned");
        let serial = inner.bump();
        let id = TaskId::OneShot(serial);
        let token = match inner.entries.get(&TaskId::Sentinel) {
            Some(sentinel) => sentinel.token.child_token(),
            None => CancellationToken::new(),
        };
        let cleanup = Arc::downgrade(&self.inner);
        let body = task(token.clone());
        let handle = tokio::spawn(async move {
            body.await;
            remove_completed(&cleanup, id, serial);
        });
        inner.entries.insert(
            id,
            Entry {
                serial,
                token,
                handle,
            },
        );
        id
    }

    /// Cancel and remove the sentinel entry, if one exists.
    ///
    /// One-shots holding child tokens observe the cancellation cooperatively
    /// and remove themselves.
    pub fn cancel_sentinel(&self) {
        let removed = {
            let mut inner = self.inner.lock().expect("registry lock poisoned");
            inner.entries.remove(&TaskId::Sentinel)
        };
        if let Some(entry) = removed {
            entry.cancel();
        }
    }

    /// Cancel and remove every registered task, aborting any that do not
    /// finish on their own.
    pub fn cancel_all(&self) {
        let drained: Vec<Entry> = {
            let mut inner = self.inner.lock().expect("registry lock poisoned");
            inner.entries.drain().map(|(_, entry)| entry).collect()
        };
        for entry in drained {
            entry.shutdown();
        }
    }

    /// True when a sentinel entry is currently registered.
    #[must_use]
    pub fn has_sentinel(&self) -> bool {
        let inner = self.inner.lock().expect("registry lock poisoned");
        inner.entries.contains_key(&TaskId::Sentinel)
    }

    /// Number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        let inner = self.inner.lock().expect("registry lock poisoned");
        inner.entries.len()
    }

    /// True when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Drop for TaskRegistry {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

/// Drop the entry a finished task left behind, unless the identity has been
/// reused by a newer registration.
fn remove_completed(inner: &Weak<Mutex<Inner>>, id: TaskId, serial: u64) {
    if let Some(inner) = inner.upgrade() {
        let mut inner = inner.lock().expect("registry lock poisoned");
        if inner.entries.get(&id).is_some_and(|entry| entry.serial == serial) {
            inner.entries.remove(&id);
        }
    }
}
