//! A [`SearchPresenting`] double that records instead of rendering.

use std::sync::Mutex;

use coinwatch_core::SearchPresenting;
use coinwatch_types::{Destination, ListUpdate, SectionUpdate};

/// One recorded notification.
#[derive(Debug, Clone, PartialEq)]
pub enum PresenterEvent {
    /// From `update_list`.
    List(ListUpdate),
    /// From `update_section`.
    Section(SectionUpdate),
    /// From `change_destination`.
    Destination(Destination),
}

/// Recording presenter.
///
/// Notifications are pushed in arrival order. Presenting is synchronous,
/// so arrival order is also mutation order. Tests assert on the recorded
/// sequence structurally.
#[derive(Debug, Default)]
pub struct MockPresenter {
    events: Mutex<Vec<PresenterEvent>>,
}

impl MockPresenter {
    /// Empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every notification received so far, in order.
    pub fn events(&self) -> Vec<PresenterEvent> {
        self.events
            .lock()
            .expect("mock presenter lock poisoned")
            .clone()
    }

    /// Only the whole-list updates, in order.
    pub fn list_updates(&self) -> Vec<ListUpdate> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                PresenterEvent::List(update) => Some(update),
                _ => None,
            })
            .collect()
    }

    /// Only the section updates, in order.
    pub fn section_updates(&self) -> Vec<SectionUpdate> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                PresenterEvent::Section(update) => Some(update),
                _ => None,
            })
            .collect()
    }

    /// Only the alert messages, in order.
    pub fn alerts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                PresenterEvent::Destination(Destination::Alert { message }) => Some(message),
                _ => None,
            })
            .collect()
    }

    /// Forget everything recorded so far. Useful between a test's arrange
    /// and act phases.
    pub fn clear(&self) {
        self.events
            .lock()
            .expect("mock presenter lock poisoned")
            .clear();
    }

    fn push(&self, event: PresenterEvent) {
        self.events
            .lock()
            .expect("mock presenter lock poisoned")
            .push(event);
    }
}

impl SearchPresenting for MockPresenter {
    fn update_list(&self, update: ListUpdate) {
        self.push(PresenterEvent::List(update));
    }

    fn update_section(&self, update: SectionUpdate) {
        self.push(PresenterEvent::Section(update));
    }

    fn change_destination(&self, destination: Destination) {
        self.push(PresenterEvent::Destination(destination));
    }
}
