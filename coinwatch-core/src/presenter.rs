//! The notification seam towards the UI layer.

use coinwatch_types::{Destination, ListUpdate, SectionUpdate};

/// Receiver of orchestrator notifications.
///
/// Calls arrive synchronously while the orchestrator holds its state lock,
/// so notification order always matches mutation order. Implementations
/// must hand off quickly (push onto a channel, schedule a render) and must
/// not call back into the orchestrator from inside a notification.
pub trait SearchPresenting: Send + Sync {
    /// The whole visible list changed.
    fn update_list(&self, update: ListUpdate);

    /// A single section changed; the rest of the list is untouched.
    fn update_section(&self, update: SectionUpdate);

    /// Navigate somewhere, currently always an alert.
    fn change_destination(&self, destination: Destination);
}
