//! Timer-reset debouncing for the keystroke stream.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;

/// Receiving half of a debounced channel.
///
/// Every value pushed into the sending half restarts a quiet-interval timer;
/// a value is released only once the interval elapses with nothing newer
/// arriving. Superseded values are discarded, never delivered late.
#[derive(Debug)]
pub struct Debounced<T> {
    rx: mpsc::UnboundedReceiver<T>,
    interval: Duration,
}

/// An unbounded channel whose receiver settles values after `interval` of
/// quiet.
pub fn channel<T>(interval: Duration) -> (mpsc::UnboundedSender<T>, Debounced<T>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (tx, Debounced { rx, interval })
}

impl<T> Debounced<T> {
    /// The next settled value.
    ///
    /// Waits for a value, then keeps replacing it with anything newer that
    /// arrives within the quiet interval. Closing the channel flushes the
    /// pending value immediately; `None` means every sender is gone and the
    /// backlog is drained.
    ///
    /// Not cancel-safe: dropping a `settled` call in flight discards the
    /// value it has buffered. The search stream only drops it on
    /// cancellation, where discarding the pending keystroke is the point.
    pub async fn settled(&mut self) -> Option<T> {
        let mut latest = self.rx.recv().await?;
        loop {
            match timeout(self.interval, self.rx.recv()).await {
                Ok(Some(newer)) => latest = newer,
                Ok(None) | Err(_) => return Some(latest),
            }
        }
    }
}
