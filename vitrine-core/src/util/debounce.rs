//! src/util/debounce.rs
//! ============================================================================
//! # Debounce: Trailing-Edge Commit of Rapid Input Events
//!
//! Wraps a producer of rapid events (search keystrokes) so that the
//! committed handler runs at most once per quiet window. State machine:
//! Idle → Pending on each submit, resetting any pending sleeper; Pending →
//! Idle when the sleeper elapses, at which point the latest value is
//! delivered. Intermediate values are discarded; a submit inside the window
//! aborts the previous sleeper, so no duplicate commits are possible.
//!
//! Built on `tokio::time::sleep` inside an abortable task — cancelled
//! sleepers are dropped, nothing leaks.

use std::time::Duration;

use tokio::{sync::mpsc, task::JoinHandle};
use tracing::trace;

/// Trailing-edge debouncer. Committed values arrive on the receiver
/// returned by [`Debouncer::new`], on the event-loop side.
pub struct Debouncer<T> {
    delay: Duration,
    tx: mpsc::UnboundedSender<T>,
    sleeper: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer and the receiving end for committed values.
    #[must_use]
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                delay,
                tx,
                sleeper: None,
            },
            rx,
        )
    }

    /// Submit a new value, restarting the quiet window. Only the value of
    /// the last submit before the window elapses is ever committed.
    pub fn submit(&mut self, value: T) {
        // Idle → Pending, or Pending with the previous sleeper cancelled.
        if let Some(handle) = self.sleeper.take() {
            handle.abort();
        }

        trace!("debounce window restarted ({:?})", self.delay);

        let delay = self.delay;
        let tx = self.tx.clone();
        self.sleeper = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(value);
        }));
    }

    /// Drop any pending commit without delivering it.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.sleeper.take() {
            handle.abort();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.sleeper.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{Duration, advance};

    #[tokio::test(start_paused = true)]
    async fn commits_only_the_last_value_per_quiet_window() {
        let (mut debouncer, mut rx) = Debouncer::new(Duration::from_millis(300));

        // keystrokes at t = 0, 50, 100, then one more just before the
        // pending window would elapse at t = 400
        debouncer.submit("a");
        advance(Duration::from_millis(50)).await;
        debouncer.submit("ab");
        advance(Duration::from_millis(50)).await;
        debouncer.submit("abc");
        advance(Duration::from_millis(299)).await;
        debouncer.submit("abcd");

        // quiet from here on; nothing commits before the window closes
        advance(Duration::from_millis(299)).await;
        assert!(rx.try_recv().is_err());

        advance(Duration::from_millis(1)).await;
        let committed = rx.recv().await.unwrap();
        assert_eq!(committed, "abcd");

        // the intermediate values were never committed
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn quiet_window_delivers_single_value() {
        let (mut debouncer, mut rx) = Debouncer::new(Duration::from_millis(300));

        debouncer.submit(1u32);
        advance(Duration::from_millis(300)).await;
        assert_eq!(rx.recv().await.unwrap(), 1);

        debouncer.submit(2);
        advance(Duration::from_millis(300)).await;
        assert_eq!(rx.recv().await.unwrap(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_discards_pending_commit() {
        let (mut debouncer, mut rx) = Debouncer::new(Duration::from_millis(300));

        debouncer.submit("doomed");
        debouncer.cancel();

        advance(Duration::from_millis(1000)).await;
        assert!(rx.try_recv().is_err());
    }
}
