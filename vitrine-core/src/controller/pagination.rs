//! src/controller/pagination.rs
//! ============================================================================
//! # Pagination Controller: Sentinel Observation and Window Growth
//!
//! Watches the sentinel row at the end of the result grid. When a render
//! leaves the sentinel inside the viewport, [`observe`] arms a cancellable
//! settling timer; once it elapses the event loop receives a tick and
//! dispatches the window-growth action. Guards: a pending timer is never
//! doubled up, observation is suspended while the sentinel is not rendered,
//! and teardown aborts whatever is in flight.
//!
//! [`observe`]: PaginationController::observe

use std::time::Duration;

use tokio::{sync::mpsc, task::JoinHandle};
use tracing::trace;

/// Arms settling timers; ticks arrive on the receiver returned by
/// [`PaginationController::new`].
pub struct PaginationController {
    settle: Duration,
    tx: mpsc::UnboundedSender<()>,
    pending: Option<JoinHandle<()>>,
}

impl PaginationController {
    /// Create a controller and the receiving end for settle ticks.
    #[must_use]
    pub fn new(settle: Duration) -> (Self, mpsc::UnboundedReceiver<()>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                settle,
                tx,
                pending: None,
            },
            rx,
        )
    }

    /// Arm the settling timer, unless one is already pending. Call after
    /// every render that leaves the sentinel visible.
    pub fn observe(&mut self) {
        if self.pending.is_some() {
            return;
        }

        trace!("sentinel observed, settling for {:?}", self.settle);

        let settle = self.settle;
        let tx = self.tx.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(settle).await;
            let _ = tx.send(());
        }));
    }

    /// Consume the fired timer so the next render can re-arm. Call when a
    /// settle tick is received.
    pub fn acknowledge(&mut self) {
        self.pending = None;
    }

    /// Tear observation down: abort the pending timer, if any. Called when
    /// the sentinel leaves the viewport or is no longer rendered.
    pub fn suspend(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Drop for PaginationController {
    fn drop(&mut self) {
        self.suspend();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::advance;

    #[tokio::test(start_paused = true)]
    async fn tick_arrives_after_settle_delay() {
        let (mut pagination, mut rx) = PaginationController::new(Duration::from_millis(300));

        pagination.observe();
        assert!(pagination.is_pending());

        advance(Duration::from_millis(300)).await;
        rx.recv().await.unwrap();

        pagination.acknowledge();
        assert!(!pagination.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn pending_timer_is_never_doubled() {
        let (mut pagination, mut rx) = PaginationController::new(Duration::from_millis(300));

        pagination.observe();
        pagination.observe();
        pagination.observe();

        advance(Duration::from_millis(1000)).await;
        rx.recv().await.unwrap();
        // exactly one tick for three observes
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn suspend_cancels_observation() {
        let (mut pagination, mut rx) = PaginationController::new(Duration::from_millis(300));

        pagination.observe();
        pagination.suspend();
        assert!(!pagination.is_pending());

        advance(Duration::from_millis(1000)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn acknowledged_controller_rearms() {
        let (mut pagination, mut rx) = PaginationController::new(Duration::from_millis(300));

        pagination.observe();
        advance(Duration::from_millis(300)).await;
        rx.recv().await.unwrap();
        pagination.acknowledge();

        pagination.observe();
        advance(Duration::from_millis(300)).await;
        rx.recv().await.unwrap();
    }
}
