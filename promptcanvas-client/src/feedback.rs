//! Transient error feedback - the "shake" the view plays on failure.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// How long the error flag stays raised before it resets.
pub const RESET_DELAY: Duration = Duration::from_millis(500);

/// A transient boolean the view observes to play its error affordance.
///
/// [`trigger`](Self::trigger) raises the flag and arms a reset timer.
/// Overlapping triggers are coalesced: the previous timer is aborted and the
/// window restarts, so the flag always drops exactly [`RESET_DELAY`] after
/// the *last* trigger. The flag is never part of persisted state.
#[derive(Debug)]
pub struct ErrorSignal {
    tx: watch::Sender<bool>,
    reset: Option<JoinHandle<()>>,
}

impl ErrorSignal {
    /// Create a signal in the unraised state.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx, reset: None }
    }

    /// Subscribe to flag changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }

    /// Whether the flag is currently raised.
    #[must_use]
    pub fn is_active(&self) -> bool {
        *self.tx.borrow()
    }

    /// Raise the flag and (re)arm the reset timer.
    pub fn trigger(&mut self) {
        if let Some(previous) = self.reset.take() {
            previous.abort();
        }

        let _ = self.tx.send(true);

        let tx = self.tx.clone();
        self.reset = Some(tokio::spawn(async move {
            tokio::time::sleep(RESET_DELAY).await;
            let _ = tx.send(false);
        }));
    }
}

impl Default for ErrorSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ErrorSignal {
    fn drop(&mut self) {
        if let Some(reset) = self.reset.take() {
            reset.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_trigger_raises_then_resets() {
        let mut signal = ErrorSignal::new();
        assert!(!signal.is_active());

        signal.trigger();
        assert!(signal.is_active());

        // Paused clock advances past the reset delay while we sleep.
        tokio::time::sleep(RESET_DELAY + Duration::from_millis(50)).await;
        assert!(!signal.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_triggers_restart_window() {
        let mut signal = ErrorSignal::new();

        signal.trigger();
        tokio::time::sleep(Duration::from_millis(300)).await;

        // Second trigger restarts the 500ms window.
        signal.trigger();
        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(signal.is_active(), "600ms after first trigger, 300ms after second");

        tokio::time::sleep(Duration::from_millis(250)).await;
        assert!(!signal.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscriber_observes_transition() {
        let mut signal = ErrorSignal::new();
        let mut rx = signal.subscribe();

        signal.trigger();
        rx.changed().await.expect("raised");
        assert!(*rx.borrow());

        rx.changed().await.expect("reset");
        assert!(!*rx.borrow());
    }
}
