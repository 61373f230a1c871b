//! Transient toast notifications.
//!
//! At most one message is live. Each `show` schedules an expiry task that
//! reports its generation back over a channel after [`NOTIFICATION_TTL`]; the
//! UI loop forwards that generation to [`Notifier::expire`]. Showing a new
//! message aborts the previous timer, so an older expiry can never clear a
//! newer message.

use std::borrow::Cow;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub const NOTIFICATION_TTL: Duration = Duration::from_secs(2);

#[derive(Debug)]
pub struct Notifier {
    message: Option<Cow<'static, str>>,
    generation: u64,
    timer: Option<JoinHandle<()>>,
    expiry_tx: mpsc::UnboundedSender<u64>,
}

impl Notifier {
    pub fn new(expiry_tx: mpsc::UnboundedSender<u64>) -> Self {
        Self {
            message: None,
            generation: 0,
            timer: None,
            expiry_tx,
        }
    }

    /// Replace the live message and restart the expiry timer.
    ///
    /// Must be called from within a tokio runtime.
    pub fn show(&mut self, message: impl Into<Cow<'static, str>>) {
        let message = message.into();
        tracing::debug!(message = %message, "Notification");

        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        self.generation = self.generation.wrapping_add(1);
        self.message = Some(message);

        let generation = self.generation;
        let tx = self.expiry_tx.clone();
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(NOTIFICATION_TTL).await;
            // Receiver gone means the app is shutting down.
            let _ = tx.send(generation);
        }));
    }

    /// Clear the message if `generation` is the one currently shown.
    ///
    /// Returns whether anything changed.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.message.is_none() {
            return false;
        }
        self.message = None;
        self.timer = None;
        true
    }

    pub fn current(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for Notifier {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_message_expires_after_ttl() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut notifier = Notifier::new(tx);

        notifier.show("Saved to bookmarks");
        assert_eq!(notifier.current(), Some("Saved to bookmarks"));

        let generation = rx.recv().await.unwrap();
        assert!(notifier.expire(generation));
        assert_eq!(notifier.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_expires_before_ttl() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut notifier = Notifier::new(tx);

        notifier.show("hello");
        tokio::time::advance(NOTIFICATION_TTL - Duration::from_millis(10)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
        assert_eq!(notifier.current(), Some("hello"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_message_cancels_previous_timer() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut notifier = Notifier::new(tx);

        notifier.show("first");
        tokio::time::advance(Duration::from_millis(1500)).await;
        notifier.show("second");

        // Only the second timer fires, a full TTL after it was scheduled.
        let generation = rx.recv().await.unwrap();
        assert_eq!(generation, notifier.generation());
        assert!(rx.try_recv().is_err());
        assert!(notifier.expire(generation));
        assert_eq!(notifier.current(), None);
    }

    #[tokio::test]
    async fn test_stale_expiry_is_ignored() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut notifier = Notifier::new(tx);

        notifier.show("first");
        let stale = notifier.generation();
        notifier.show("second");

        assert!(!notifier.expire(stale));
        assert_eq!(notifier.current(), Some("second"));
    }
}
