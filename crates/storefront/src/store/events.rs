//! Change-notification fan-out.
//!
//! Mutating a store publishes a named event carrying no payload. Anything
//! displaying a count or list derived from cart/wishlist state subscribes
//! and re-reads storage when an event arrives; the event is a "something
//! changed" signal, never a data channel. The only ordering guarantee is
//! happens-after the write that triggered the event.

use tokio::sync::broadcast;

/// Buffered events per receiver before it starts lagging.
const CHANNEL_CAPACITY: usize = 64;

/// A change notification. Carries no payload: consumers re-read storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    CartUpdated,
    WishlistUpdated,
}

impl StoreEvent {
    /// The event name surfaced to subscribers (SSE event field).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CartUpdated => "cartUpdated",
            Self::WishlistUpdated => "wishlistUpdated",
        }
    }
}

/// Process-wide publish/subscribe channel for store change events.
///
/// Cheaply cloneable; all clones share one channel. Publishing with no
/// subscribers is fine; delivery is best-effort.
#[derive(Debug, Clone)]
pub struct ChangeBus {
    tx: broadcast::Sender<StoreEvent>,
}

impl ChangeBus {
    /// Create a new bus.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Publish a change event to all current subscribers.
    pub fn publish(&self, event: StoreEvent) {
        // An Err here only means nobody is listening right now.
        let _ = self.tx.send(event);
    }

    /// Subscribe to change events.
    ///
    /// A receiver that falls behind gets `RecvError::Lagged`; the correct
    /// reaction is to resync from storage, since events carry nothing.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.tx.subscribe()
    }

    /// Number of live subscribers (used by tests and the readiness probe).
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for ChangeBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_publish_reaches_all_subscribers() {
        let bus = ChangeBus::new();
        let mut a = bus.subscribe();
        let mut b = bus.subscribe();

        bus.publish(StoreEvent::CartUpdated);

        assert_eq!(a.recv().await.unwrap(), StoreEvent::CartUpdated);
        assert_eq!(b.recv().await.unwrap(), StoreEvent::CartUpdated);
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_does_not_panic() {
        let bus = ChangeBus::new();
        bus.publish(StoreEvent::WishlistUpdated);
    }

    #[tokio::test]
    async fn test_subscription_starts_after_past_events() {
        let bus = ChangeBus::new();
        bus.publish(StoreEvent::CartUpdated);

        let mut rx = bus.subscribe();
        bus.publish(StoreEvent::WishlistUpdated);
        // Only the event published after subscribing is seen.
        assert_eq!(rx.recv().await.unwrap(), StoreEvent::WishlistUpdated);
    }

    #[test]
    fn test_event_names() {
        assert_eq!(StoreEvent::CartUpdated.name(), "cartUpdated");
        assert_eq!(StoreEvent::WishlistUpdated.name(), "wishlistUpdated");
    }
}
