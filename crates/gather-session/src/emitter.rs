//! Broadcast-based session event emitter.
//!
//! The store never talks to a router or UI directly; it emits
//! [`SessionEvent`]s that route guards and views subscribe to. Emitting
//! with no subscribers is fine (nothing is listening yet at startup).

use tokio::sync::broadcast;

/// Default broadcast channel capacity.
const DEFAULT_CAPACITY: usize = 64;

/// A change in session state, observable by UI layers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// Authentication flag flipped.
    AuthChanged {
        /// New value of the authenticated flag.
        authenticated: bool,
    },
    /// The session ended; the consumer should route to the login entry
    /// point. Emitted by `logout` instead of navigating directly.
    NavigateToLogin,
}

/// Fan-out emitter for [`SessionEvent`].
///
/// Non-blocking: `emit` never awaits. Slow receivers will be dropped
/// (lagged) rather than blocking the sender.
pub struct SessionEmitter {
    tx: broadcast::Sender<SessionEvent>,
}

impl SessionEmitter {
    /// Create a new emitter with the default channel capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a new emitter with a custom channel capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Emit an event to all subscribers. Non-blocking.
    ///
    /// Returns the number of receivers that received the event;
    /// 0 if there are no active subscribers.
    pub fn emit(&self, event: SessionEvent) -> usize {
        self.tx.send(event).unwrap_or(0)
    }

    /// Subscribe to events emitted after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.tx.subscribe()
    }

    /// Number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for SessionEmitter {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
