use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Raised by the router after the current location changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationChangedEvent {
    /// Absolute URI of the new location.
    pub location: String,
    /// `true` when the router intercepted a link click instead of a programmatic
    /// `navigate_to`.
    pub is_navigation_intercepted: bool,
    pub history_entry_state: Option<String>,
}

/// Raised by the router when no route matches the current location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundEvent {
    pub location: String,
}

/// Callback registered for an event of type `E`.
pub type EventHandler<E> = Arc<dyn Fn(&E) + Send + Sync>;

/// Handle returned by a subscription, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

static NEXT_SUBSCRIPTION_ID: AtomicU64 = AtomicU64::new(1);

impl SubscriptionId {
    /// Process-wide unique id.
    pub fn next() -> Self {
        Self(NEXT_SUBSCRIPTION_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
