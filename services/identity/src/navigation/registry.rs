use std::sync::{PoisonError, RwLock};

use crate::domain::types::{EventHandler, SubscriptionId};

/// Ordered list of callbacks for one event type.
pub struct EventHandlers<E> {
    handlers: RwLock<Vec<(SubscriptionId, EventHandler<E>)>>,
}

impl<E> Default for EventHandlers<E> {
    fn default() -> Self {
        Self {
            handlers: RwLock::new(Vec::new()),
        }
    }
}

impl<E> EventHandlers<E> {
    pub fn subscribe(&self, handler: EventHandler<E>) -> SubscriptionId {
        let id = SubscriptionId::next();
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, handler));
        id
    }

    /// Returns `true` if `id` was registered here.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self
            .handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = handlers.len();
        handlers.retain(|(existing, _)| *existing != id);
        handlers.len() != before
    }

    pub fn len(&self) -> usize {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invoke every handler with `event`, in subscription order, on the calling thread.
    /// Returns the number of handlers invoked.
    ///
    /// The lock is released before handlers run, so a handler may subscribe or
    /// unsubscribe; such changes apply from the next raise.
    pub fn raise(&self, event: &E) -> usize {
        let snapshot: Vec<EventHandler<E>> = self
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in &snapshot {
            handler(event);
        }
        snapshot.len()
    }
}
