use std::sync::Arc;

use crate::domain::broker::NavigationBroker;
use crate::domain::types::{EventHandler, LocationChangedEvent, NotFoundEvent, SubscriptionId};
use crate::error::IdentityServiceError;
use crate::foundation::{delegate_sync, require};
use crate::navigation::registry::EventHandlers;

const SERVICE: &str = "navigation";

/// Relays router events from a [`NavigationBroker`] to its own subscribers.
///
/// Subscribes to the broker once, on construction, and re-raises each event with the
/// same reference, synchronously. Dropping the service removes its broker subscriptions.
pub struct NavigationService<B: NavigationBroker> {
    broker: Arc<B>,
    location_changed: Arc<EventHandlers<LocationChangedEvent>>,
    not_found: Arc<EventHandlers<NotFoundEvent>>,
    broker_subscriptions: [SubscriptionId; 2],
}

impl<B: NavigationBroker> NavigationService<B> {
    pub fn new(broker: Arc<B>) -> Self {
        let location_changed: Arc<EventHandlers<LocationChangedEvent>> = Arc::default();
        let not_found: Arc<EventHandlers<NotFoundEvent>> = Arc::default();

        let relay = Arc::clone(&location_changed);
        let on_location_changed: EventHandler<LocationChangedEvent> =
            Arc::new(move |event: &LocationChangedEvent| {
                let delivered = relay.raise(event);
                tracing::trace!(
                    service = SERVICE,
                    location = %event.location,
                    intercepted = event.is_navigation_intercepted,
                    delivered,
                    "relayed location change"
                );
            });

        let relay = Arc::clone(&not_found);
        let on_not_found: EventHandler<NotFoundEvent> = Arc::new(move |event: &NotFoundEvent| {
            let delivered = relay.raise(event);
            tracing::trace!(
                service = SERVICE,
                location = %event.location,
                delivered,
                "relayed not found"
            );
        });

        let broker_subscriptions = [
            broker.subscribe_location_changed(on_location_changed),
            broker.subscribe_not_found(on_not_found),
        ];

        Self {
            broker,
            location_changed,
            not_found,
            broker_subscriptions,
        }
    }

    pub fn on_location_changed<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&LocationChangedEvent) + Send + Sync + 'static,
    {
        self.location_changed.subscribe(Arc::new(handler))
    }

    pub fn on_not_found<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&NotFoundEvent) + Send + Sync + 'static,
    {
        self.not_found.subscribe(Arc::new(handler))
    }

    /// Returns `true` if `id` belonged to one of this service's subscribers.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.location_changed.unsubscribe(id) || self.not_found.unsubscribe(id)
    }

    pub fn current_location(&self) -> String {
        self.broker.location()
    }

    pub fn navigate_to(&self, uri: &str, force_load: bool) -> Result<(), IdentityServiceError> {
        require("uri", uri)?;
        delegate_sync(SERVICE, "navigate_to", || {
            self.broker.navigate_to(uri, force_load)
        })
    }
}

impl<B: NavigationBroker> Drop for NavigationService<B> {
    fn drop(&mut self) {
        for id in self.broker_subscriptions {
            self.broker.unsubscribe(id);
        }
    }
}
