use std::sync::{PoisonError, RwLock};

use url::Url;

use crate::domain::broker::NavigationBroker;
use crate::domain::types::{EventHandler, LocationChangedEvent, NotFoundEvent, SubscriptionId};
use crate::error::BrokerError;
use crate::navigation::registry::EventHandlers;

/// In-process router: tracks the current location under a base URI and raises router
/// events to its subscribers.
pub struct InProcessNavigationBroker {
    base_uri: Url,
    location: RwLock<Url>,
    location_changed: EventHandlers<LocationChangedEvent>,
    not_found: EventHandlers<NotFoundEvent>,
}

impl InProcessNavigationBroker {
    /// Start at `base_uri`, which must be absolute.
    pub fn new(base_uri: &str) -> Result<Self, BrokerError> {
        let base_uri = Url::parse(base_uri).map_err(|e| invalid_uri(base_uri, e))?;
        Ok(Self {
            location: RwLock::new(base_uri.clone()),
            base_uri,
            location_changed: EventHandlers::default(),
            not_found: EventHandlers::default(),
        })
    }

    pub fn base_uri(&self) -> &str {
        self.base_uri.as_str()
    }

    /// Move to `uri` as if the user followed a link the router intercepted.
    pub fn intercept_navigation(
        &self,
        uri: &str,
        history_entry_state: Option<String>,
    ) -> Result<(), BrokerError> {
        self.change_location(uri, true, history_entry_state)
    }

    /// Signal that no route matched the current location.
    pub fn report_not_found(&self) {
        let event = NotFoundEvent {
            location: self.location(),
        };
        tracing::debug!(location = %event.location, "route not found");
        self.not_found.raise(&event);
    }

    fn change_location(
        &self,
        uri: &str,
        is_navigation_intercepted: bool,
        history_entry_state: Option<String>,
    ) -> Result<(), BrokerError> {
        let target = self.base_uri.join(uri).map_err(|e| invalid_uri(uri, e))?;
        *self
            .location
            .write()
            .unwrap_or_else(PoisonError::into_inner) = target.clone();

        let event = LocationChangedEvent {
            location: target.into(),
            is_navigation_intercepted,
            history_entry_state,
        };
        tracing::debug!(
            location = %event.location,
            intercepted = is_navigation_intercepted,
            "location changed"
        );
        self.location_changed.raise(&event);
        Ok(())
    }
}

fn invalid_uri(uri: &str, e: url::ParseError) -> BrokerError {
    BrokerError::rejected("INVALID_URI", format!("invalid uri '{uri}': {e}"))
}

impl NavigationBroker for InProcessNavigationBroker {
    fn location(&self) -> String {
        self.location
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .to_string()
    }

    /// `force_load` has no effect in-process: there is no page to reload.
    fn navigate_to(&self, uri: &str, force_load: bool) -> Result<(), BrokerError> {
        tracing::debug!(uri, force_load, "navigate");
        self.change_location(uri, false, None)
    }

    fn subscribe_location_changed(
        &self,
        handler: EventHandler<LocationChangedEvent>,
    ) -> SubscriptionId {
        self.location_changed.subscribe(handler)
    }

    fn subscribe_not_found(&self, handler: EventHandler<NotFoundEvent>) -> SubscriptionId {
        self.not_found.subscribe(handler)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.location_changed.unsubscribe(id) || self.not_found.unsubscribe(id)
    }
}
