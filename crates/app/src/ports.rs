//! Port definitions — traits that collaborators implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world. They are defined here (in `app`) so that both the use-case layer
//! and any presentation layer can depend on them without creating circular
//! dependencies.

use homesim_domain::event::DeviceEvent;

/// Publishes domain events to interested subscribers.
///
/// Publishing is synchronous — the simulation has no suspension points —
/// and infallible from the caller's side: a publisher with no listeners
/// simply drops the event.
pub trait EventPublisher {
    /// Publish an event to all current subscribers.
    fn publish(&self, event: DeviceEvent);
}

impl<T: EventPublisher> EventPublisher for std::sync::Arc<T> {
    fn publish(&self, event: DeviceEvent) {
        (**self).publish(event);
    }
}
