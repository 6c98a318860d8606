//! In-process event bus backed by a tokio broadcast channel.

use tokio::sync::broadcast;

use homesim_domain::event::DeviceEvent;

use crate::ports::EventPublisher;

/// In-process event bus using a tokio [`broadcast`] channel.
///
/// Publishing succeeds even when there are no active subscribers
/// (the event is simply dropped). Clones share the underlying channel,
/// so any clone can publish and any clone can hand out subscriptions.
#[derive(Clone)]
pub struct InProcessEventBus {
    sender: broadcast::Sender<DeviceEvent>,
}

impl InProcessEventBus {
    /// Create a new event bus with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to events on this bus.
    ///
    /// Returns a receiver that will get all events published *after*
    /// the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<DeviceEvent> {
        self.sender.subscribe()
    }
}

impl EventPublisher for InProcessEventBus {
    fn publish(&self, event: DeviceEvent) {
        // broadcast::send fails only when there are zero receivers;
        // that is not an error for a notification feed.
        let _ = self.sender.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homesim_domain::device::{DeviceKind, PowerState};
    use homesim_domain::event::DeviceEventKind;

    fn power_event(device: &str, power: PowerState) -> DeviceEvent {
        DeviceEvent::new(device, DeviceEventKind::PowerChanged { power })
    }

    #[tokio::test]
    async fn should_deliver_event_to_subscriber() {
        let bus = InProcessEventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(power_event("Living Room Light", PowerState::On));

        let received = rx.recv().await.unwrap();
        assert_eq!(received.device, "Living Room Light");
        assert_eq!(
            received.kind,
            DeviceEventKind::PowerChanged {
                power: PowerState::On
            }
        );
    }

    #[tokio::test]
    async fn should_deliver_event_to_multiple_subscribers() {
        let bus = InProcessEventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(DeviceEvent::new(
            "Bedroom Lamp",
            DeviceEventKind::Added {
                kind: DeviceKind::Light,
            },
        ));

        let r1 = rx1.recv().await.unwrap();
        let r2 = rx2.recv().await.unwrap();
        assert_eq!(r1.device, "Bedroom Lamp");
        assert_eq!(r2.device, "Bedroom Lamp");
    }

    #[tokio::test]
    async fn should_accept_publishes_with_no_subscribers() {
        let bus = InProcessEventBus::new(16);
        bus.publish(power_event("Living Room Light", PowerState::Off));
    }

    #[tokio::test]
    async fn should_not_deliver_events_published_before_subscription() {
        let bus = InProcessEventBus::new(16);

        bus.publish(power_event("Living Room Light", PowerState::On));

        let mut rx = bus.subscribe();

        bus.publish(power_event("Bedroom Lamp", PowerState::On));

        let received = rx.recv().await.unwrap();
        assert_eq!(received.device, "Bedroom Lamp");
    }

    #[tokio::test]
    async fn should_share_the_channel_across_clones() {
        let bus = InProcessEventBus::new(16);
        let mut rx = bus.subscribe();

        let clone = bus.clone();
        clone.publish(power_event("Main Thermostat", PowerState::On));

        let received = rx.recv().await.unwrap();
        assert_eq!(received.device, "Main Thermostat");
    }
}
