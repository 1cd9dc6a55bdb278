//! In-process event bus backed by a tokio broadcast channel.

use tokio::sync::broadcast;

use btsim_domain::event::RadioEvent;

/// Fan-out channel for harnesses that await radio events instead of
/// installing callback observers.
///
/// Publishing succeeds even when there are no active subscribers
/// (the event is simply dropped).
pub struct RadioEventBus {
    sender: broadcast::Sender<RadioEvent>,
}

impl RadioEventBus {
    /// Create a new bus with the given channel capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero (tokio broadcast requirement).
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
    pub fn subscribe(&self) -> broadcast::Receiver<RadioEvent> {
        self.sender.subscribe()
    }

    /// Publish an event to all current subscribers.
    ///
    /// Sending is synchronous: the event is in every subscriber's queue
    /// by the time this returns.
    pub fn publish(&self, event: RadioEvent) {
        // broadcast::send fails only when there are zero receivers,
        // which is fine — the event is simply dropped.
        let _ = self.sender.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use btsim_domain::notification::HardwareNotification;
    use btsim_domain::power::PowerState;

    #[tokio::test]
    async fn should_deliver_event_to_subscriber() {
        let bus = RadioEventBus::new(16);
        let mut rx = bus.subscribe();

        let event = RadioEvent::power_changed(PowerState::On);
        let event_id = event.id;
        bus.publish(event);

        let received = rx.recv().await.unwrap();
        assert_eq!(received.id, event_id);
        assert_eq!(received.kind, HardwareNotification::PowerChanged);
    }

    #[tokio::test]
    async fn should_deliver_event_to_multiple_subscribers() {
        let bus = RadioEventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        let event = RadioEvent::power_changed(PowerState::Off);
        let event_id = event.id;
        bus.publish(event);

        let r1 = rx1.recv().await.unwrap();
        let r2 = rx2.recv().await.unwrap();
        assert_eq!(r1.id, event_id);
        assert_eq!(r2.id, event_id);
    }

    #[test]
    fn should_succeed_when_no_subscribers() {
        let bus = RadioEventBus::new(16);
        bus.publish(RadioEvent::power_changed(PowerState::On));
    }

    #[test]
    fn should_make_event_available_immediately_after_publish() {
        let bus = RadioEventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(RadioEvent::power_changed(PowerState::On));

        let received = rx.try_recv().unwrap();
        assert_eq!(received.power, PowerState::On);
    }

    #[tokio::test]
    async fn should_not_deliver_events_published_before_subscription() {
        let bus = RadioEventBus::new(16);

        bus.publish(RadioEvent::power_changed(PowerState::On));

        let mut rx = bus.subscribe();

        let later = RadioEvent::power_changed(PowerState::Off);
        let later_id = later.id;
        bus.publish(later);

        let received = rx.recv().await.unwrap();
        assert_eq!(received.id, later_id);
    }
}
