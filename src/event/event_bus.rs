// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Broadcast channel for appliance events.

use tokio::sync::broadcast;

use super::ApplianceEvent;

const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Fan-out of [`ApplianceEvent`]s to any number of subscribers.
///
/// Publishing never blocks and never fails. A subscriber that falls more
/// than the channel capacity behind gets `RecvError::Lagged` and loses the
/// oldest events; the appliance itself is unaffected.
///
/// # Examples
///
/// ```
/// use aircon_lib::event::{ApplianceEvent, EventBus};
/// use aircon_lib::state::ApplianceState;
///
/// let bus = EventBus::new();
/// let mut rx = bus.subscribe();
///
/// bus.publish(ApplianceEvent::CommandSuppressed {
///     state: ApplianceState::new(),
/// });
/// assert!(rx.try_recv().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<ApplianceEvent>,
}

impl EventBus {
    /// Creates a bus buffering up to 64 events per subscriber.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Creates a bus with a custom per-subscriber buffer.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Returns a receiver for events published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ApplianceEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of live receivers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Publishes an event. Without subscribers the event is dropped.
    pub fn publish(&self, event: ApplianceEvent) {
        // Err only means nobody is listening.
        let _ = self.sender.send(event);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ApplianceState;

    fn suppressed() -> ApplianceEvent {
        ApplianceEvent::CommandSuppressed {
            state: ApplianceState::new(),
        }
    }

    #[test]
    fn subscriber_count_tracks_receivers() {
        let bus = EventBus::new();
        assert_eq!(bus.subscriber_count(), 0);

        let rx = bus.subscribe();
        let clone = bus.clone();
        assert_eq!(clone.subscriber_count(), 1);

        drop(rx);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn publish_without_subscribers_is_silent() {
        EventBus::new().publish(suppressed());
    }

    #[tokio::test]
    async fn every_subscriber_gets_a_copy() {
        let bus = EventBus::with_capacity(4);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(suppressed());

        assert!(matches!(
            rx1.recv().await.unwrap(),
            ApplianceEvent::CommandSuppressed { .. }
        ));
        assert!(matches!(
            rx2.recv().await.unwrap(),
            ApplianceEvent::CommandSuppressed { .. }
        ));
    }
}
