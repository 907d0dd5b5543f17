//! Health events from the radio and contact drivers
//!
//! Drivers never touch the health model directly. They are generic over
//! [`HealthEvents`], which is implemented both by the model itself and by
//! [`HealthEventSender`], the producer half of a bounded queue that the
//! owning loop drains with [`HealthModel::apply_events`].
//!
//! [`HealthModel::apply_events`]: super::HealthModel::apply_events

use heapless::spsc::{Consumer, Producer, Queue};

use super::channel::Link;

/// Default queue size (holds one less event than this)
pub const HEALTH_QUEUE_SIZE: usize = 8;

/// A confirming signal seen by a driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HealthEvent {
    /// Which link the signal belongs to
    pub link: Link,
    /// Clock reading when the signal was seen (ms)
    pub at_ms: u64,
}

impl HealthEvent {
    /// Wireless sync packet received
    pub const fn wireless(at_ms: u64) -> Self {
        Self {
            link: Link::Wireless,
            at_ms,
        }
    }

    /// Physical contact pulse detected
    pub const fn contact(at_ms: u64) -> Self {
        Self {
            link: Link::Contact,
            at_ms,
        }
    }
}

/// Health event capability handed to the external drivers
pub trait HealthEvents {
    /// A synchronization packet was received at `at_ms`
    fn reset_wireless(&mut self, at_ms: u64);

    /// A contact pulse was detected at `at_ms`
    fn reset_contact(&mut self, at_ms: u64);
}

/// Bounded event queue between drivers and the health model
pub type HealthEventQueue<const N: usize = HEALTH_QUEUE_SIZE> = Queue<HealthEvent, N>;

/// Receiving half of a [`HealthEventQueue`]
pub type HealthEventReceiver<'q, const N: usize = HEALTH_QUEUE_SIZE> =
    Consumer<'q, HealthEvent, N>;

/// Sending half of a [`HealthEventQueue`]
pub struct HealthEventSender<'q, const N: usize = HEALTH_QUEUE_SIZE> {
    producer: Producer<'q, HealthEvent, N>,
    /// Events lost to a full queue
    dropped: u32,
}

impl<'q, const N: usize> HealthEventSender<'q, N> {
    /// Wrap the producer half of a split queue
    pub fn new(producer: Producer<'q, HealthEvent, N>) -> Self {
        Self {
            producer,
            dropped: 0,
        }
    }

    /// Queue an event
    ///
    /// Returns the event back if the queue is full.
    pub fn send(&mut self, event: HealthEvent) -> Result<(), HealthEvent> {
        self.producer.enqueue(event).map_err(|event| {
            self.dropped = self.dropped.saturating_add(1);
            warn!(
                "health queue full, dropping {} event at {}",
                event.link.name(),
                event.at_ms
            );
            event
        })
    }

    /// Number of events dropped so far
    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}

impl<const N: usize> HealthEvents for HealthEventSender<'_, N> {
    fn reset_wireless(&mut self, at_ms: u64) {
        // A dropped sync is recovered by the next one
        let _ = self.send(HealthEvent::wireless(at_ms));
    }

    fn reset_contact(&mut self, at_ms: u64) {
        let _ = self.send(HealthEvent::contact(at_ms));
    }
}

/// Split a queue into a sender for the drivers and a receiver for the model
pub fn split<const N: usize>(
    queue: &mut HealthEventQueue<N>,
) -> (HealthEventSender<'_, N>, HealthEventReceiver<'_, N>) {
    let (producer, consumer) = queue.split();
    (HealthEventSender::new(producer), consumer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_queues_events_in_order() {
        let mut queue = HealthEventQueue::<4>::new();
        let (mut tx, mut rx) = split(&mut queue);

        tx.reset_wireless(10);
        tx.reset_contact(20);

        assert_eq!(rx.dequeue(), Some(HealthEvent::wireless(10)));
        assert_eq!(rx.dequeue(), Some(HealthEvent::contact(20)));
        assert_eq!(rx.dequeue(), None);
    }

    #[test]
    fn test_full_queue_drops_event() {
        // Capacity is N - 1
        let mut queue = HealthEventQueue::<3>::new();
        let (mut tx, _rx) = split(&mut queue);

        assert!(tx.send(HealthEvent::wireless(1)).is_ok());
        assert!(tx.send(HealthEvent::wireless(2)).is_ok());
        assert_eq!(
            tx.send(HealthEvent::contact(3)),
            Err(HealthEvent::contact(3))
        );
        assert_eq!(tx.dropped(), 1);
    }
}
