//! Thread-safe event bus using mpsc channels.
//!
//! The bus provides a simple publish/subscribe mechanism where:
//! - Any thread can publish events via `EventPublisher::publish()`
//! - The main thread polls for events via `EventBus::drain()`
//!
//! This is pure Rust with no external dependencies beyond std.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::types::PageEvent;

/// Thread-safe event bus for runtime-wide event distribution.
///
/// Uses a multi-producer, single-consumer (mpsc) channel internally.
/// Multiple publishers can send events concurrently, and a single
/// consumer (the tick loop) receives and processes them.
///
/// # Example
///
/// ```
/// use limen::events::{EventBus, PageEvent};
///
/// let bus = EventBus::new();
/// let publisher = bus.publisher();
///
/// publisher.publish(PageEvent::VisibilityChanged { hidden: true });
///
/// let events = bus.drain();
/// assert_eq!(events.len(), 1);
/// ```
pub struct EventBus {
    sender: Sender<PageEvent>,
    receiver: Receiver<PageEvent>,
}

impl EventBus {
    /// Create a new event bus.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Get a publisher handle that can be cloned and sent to other threads.
    ///
    /// Publishers are cheap to clone and thread-safe. Each source that needs
    /// to emit events should hold its own publisher.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Try to receive the next event without blocking.
    ///
    /// Returns `Some(event)` if an event is available, `None` otherwise.
    /// This should be called from the tick loop.
    pub fn try_recv(&self) -> Option<PageEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                // All senders dropped - this shouldn't happen in normal operation
                // but we handle it gracefully
                None
            }
        }
    }

    /// Drain all pending events into a Vec.
    ///
    /// This is the preferred method for processing events in the tick loop.
    /// It collects all available events at once, allowing batch processing.
    pub fn drain(&self) -> Vec<PageEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable, thread-safe event publisher.
///
/// Multiple sources can hold publishers and send events concurrently.
/// Cloning a publisher is cheap (just clones the internal Sender).
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<PageEvent>,
}

impl EventPublisher {
    /// Publish an event to the bus.
    ///
    /// This is non-blocking and thread-safe. The event will be queued
    /// and processed on the next drain cycle in the tick loop.
    ///
    /// If the receiver has been dropped (runtime torn down), the send
    /// silently fails - this is intentional.
    pub fn publish(&self, event: PageEvent) {
        // Ignore send errors - receiver dropped means the runtime is gone
        let _ = self.sender.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::ElementId;

    #[test]
    fn test_create_bus() {
        let bus = EventBus::new();
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_publish_and_receive_single_event() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(PageEvent::Scrolled { offset: 42.0 });

        let events = bus.drain();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0], PageEvent::Scrolled { offset: 42.0 });
    }

    #[test]
    fn test_publish_and_receive_multiple_events() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(PageEvent::Scrolled { offset: 10.0 });
        publisher.publish(PageEvent::Resized { width: 1280.0 });
        publisher.publish(PageEvent::VisibilityChanged { hidden: true });

        let events = bus.drain();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], PageEvent::Scrolled { offset: 10.0 });
        assert_eq!(events[1], PageEvent::Resized { width: 1280.0 });
        assert_eq!(events[2], PageEvent::VisibilityChanged { hidden: true });
    }

    #[test]
    fn test_drain_empties_queue() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(PageEvent::Scrolled { offset: 1.0 });
        publisher.publish(PageEvent::Scrolled { offset: 2.0 });

        let first_drain = bus.drain();
        assert_eq!(first_drain.len(), 2);

        let second_drain = bus.drain();
        assert!(second_drain.is_empty());
    }

    #[test]
    fn test_multiple_publishers() {
        let bus = EventBus::new();
        let pub1 = bus.publisher();
        let pub2 = bus.publisher();
        let pub3 = bus.publisher();

        pub1.publish(PageEvent::Scrolled { offset: 1.0 });
        pub2.publish(PageEvent::Resized { width: 800.0 });
        pub3.publish(PageEvent::VisibilityChanged { hidden: false });

        let events = bus.drain();
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn test_publisher_clone_is_independent() {
        let bus = EventBus::new();
        let pub1 = bus.publisher();
        let pub2 = pub1.clone();

        pub1.publish(PageEvent::Scrolled { offset: 1.0 });
        pub2.publish(PageEvent::Scrolled { offset: 2.0 });

        let events = bus.drain();
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_try_recv_returns_none_when_empty() {
        let bus = EventBus::new();
        assert!(bus.try_recv().is_none());
    }

    #[test]
    fn test_try_recv_returns_events_in_order() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(PageEvent::Scrolled { offset: 1.0 });
        publisher.publish(PageEvent::Scrolled { offset: 2.0 });

        assert_eq!(bus.try_recv(), Some(PageEvent::Scrolled { offset: 1.0 }));
        assert_eq!(bus.try_recv(), Some(PageEvent::Scrolled { offset: 2.0 }));
        assert_eq!(bus.try_recv(), None);
    }

    #[test]
    fn test_default_creates_new_bus() {
        let bus = EventBus::default();
        let publisher = bus.publisher();

        publisher.publish(PageEvent::VisibilityChanged { hidden: true });
        assert_eq!(bus.drain().len(), 1);
    }

    #[test]
    fn test_events_preserve_data() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        let test_events = vec![
            PageEvent::Clicked {
                target: ElementId(7),
            },
            PageEvent::Scrolled { offset: 120.0 },
            PageEvent::Resized { width: 375.0 },
            PageEvent::VisibilityChanged { hidden: false },
        ];

        for event in &test_events {
            publisher.publish(event.clone());
        }

        let received = bus.drain();
        assert_eq!(received, test_events);
    }
}
