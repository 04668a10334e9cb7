//! Page events for inter-module communication.
//!
//! These events represent raw occurrences on the page surface that can be
//! published by any backend and handled by the event dispatcher.
//! This module is pure Rust with no backend dependencies, making it fully testable.

use crate::page::ElementId;

/// Page-level events for decoupled communication between modules.
///
/// Events flow from the page backend through the EventBus to the
/// dispatcher, which routes them to the owning controllers.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    // === Pointer Events ===
    /// A click landed somewhere on the document; `target` is the innermost
    /// element hit. Controllers decide what the target means (toggle, link,
    /// outside click).
    Clicked {
        /// Innermost element under the pointer.
        target: ElementId,
    },

    // === Continuous Events ===
    /// The document scroll offset changed.
    Scrolled {
        /// New vertical offset in pixels.
        offset: f64,
    },

    /// The viewport was resized.
    Resized {
        /// New viewport width in pixels.
        width: f64,
    },

    // === Lifecycle Events ===
    /// The page became hidden or visible again (tab switch, minimize).
    VisibilityChanged {
        /// True when the page is no longer visible.
        hidden: bool,
    },
}

impl PageEvent {
    /// Returns true if this event arrives in high-frequency bursts and is
    /// routed through a rate limiter before any controller reacts.
    pub fn is_rate_limited(&self) -> bool {
        matches!(
            self,
            PageEvent::Scrolled { .. } | PageEvent::Resized { .. }
        )
    }

    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            PageEvent::Clicked { .. } => "Document click",
            PageEvent::Scrolled { .. } => "Scroll offset changed",
            PageEvent::Resized { .. } => "Viewport resized",
            PageEvent::VisibilityChanged { .. } => "Page visibility changed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_for_continuous_events() {
        assert!(PageEvent::Scrolled { offset: 10.0 }.is_rate_limited());
        assert!(PageEvent::Resized { width: 1024.0 }.is_rate_limited());
    }

    #[test]
    fn test_not_rate_limited_for_discrete_events() {
        assert!(!PageEvent::Clicked {
            target: ElementId(0)
        }
        .is_rate_limited());
        assert!(!PageEvent::VisibilityChanged { hidden: true }.is_rate_limited());
    }

    #[test]
    fn test_event_equality() {
        assert_eq!(
            PageEvent::Scrolled { offset: 50.0 },
            PageEvent::Scrolled { offset: 50.0 }
        );
        assert_ne!(
            PageEvent::Scrolled { offset: 50.0 },
            PageEvent::Scrolled { offset: 51.0 }
        );
    }

    #[test]
    fn test_event_clone() {
        let event = PageEvent::Resized { width: 800.0 };
        let cloned = event.clone();
        assert_eq!(event, cloned);
    }

    #[test]
    fn test_event_debug() {
        let event = PageEvent::VisibilityChanged { hidden: false };
        let debug_str = format!("{:?}", event);
        assert!(debug_str.contains("VisibilityChanged"));
    }

    #[test]
    fn test_all_events_have_descriptions() {
        let events = [
            PageEvent::Clicked {
                target: ElementId(3),
            },
            PageEvent::Scrolled { offset: 0.0 },
            PageEvent::Resized { width: 375.0 },
            PageEvent::VisibilityChanged { hidden: true },
        ];

        for event in events {
            assert!(!event.description().is_empty());
        }
    }
}
