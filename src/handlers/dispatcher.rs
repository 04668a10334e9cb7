//! Event dispatcher for routing page events.
//!
//! The dispatcher receives events drained from the event bus and forwards
//! each to the controllers that own it. It is called from the tick loop
//! and processes all pending events in batch.
//!
//! # Architecture
//!
//! ```text
//! EventBus::drain() → dispatch_events() → controller handlers
//! ```
//!
//! Disabled controllers are simply `None`; their events fall through.

use std::time::Duration;

use log::trace;

use crate::controllers::{
    AnimationController, Lifecycle, NavigationController, ScrollController,
};
use crate::events::PageEvent;
use crate::page::Page;

/// Dispatch a batch of drained events.
///
/// This should be called once per tick with everything the bus held.
pub fn dispatch_events<P: Page>(
    page: &mut P,
    nav: &mut Option<NavigationController>,
    scroll: &mut Option<ScrollController>,
    anim: &mut Option<AnimationController>,
    events: Vec<PageEvent>,
    now: Duration,
) {
    for event in events {
        dispatch_single_event(page, nav, scroll, anim, event, now);
    }
}

/// Dispatch a single event.
fn dispatch_single_event<P: Page>(
    page: &mut P,
    nav: &mut Option<NavigationController>,
    scroll: &mut Option<ScrollController>,
    anim: &mut Option<AnimationController>,
    event: PageEvent,
    now: Duration,
) {
    trace!("dispatch: {}", event.description());

    match event {
        PageEvent::Clicked { target } => {
            if let Some(nav) = nav {
                nav.handle_click(page, target);
            }
        }

        PageEvent::Scrolled { offset } => {
            // Both consumers sample the same stream through their own throttles
            if let Some(scroll) = scroll {
                scroll.handle_scroll(page, now, offset);
            }
            if let Some(anim) = anim {
                anim.handle_scroll(page, now, offset);
            }
        }

        PageEvent::Resized { width } => {
            if let Some(nav) = nav {
                nav.handle_resize(now, width);
            }
        }

        PageEvent::VisibilityChanged { hidden } => {
            if let Some(anim) = anim {
                if hidden {
                    anim.pause(page);
                } else {
                    anim.resume(page);
                }
            }
        }
    }
}
