//! Scroll-posture controller.
//!
//! Samples the (throttled) scroll stream and keeps the header's
//! "scrolled" marker in sync with the posture: strictly past the
//! threshold adds it once, dropping back removes it once. No hysteresis -
//! samples oscillating on the boundary flip the marker each time, which is
//! accepted behavior.

use std::time::Duration;

use log::{debug, trace, warn};

use crate::app::helpers::set_marker;
use crate::controllers::Lifecycle;
use crate::error::RuntimeError;
use crate::model::constants::{CLASS_SCROLLED, SEL_HEADER};
use crate::model::{RuntimeConfig, ScrollPosture};
use crate::page::{ElementId, EventKind, ListenerId, Page};
use crate::timing::Throttle;

/// Header marker toggling driven by scroll offset.
pub struct ScrollController {
    header: Option<ElementId>,
    posture: ScrollPosture,
    threshold: f64,
    throttle: Throttle,
    listeners: Vec<ListenerId>,
}

impl ScrollController {
    /// Create an unwired controller; [`Lifecycle::start`] does the wiring.
    pub fn new(config: &RuntimeConfig) -> Self {
        Self {
            header: None,
            posture: ScrollPosture::default(),
            threshold: config.scroll_threshold_px,
            throttle: Throttle::new(config.scroll_throttle()),
            listeners: Vec::new(),
        }
    }

    /// Current posture.
    pub fn posture(&self) -> ScrollPosture {
        self.posture
    }

    /// Fold in a scroll sample, if the throttle admits it.
    pub fn handle_scroll<P: Page>(&mut self, page: &mut P, now: Duration, offset: f64) {
        let Some(header) = self.header else {
            return;
        };
        if !self.throttle.allow(now) {
            trace!("scroll: sample at {offset}px dropped (cooldown)");
            return;
        }
        if let Some(scrolled) = self.posture.observe(offset, self.threshold) {
            set_marker(page, header, CLASS_SCROLLED, scrolled);
            debug!("scroll: posture flipped, scrolled={scrolled}");
        }
    }
}

impl<P: Page> Lifecycle<P> for ScrollController {
    fn start(&mut self, page: &mut P) -> Result<(), RuntimeError> {
        let header = page.query(SEL_HEADER).ok_or(RuntimeError::ElementNotFound {
            selector: SEL_HEADER,
        })?;
        self.header = Some(header);
        self.listeners.push(page.add_listener(EventKind::Scroll)?);
        Ok(())
    }

    fn pause(&mut self, _page: &mut P) {}

    fn resume(&mut self, _page: &mut P) {}

    fn stop(&mut self, page: &mut P) {
        for id in self.listeners.drain(..) {
            if let Err(e) = page.remove_listener(id) {
                warn!("scroll: listener removal failed: {e}");
            }
        }
        self.throttle.reset();
        if let Some(header) = self.header {
            set_marker(page, header, CLASS_SCROLLED, false);
        }
        self.posture = ScrollPosture::default();
    }
}
