//! Reveal and parallax orchestration.
//!
//! The manual animation engine: reveal targets gain their marker once
//! their top edge enters the viewport band, parallax targets track the
//! (throttled) scroll offset with a vertical translate. When the host
//! delegates to an external engine, this controller reduces to a root
//! marker class and does nothing per-frame.
//!
//! Pausing (directly or via page visibility) applies a root marker the
//! stylesheet uses to freeze decorative animation; revealed markers are
//! left in place so nothing flashes on resume.

use std::time::Duration;

use log::{debug, trace, warn};

use crate::app::helpers::{clear_markers, set_marker};
use crate::controllers::Lifecycle;
use crate::error::RuntimeError;
use crate::model::constants::{
    CLASS_ANIMATIONS_PAUSED, CLASS_ENGINE_MANAGED, CLASS_REVEALED, SEL_PARALLAX, SEL_REVEAL,
    SEL_ROOT,
};
use crate::model::RuntimeConfig;
use crate::page::{ElementId, EventKind, ListenerId, Page};
use crate::timing::Throttle;
use crate::{parallax_shift, reveal_visible};

/// Decorative animation controller.
pub struct AnimationController {
    root: Option<ElementId>,
    reveal_targets: Vec<ElementId>,
    parallax_targets: Vec<ElementId>,
    throttle: Throttle,
    margin: f64,
    factor: f64,
    external: bool,
    paused: bool,
    listeners: Vec<ListenerId>,
}

impl AnimationController {
    /// Create an unwired controller; [`Lifecycle::start`] does the wiring.
    pub fn new(config: &RuntimeConfig) -> Self {
        Self {
            root: None,
            reveal_targets: Vec::new(),
            parallax_targets: Vec::new(),
            throttle: Throttle::new(config.reveal_throttle()),
            margin: config.reveal_margin,
            factor: config.parallax_factor,
            external: config.external_engine,
            paused: false,
            listeners: Vec::new(),
        }
    }

    /// True while decorative work is suspended.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Fold in a scroll sample, if the throttle admits it.
    pub fn handle_scroll<P: Page>(&mut self, page: &mut P, now: Duration, offset: f64) {
        if self.root.is_none() || self.external || self.paused {
            return;
        }
        if !self.throttle.allow(now) {
            trace!("anim: sample at {offset}px dropped (cooldown)");
            return;
        }
        self.apply(page, offset);
    }

    fn apply<P: Page>(&mut self, page: &mut P, offset: f64) {
        let viewport_h = page.viewport_height();
        for target in &self.reveal_targets {
            if page.has_class(*target, CLASS_REVEALED) {
                continue;
            }
            if reveal_visible(page.element_top(*target), offset, viewport_h, self.margin) {
                page.add_class(*target, CLASS_REVEALED);
                debug!("anim: revealed {target:?}");
            }
        }
        for target in &self.parallax_targets {
            page.set_translate_y(*target, parallax_shift(offset, self.factor));
        }
    }
}

impl<P: Page> Lifecycle<P> for AnimationController {
    fn start(&mut self, page: &mut P) -> Result<(), RuntimeError> {
        let root = page.query(SEL_ROOT).ok_or(RuntimeError::ElementNotFound {
            selector: SEL_ROOT,
        })?;
        self.root = Some(root);

        if self.external {
            // Hand off to the host engine; the marker is all it needs.
            set_marker(page, root, CLASS_ENGINE_MANAGED, true);
            debug!("anim: delegated to external engine");
            return Ok(());
        }

        self.reveal_targets = page.query_all(SEL_REVEAL);
        self.parallax_targets = page.query_all(SEL_PARALLAX);

        for kind in [EventKind::Scroll, EventKind::Visibility] {
            match page.add_listener(kind) {
                Ok(id) => self.listeners.push(id),
                Err(e) => {
                    for id in self.listeners.drain(..) {
                        let _ = page.remove_listener(id);
                    }
                    return Err(e.into());
                }
            }
        }

        // Initial pass so above-the-fold targets reveal without scrolling
        let offset = page.scroll_offset();
        self.apply(page, offset);
        Ok(())
    }

    fn pause(&mut self, page: &mut P) {
        let Some(root) = self.root else {
            return;
        };
        if self.external || self.paused {
            return;
        }
        self.paused = true;
        set_marker(page, root, CLASS_ANIMATIONS_PAUSED, true);
        debug!("anim: paused");
    }

    fn resume(&mut self, page: &mut P) {
        let Some(root) = self.root else {
            return;
        };
        if !self.paused {
            return;
        }
        self.paused = false;
        set_marker(page, root, CLASS_ANIMATIONS_PAUSED, false);
        debug!("anim: resumed");
    }

    fn stop(&mut self, page: &mut P) {
        for id in self.listeners.drain(..) {
            if let Err(e) = page.remove_listener(id) {
                warn!("anim: listener removal failed: {e}");
            }
        }
        self.throttle.reset();
        self.paused = false;

        clear_markers(page, &self.reveal_targets, CLASS_REVEALED);
        for target in &self.parallax_targets {
            page.set_translate_y(*target, 0.0);
        }
        if let Some(root) = self.root {
            set_marker(page, root, CLASS_ANIMATIONS_PAUSED, false);
            set_marker(page, root, CLASS_ENGINE_MANAGED, false);
        }
    }
}
