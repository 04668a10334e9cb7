//! Composition root.
//!
//! [`App`] owns the page backend, the event bus, and every controller.
//! Nothing in the runtime is global: sources get publisher handles from
//! the app, and the host paces the whole system by calling
//! [`App::tick`] with a monotonic timestamp.
//!
//! Startup is fail-soft: a controller that cannot wire itself (missing
//! element, listener failure) is logged and left disabled, and the rest of
//! the page keeps working.

pub mod helpers;

use std::time::Duration;

use log::{debug, warn};

use crate::controllers::{
    AnimationController, Lifecycle, NavigationController, ScrollController,
};
use crate::events::{EventBus, EventPublisher};
use crate::handlers::dispatcher;
use crate::model::RuntimeConfig;
use crate::page::Page;

/// The assembled runtime: one page backend, one bus, one of each
/// controller.
pub struct App<P: Page> {
    page: P,
    bus: EventBus,
    config: RuntimeConfig,
    nav: Option<NavigationController>,
    scroll: Option<ScrollController>,
    anim: Option<AnimationController>,
    initialized: bool,
}

impl<P: Page> App<P> {
    /// Assemble an uninitialized runtime over a page backend.
    ///
    /// The config is validated (clamped) on the way in.
    pub fn new(page: P, mut config: RuntimeConfig) -> Self {
        config.validate();
        Self {
            page,
            bus: EventBus::new(),
            config,
            nav: None,
            scroll: None,
            anim: None,
            initialized: false,
        }
    }

    /// Publisher handle for event sources.
    pub fn publisher(&self) -> EventPublisher {
        self.bus.publisher()
    }

    /// The page backend.
    pub fn page(&self) -> &P {
        &self.page
    }

    /// The page backend, mutably (hosts wire emitters through this).
    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    /// The validated configuration.
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// The navigation controller, when enabled.
    pub fn navigation(&self) -> Option<&NavigationController> {
        self.nav.as_ref()
    }

    /// The scroll controller, when enabled.
    pub fn scroll(&self) -> Option<&ScrollController> {
        self.scroll.as_ref()
    }

    /// The animation controller, when enabled.
    pub fn animation(&self) -> Option<&AnimationController> {
        self.anim.as_ref()
    }

    /// Construct and start every controller.
    ///
    /// Failures disable the affected feature and are logged, never
    /// propagated: startup cannot take the page down. Calling `init`
    /// again is a no-op.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }

        let mut nav = NavigationController::new(&self.config);
        match nav.start(&mut self.page) {
            Ok(()) => self.nav = Some(nav),
            Err(e) => warn!("navigation disabled: {e}"),
        }

        let mut scroll = ScrollController::new(&self.config);
        match scroll.start(&mut self.page) {
            Ok(()) => self.scroll = Some(scroll),
            Err(e) => warn!("scroll posture disabled: {e}"),
        }

        if self.config.animations_enabled {
            let mut anim = AnimationController::new(&self.config);
            match anim.start(&mut self.page) {
                Ok(()) => self.anim = Some(anim),
                Err(e) => warn!("animations disabled: {e}"),
            }
        } else {
            debug!("animations disabled by config");
        }

        self.initialized = true;
    }

    /// Drain the bus, dispatch, and fire due deferred work.
    ///
    /// `now` is the host's monotonic timestamp; it must never go
    /// backwards.
    pub fn tick(&mut self, now: Duration) {
        let events = self.bus.drain();
        dispatcher::dispatch_events(
            &mut self.page,
            &mut self.nav,
            &mut self.scroll,
            &mut self.anim,
            events,
            now,
        );
        if let Some(nav) = &mut self.nav {
            nav.poll(&mut self.page, now);
        }
    }

    /// Suspend decorative work across all controllers.
    pub fn pause(&mut self) {
        if let Some(nav) = &mut self.nav {
            nav.pause(&mut self.page);
        }
        if let Some(scroll) = &mut self.scroll {
            scroll.pause(&mut self.page);
        }
        if let Some(anim) = &mut self.anim {
            anim.pause(&mut self.page);
        }
    }

    /// Resume after a pause.
    pub fn resume(&mut self) {
        if let Some(nav) = &mut self.nav {
            nav.resume(&mut self.page);
        }
        if let Some(scroll) = &mut self.scroll {
            scroll.resume(&mut self.page);
        }
        if let Some(anim) = &mut self.anim {
            anim.resume(&mut self.page);
        }
    }

    /// Tear everything down.
    ///
    /// Stops and drops every controller (listeners removed, timers
    /// canceled, markers reversed) and discards queued events. Idempotent:
    /// safe to call twice, and safe when `init` never ran or only
    /// partially succeeded.
    pub fn destroy(&mut self) {
        if let Some(mut nav) = self.nav.take() {
            nav.stop(&mut self.page);
        }
        if let Some(mut scroll) = self.scroll.take() {
            scroll.stop(&mut self.page);
        }
        if let Some(mut anim) = self.anim.take() {
            anim.stop(&mut self.page);
        }
        let _ = self.bus.drain();
        self.initialized = false;
        debug!("runtime destroyed");
    }
}
