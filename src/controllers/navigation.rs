//! Mobile navigation menu controller.
//!
//! A two-state machine (`Closed`/`Open`) driven by document clicks and
//! debounced resizes:
//!
//! | Event | Precondition | New state |
//! |---|---|---|
//! | click inside toggle | any | flipped |
//! | click inside a nav link | Open | Closed |
//! | click outside navbar and toggle | Open | Closed |
//! | resize above the tablet breakpoint | Open | Closed |
//!
//! Opening applies marker classes to the panel and the toggle and
//! suppresses document scroll; closing reverses both. Closing an already
//! closed menu is a no-op.

use std::time::Duration;

use log::{debug, trace, warn};

use crate::app::helpers::set_marker;
use crate::controllers::Lifecycle;
use crate::error::RuntimeError;
use crate::model::constants::{
    CLASS_MENU_OPEN, CLASS_TOGGLE_ACTIVE, SEL_NAVBAR, SEL_NAV_LINK, SEL_NAV_TOGGLE,
};
use crate::model::{MenuState, RuntimeConfig};
use crate::page::{ElementId, EventKind, ListenerId, Page};
use crate::timing::Debounce;

/// Slide-out menu state machine.
pub struct NavigationController {
    navbar: Option<ElementId>,
    toggle: Option<ElementId>,
    links: Vec<ElementId>,
    state: MenuState,
    breakpoint: f64,
    resize: Debounce<f64>,
    listeners: Vec<ListenerId>,
}

impl NavigationController {
    /// Create an unwired controller; [`Lifecycle::start`] does the wiring.
    pub fn new(config: &RuntimeConfig) -> Self {
        Self {
            navbar: None,
            toggle: None,
            links: Vec::new(),
            state: MenuState::Closed,
            breakpoint: config.tablet_breakpoint_px,
            resize: Debounce::new(config.resize_debounce()),
            listeners: Vec::new(),
        }
    }

    /// Current menu state.
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Route a document-level click.
    ///
    /// Runs on every click, so it must tolerate a closed menu (no-op) and
    /// clicks landing anywhere on the page.
    pub fn handle_click<P: Page>(&mut self, page: &mut P, target: ElementId) {
        let (Some(navbar), Some(toggle)) = (self.navbar, self.toggle) else {
            return;
        };

        if page.contains(toggle, target) {
            match self.state {
                MenuState::Closed => self.open(page),
                MenuState::Open => self.close(page),
            }
            return;
        }

        if !self.state.is_open() {
            return;
        }

        if self.links.iter().any(|link| page.contains(*link, target)) {
            trace!("nav: link activated, closing");
            self.close(page);
        } else if !page.contains(navbar, target) {
            trace!("nav: outside click, closing");
            self.close(page);
        }
    }

    /// Record a resize sample; the breakpoint rule runs on the trailing
    /// edge once the stream goes quiet.
    pub fn handle_resize(&mut self, now: Duration, width: f64) {
        self.resize.call(now, width);
    }

    /// Fire any due deferred work.
    pub fn poll<P: Page>(&mut self, page: &mut P, now: Duration) {
        if let Some(width) = self.resize.poll(now) {
            if width > self.breakpoint && self.state.is_open() {
                debug!("nav: viewport {width}px past breakpoint, closing");
                self.close(page);
            }
        }
    }

    fn open<P: Page>(&mut self, page: &mut P) {
        if self.state.is_open() {
            return;
        }
        let (Some(navbar), Some(toggle)) = (self.navbar, self.toggle) else {
            return;
        };
        self.state = MenuState::Open;
        set_marker(page, navbar, CLASS_MENU_OPEN, true);
        set_marker(page, toggle, CLASS_TOGGLE_ACTIVE, true);
        page.set_scroll_lock(true);
        debug!("nav: open");
    }

    fn close<P: Page>(&mut self, page: &mut P) {
        if !self.state.is_open() {
            return;
        }
        self.state = MenuState::Closed;
        if let Some(navbar) = self.navbar {
            set_marker(page, navbar, CLASS_MENU_OPEN, false);
        }
        if let Some(toggle) = self.toggle {
            set_marker(page, toggle, CLASS_TOGGLE_ACTIVE, false);
        }
        page.set_scroll_lock(false);
        debug!("nav: closed");
    }

    fn unregister_all<P: Page>(&mut self, page: &mut P) {
        for id in self.listeners.drain(..) {
            if let Err(e) = page.remove_listener(id) {
                warn!("nav: listener removal failed: {e}");
            }
        }
    }
}

impl<P: Page> Lifecycle<P> for NavigationController {
    fn start(&mut self, page: &mut P) -> Result<(), RuntimeError> {
        let navbar = page
            .query(SEL_NAVBAR)
            .ok_or(RuntimeError::ElementNotFound {
                selector: SEL_NAVBAR,
            })?;
        let toggle = page
            .query(SEL_NAV_TOGGLE)
            .ok_or(RuntimeError::ElementNotFound {
                selector: SEL_NAV_TOGGLE,
            })?;

        self.navbar = Some(navbar);
        self.toggle = Some(toggle);
        self.links = page.query_all(SEL_NAV_LINK);

        for kind in [EventKind::Click, EventKind::Resize] {
            match page.add_listener(kind) {
                Ok(id) => self.listeners.push(id),
                Err(e) => {
                    self.unregister_all(page);
                    return Err(e.into());
                }
            }
        }
        Ok(())
    }

    // The menu stays interactive while the page is backgrounded; pausing
    // only concerns decorative controllers.
    fn pause(&mut self, _page: &mut P) {}

    fn resume(&mut self, _page: &mut P) {}

    fn stop(&mut self, page: &mut P) {
        self.unregister_all(page);
        self.resize.cancel();
        self.close(page);
        self.state = MenuState::Closed;
    }
}
