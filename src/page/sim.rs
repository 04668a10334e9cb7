//! In-memory page backend for tests and headless runs.
//!
//! `SimPage` models the minimum surface the runtime needs: a parent-linked
//! element arena, a selector table, document-level listeners, viewport
//! geometry, and a scroll-lock flag. Emitter methods stand in for the host
//! event loop: they publish the corresponding [`PageEvent`] to a connected
//! publisher, but only while a matching listener is registered - so after
//! teardown every emission is inert, exactly like a surface with no
//! listeners attached.

use std::collections::{BTreeSet, HashMap};

use log::debug;

use crate::events::{EventPublisher, PageEvent};

use super::{ElementId, EventKind, ListenerId, Page, PageError};

struct SimElement {
    parent: Option<ElementId>,
    classes: BTreeSet<String>,
    top: f64,
    translate_y: f64,
}

/// Simulated page surface.
pub struct SimPage {
    elements: Vec<SimElement>,
    selectors: HashMap<String, Vec<ElementId>>,
    listeners: Vec<(ListenerId, EventKind)>,
    next_listener: u32,
    scroll_offset: f64,
    viewport_w: f64,
    viewport_h: f64,
    scroll_locked: bool,
    publisher: Option<EventPublisher>,
}

impl SimPage {
    /// Create an empty page with the given viewport.
    pub fn new(viewport_w: f64, viewport_h: f64) -> Self {
        Self {
            elements: Vec::new(),
            selectors: HashMap::new(),
            listeners: Vec::new(),
            next_listener: 0,
            scroll_offset: 0.0,
            viewport_w,
            viewport_h,
            scroll_locked: false,
            publisher: None,
        }
    }

    /// Connect the publisher that emitters deliver into.
    pub fn connect(&mut self, publisher: EventPublisher) {
        self.publisher = Some(publisher);
    }

    /// Add an element reachable under `selector`, optionally parented.
    pub fn add_element(&mut self, selector: &str, parent: Option<ElementId>) -> ElementId {
        let id = ElementId(self.elements.len() as u32);
        self.elements.push(SimElement {
            parent,
            classes: BTreeSet::new(),
            top: 0.0,
            translate_y: 0.0,
        });
        self.selectors
            .entry(selector.to_string())
            .or_default()
            .push(id);
        id
    }

    /// Position an element's document-space top edge.
    pub fn set_element_top(&mut self, el: ElementId, top: f64) {
        if let Some(e) = self.elements.get_mut(el.0 as usize) {
            e.top = top;
        }
    }

    /// Current classes of an element, for test inspection.
    pub fn classes(&self, el: ElementId) -> Vec<String> {
        self.elements
            .get(el.0 as usize)
            .map(|e| e.classes.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Current vertical translation of an element, for test inspection.
    pub fn translate_y(&self, el: ElementId) -> f64 {
        self.elements
            .get(el.0 as usize)
            .map(|e| e.translate_y)
            .unwrap_or(0.0)
    }

    // === Emitters (stand-ins for the host event loop) ===

    /// Deliver a click whose innermost target is `target`.
    pub fn emit_click(&self, target: ElementId) {
        self.emit(EventKind::Click, PageEvent::Clicked { target });
    }

    /// Move the scroll offset and deliver the scroll event.
    pub fn set_scroll(&mut self, offset: f64) {
        self.scroll_offset = offset;
        self.emit(EventKind::Scroll, PageEvent::Scrolled { offset });
    }

    /// Resize the viewport width and deliver the resize event.
    pub fn emit_resize(&mut self, width: f64) {
        self.viewport_w = width;
        self.emit(EventKind::Resize, PageEvent::Resized { width });
    }

    /// Deliver a visibility change.
    pub fn emit_visibility(&self, hidden: bool) {
        self.emit(EventKind::Visibility, PageEvent::VisibilityChanged { hidden });
    }

    fn emit(&self, kind: EventKind, event: PageEvent) {
        if !self.listeners.iter().any(|(_, k)| *k == kind) {
            debug!("sim: dropping {} (no listener)", event.description());
            return;
        }
        if let Some(publisher) = &self.publisher {
            publisher.publish(event);
        }
    }
}

impl Page for SimPage {
    fn query(&self, selector: &str) -> Option<ElementId> {
        self.selectors.get(selector).and_then(|v| v.first().copied())
    }

    fn query_all(&self, selector: &str) -> Vec<ElementId> {
        self.selectors.get(selector).cloned().unwrap_or_default()
    }

    fn add_class(&mut self, el: ElementId, class: &str) {
        if let Some(e) = self.elements.get_mut(el.0 as usize) {
            e.classes.insert(class.to_string());
        }
    }

    fn remove_class(&mut self, el: ElementId, class: &str) {
        if let Some(e) = self.elements.get_mut(el.0 as usize) {
            e.classes.remove(class);
        }
    }

    fn has_class(&self, el: ElementId, class: &str) -> bool {
        self.elements
            .get(el.0 as usize)
            .is_some_and(|e| e.classes.contains(class))
    }

    fn contains(&self, ancestor: ElementId, target: ElementId) -> bool {
        let mut cursor = Some(target);
        while let Some(el) = cursor {
            if el == ancestor {
                return true;
            }
            cursor = self.elements.get(el.0 as usize).and_then(|e| e.parent);
        }
        false
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_w
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_h
    }

    fn element_top(&self, el: ElementId) -> f64 {
        self.elements
            .get(el.0 as usize)
            .map(|e| e.top + e.translate_y)
            .unwrap_or(0.0)
    }

    fn set_translate_y(&mut self, el: ElementId, px: f64) {
        if let Some(e) = self.elements.get_mut(el.0 as usize) {
            e.translate_y = px;
        }
    }

    fn set_scroll_lock(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    fn add_listener(&mut self, kind: EventKind) -> Result<ListenerId, PageError> {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, kind));
        Ok(id)
    }

    fn remove_listener(&mut self, id: ListenerId) -> Result<(), PageError> {
        let before = self.listeners.len();
        self.listeners.retain(|(l, _)| *l != id);
        if self.listeners.len() == before {
            return Err(PageError::UnknownListener);
        }
        Ok(())
    }

    fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
