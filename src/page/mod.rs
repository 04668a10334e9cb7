//! The injected page capability.
//!
//! Controllers never touch a real UI tree. Everything they need from the
//! outside world - element lookup, class-list mutation, listener
//! registration, geometry, scroll locking - goes through the [`Page`]
//! trait. Production hosts implement it over their own surface; tests and
//! headless runs use the in-memory [`SimPage`] backend.
//!
//! # Module Structure
//!
//! - this file: the capability trait and its handle/error types
//! - [`sim`]: `SimPage`, the simulated backend

pub mod sim;

pub use sim::SimPage;

use thiserror::Error;

/// Opaque handle to an element, minted by the page backend.
///
/// Handles are plain copyable values; they carry no lifetime and stay
/// valid for the life of the backend that minted them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub(crate) u32);

/// Opaque handle to a registered listener.
///
/// Returned by [`Page::add_listener`]; the owning controller keeps it and
/// releases it exactly once on teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u32);

/// Document-level event streams a controller can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Pointer clicks anywhere on the document.
    Click,
    /// Vertical scroll offset changes.
    Scroll,
    /// Viewport resizes.
    Resize,
    /// Page visibility changes (tab switch, minimize).
    Visibility,
}

/// Errors from the listener surface of a page backend.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    /// An element handle did not belong to this backend.
    #[error("unknown element handle")]
    UnknownElement,

    /// A listener handle was already removed or never registered.
    #[error("unknown listener handle")]
    UnknownListener,
}

/// Narrow interface over the host UI surface.
///
/// Class and geometry operations are assumed synchronous and reliable
/// (misses are ignored); the listener surface is fallible and its errors
/// are caught and logged by callers, never propagated further.
pub trait Page {
    /// First element matching `selector`, if any.
    fn query(&self, selector: &str) -> Option<ElementId>;

    /// Every element matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<ElementId>;

    /// Add a marker class. Adding a class twice is a no-op.
    fn add_class(&mut self, el: ElementId, class: &str);

    /// Remove a marker class. Removing an absent class is a no-op.
    fn remove_class(&mut self, el: ElementId, class: &str);

    /// True when the element currently carries the class.
    fn has_class(&self, el: ElementId, class: &str) -> bool;

    /// True when `target` is `ancestor` itself or one of its descendants.
    fn contains(&self, ancestor: ElementId, target: ElementId) -> bool;

    /// Current vertical scroll offset in pixels.
    fn scroll_offset(&self) -> f64;

    /// Viewport width in pixels.
    fn viewport_width(&self) -> f64;

    /// Viewport height in pixels.
    fn viewport_height(&self) -> f64;

    /// Document-space top edge of an element in pixels.
    fn element_top(&self, el: ElementId) -> f64;

    /// Apply a vertical translation in pixels (0 clears it).
    fn set_translate_y(&mut self, el: ElementId, px: f64);

    /// Engage or release document scroll suppression. Idempotent.
    fn set_scroll_lock(&mut self, locked: bool);

    /// True while document scrolling is suppressed.
    fn scroll_locked(&self) -> bool;

    /// Subscribe to a document-level event stream.
    fn add_listener(&mut self, kind: EventKind) -> Result<ListenerId, PageError>;

    /// Release a listener registered earlier.
    fn remove_listener(&mut self, id: ListenerId) -> Result<(), PageError>;

    /// Number of live listener registrations.
    fn listener_count(&self) -> usize;
}
