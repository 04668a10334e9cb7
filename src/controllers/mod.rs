//! Controller layer: event-driven state machines over the page capability.
//!
//! Each controller owns one slice of page behavior and implements the
//! [`Lifecycle`] capability so the composition root can drive all of them
//! uniformly - there is no "call it if it happens to exist" dispatch.
//!
//! # Module Structure
//!
//! - [`navigation`]: mobile menu state machine
//! - [`scroll`]: scroll-posture marker toggling
//! - [`animation`]: reveal/parallax orchestration

pub mod animation;
pub mod navigation;
pub mod scroll;

pub use animation::AnimationController;
pub use navigation::NavigationController;
pub use scroll::ScrollController;

use crate::error::RuntimeError;
use crate::page::Page;

/// Uniform lifecycle capability implemented by every controller.
pub trait Lifecycle<P: Page> {
    /// Wire the controller to the page: resolve elements, register
    /// listeners, apply any initial markers.
    ///
    /// An error means the feature stays disabled; the caller logs it and
    /// moves on. `start` cleans up after itself on failure, so a failed
    /// controller holds no listeners.
    fn start(&mut self, page: &mut P) -> Result<(), RuntimeError>;

    /// Suspend decorative work. Idempotent.
    fn pause(&mut self, page: &mut P);

    /// Resume after a pause. Idempotent.
    fn resume(&mut self, page: &mut P);

    /// Tear down: remove listeners, cancel timers, reverse applied
    /// markers, reset state. Idempotent, and safe when `start` never ran
    /// or failed partway.
    fn stop(&mut self, page: &mut P);
}
