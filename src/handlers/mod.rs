//! Event handling: routing drained events to their controllers.

pub mod dispatcher;

pub use dispatcher::dispatch_events;
