//! Owned deadline handles.

use std::time::Duration;

/// An owned, scheduled deadline on the injected timeline.
///
/// A handle has exactly one owner and is released exactly once: either
/// `cancel()` consumes it before the deadline, or the owner observes
/// expiry via [`TimerHandle::is_due`] and drops it. Handles are never
/// cloned or shared.
#[derive(Debug)]
pub struct TimerHandle {
    deadline: Duration,
}

impl TimerHandle {
    /// Schedule a deadline `delay` after `now`.
    pub fn schedule(now: Duration, delay: Duration) -> Self {
        Self {
            deadline: now + delay,
        }
    }

    /// True once the deadline has been reached.
    pub fn is_due(&self, now: Duration) -> bool {
        now >= self.deadline
    }

    /// The absolute deadline.
    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    /// Release the handle without firing.
    pub fn cancel(self) {}
}
