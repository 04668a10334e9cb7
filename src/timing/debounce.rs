//! Trailing-edge debouncing.

use std::time::Duration;

use super::timer::TimerHandle;

/// Collapse a burst of calls into one trailing execution.
///
/// Each [`Debounce::call`] cancels any outstanding schedule and arms a new
/// one `wait` in the future carrying the latest payload; earlier payloads
/// in the burst are discarded, never queued. [`Debounce::poll`] yields the
/// surviving payload once a quiet period of `wait` has elapsed.
///
/// Invariant: at most one pending timer exists at any time. The pending
/// slot owns its [`TimerHandle`]; replacement cancels the old handle,
/// firing consumes it.
///
/// The payload type is the "arguments" of the wrapped action - the owner
/// applies the action at the poll site, so callability is a compile-time
/// property rather than a runtime check.
pub struct Debounce<T> {
    wait: Duration,
    pending: Option<(TimerHandle, T)>,
}

impl<T> Debounce<T> {
    /// Create a debouncer with the given quiet-period length.
    ///
    /// A zero `wait` is allowed: the schedule is due immediately and fires
    /// on the next poll.
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    /// Record a call, replacing any outstanding schedule.
    pub fn call(&mut self, now: Duration, payload: T) {
        if let Some((timer, _)) = self.pending.take() {
            timer.cancel();
        }
        self.pending = Some((TimerHandle::schedule(now, self.wait), payload));
    }

    /// Fire the trailing edge if the quiet period has elapsed.
    ///
    /// Returns the latest payload at most once per burst; the consumed
    /// schedule releases its timer.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        match self.pending.take() {
            Some((timer, payload)) if timer.is_due(now) => Some(payload),
            other => {
                self.pending = other;
                None
            }
        }
    }

    /// Drop any outstanding schedule. Idempotent; used on teardown.
    pub fn cancel(&mut self) {
        if let Some((timer, _)) = self.pending.take() {
            timer.cancel();
        }
    }

    /// True while a trailing execution is scheduled.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
