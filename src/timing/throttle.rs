//! Leading-edge throttling.

use std::time::Duration;

use super::timer::TimerHandle;

/// Cap execution frequency to at most once per window.
///
/// The first call while idle is admitted immediately and arms a cooldown
/// of `limit`; calls arriving strictly inside the cooldown are dropped -
/// not queued, not delayed. Once the cooldown expires the next call is
/// admitted immediately again.
///
/// There is no trailing-edge execution: the last events of a burst can be
/// silently dropped. That is carried, observable behavior, covered by
/// tests - not a gap to fix.
///
/// Invariant: at most one cooldown timer is active at any time; the slot
/// owns its [`TimerHandle`] and [`Throttle::reset`] releases it on
/// teardown.
pub struct Throttle {
    limit: Duration,
    cooldown: Option<TimerHandle>,
}

impl Throttle {
    /// Create a throttle with the given cooldown window.
    ///
    /// A zero `limit` admits every call.
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            cooldown: None,
        }
    }

    /// Leading-edge gate: true when the call is admitted.
    ///
    /// Admission arms the cooldown; over any span `D` at most
    /// `ceil(D / limit) + 1` calls pass.
    pub fn allow(&mut self, now: Duration) -> bool {
        if let Some(timer) = self.cooldown.take() {
            if !timer.is_due(now) {
                self.cooldown = Some(timer);
                return false;
            }
            // Expired: the handle is released by dropping here
        }
        self.cooldown = Some(TimerHandle::schedule(now, self.limit));
        true
    }

    /// True while calls would be dropped.
    pub fn in_cooldown(&self, now: Duration) -> bool {
        self.cooldown.as_ref().is_some_and(|t| !t.is_due(now))
    }

    /// Release the cooldown timer. Idempotent; used on teardown.
    pub fn reset(&mut self) {
        if let Some(timer) = self.cooldown.take() {
            timer.cancel();
        }
    }
}
