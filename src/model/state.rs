//! Controller state (pure Rust, no backend).

use crate::past_threshold;

/// Mobile navigation menu state.
///
/// Owned by the navigation controller; created `Closed` and mutated only
/// by toggle activation, link activation, outside clicks, or a resize
/// crossing the tablet breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    /// The slide-out panel is hidden.
    #[default]
    Closed,
    /// The slide-out panel is visible and document scroll is suppressed.
    Open,
}

impl MenuState {
    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// True when the panel is visible.
    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }
}

/// Scroll posture derived from offset vs. a fixed threshold.
///
/// Recomputed on every admitted scroll sample; never persisted. There is
/// no hysteresis: samples oscillating around the threshold flip the
/// posture each time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollPosture {
    /// True once the offset is strictly past the threshold.
    pub scrolled: bool,
}

impl ScrollPosture {
    /// Fold in a scroll sample.
    ///
    /// Returns `Some(new_posture)` when the posture flipped, `None` when
    /// it is unchanged - callers mutate markers only on a flip, keeping
    /// the class toggling idempotent.
    pub fn observe(&mut self, offset: f64, threshold: f64) -> Option<bool> {
        let scrolled = past_threshold(offset, threshold);
        if scrolled == self.scrolled {
            return None;
        }
        self.scrolled = scrolled;
        Some(scrolled)
    }
}
