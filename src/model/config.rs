//! Runtime configuration (JSON).
//!
//! The host hands the runtime a JSON document (or nothing); parsing is
//! lenient - anything invalid falls back to defaults with a warning, so a
//! broken config can never take the page down.

use std::time::Duration;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::clamp;
use crate::model::constants::*;

/// Tunable runtime settings.
///
/// Unknown fields are ignored and missing fields take their defaults, so
/// hosts can ship partial documents.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Scroll offset (px) past which the header gains the scrolled marker.
    pub scroll_threshold_px: f64,
    /// Viewport width (px) above which an open menu closes.
    pub tablet_breakpoint_px: f64,
    /// Throttle window for scroll-posture sampling (ms).
    pub scroll_throttle_ms: u64,
    /// Debounce quiet period for resize handling (ms).
    pub resize_debounce_ms: u64,
    /// Throttle window for reveal/parallax sampling (ms).
    pub reveal_throttle_ms: u64,
    /// Fraction of the viewport held back before an element reveals.
    pub reveal_margin: f64,
    /// Parallax factor applied to parallax targets.
    pub parallax_factor: f64,
    /// Master switch for the animation controller.
    pub animations_enabled: bool,
    /// Delegate reveal/parallax to an external engine (root marker only).
    pub external_engine: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: SCROLL_THRESHOLD_PX,
            tablet_breakpoint_px: TABLET_BREAKPOINT_PX,
            scroll_throttle_ms: SCROLL_THROTTLE_MS,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            reveal_throttle_ms: REVEAL_THROTTLE_MS,
            reveal_margin: DEFAULT_REVEAL_MARGIN,
            parallax_factor: DEFAULT_PARALLAX_FACTOR,
            animations_enabled: true,
            external_engine: false,
        }
    }
}

impl RuntimeConfig {
    /// Parse a JSON document, falling back to defaults if it is invalid.
    ///
    /// The result is already validated.
    pub fn from_json(json: &str) -> Self {
        let mut config: Self = match serde_json::from_str(json) {
            Ok(config) => config,
            Err(e) => {
                warn!("invalid runtime config, using defaults: {e}");
                Self::default()
            }
        };
        config.validate();
        config
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| {
            warn!("failed to serialize runtime config: {e}");
            String::new()
        })
    }

    /// Clamp all values to valid ranges.
    pub fn validate(&mut self) {
        self.scroll_threshold_px = clamp(
            self.scroll_threshold_px,
            MIN_THRESHOLD_PX,
            MAX_THRESHOLD_PX,
        );
        self.tablet_breakpoint_px = clamp(
            self.tablet_breakpoint_px,
            MIN_BREAKPOINT_PX,
            MAX_BREAKPOINT_PX,
        );
        self.scroll_throttle_ms = self.scroll_throttle_ms.min(MAX_WINDOW_MS);
        self.resize_debounce_ms = self.resize_debounce_ms.min(MAX_WINDOW_MS);
        self.reveal_throttle_ms = self.reveal_throttle_ms.min(MAX_WINDOW_MS);
        self.reveal_margin = clamp(self.reveal_margin, 0.0, 1.0);
        self.parallax_factor = clamp(self.parallax_factor, 0.0, MAX_PARALLAX_FACTOR);
    }

    /// Scroll throttle window as a `Duration`.
    pub fn scroll_throttle(&self) -> Duration {
        Duration::from_millis(self.scroll_throttle_ms)
    }

    /// Resize debounce window as a `Duration`.
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    /// Reveal throttle window as a `Duration`.
    pub fn reveal_throttle(&self) -> Duration {
        Duration::from_millis(self.reveal_throttle_ms)
    }
}
