//! Configuration constants and default values.
//!
//! This module contains all runtime constants including thresholds,
//! rate-limit windows, selectors, marker classes, and validation limits.

// === Thresholds & Breakpoints ===

/// Scroll offset (px) past which the page counts as "scrolled".
pub const SCROLL_THRESHOLD_PX: f64 = 100.0;

/// Viewport width (px) above which the slide-out menu no longer applies.
pub const TABLET_BREAKPOINT_PX: f64 = 992.0;

// === Rate-Limit Windows ===

/// Throttle window for scroll-posture sampling, in milliseconds.
pub const SCROLL_THROTTLE_MS: u64 = 100;

/// Debounce quiet period for resize handling, in milliseconds.
pub const RESIZE_DEBOUNCE_MS: u64 = 150;

/// Throttle window for reveal/parallax sampling, in milliseconds.
pub const REVEAL_THROTTLE_MS: u64 = 120;

// === Reveal & Parallax Defaults ===

/// Fraction of the viewport held back before an element counts as visible.
pub const DEFAULT_REVEAL_MARGIN: f64 = 0.15;

/// Default parallax factor (fraction of scroll offset).
pub const DEFAULT_PARALLAX_FACTOR: f64 = 0.3;

// === Marker Classes ===

/// Applied to the nav panel while the menu is open.
pub const CLASS_MENU_OPEN: &str = "menu-open";

/// Applied to the toggle control while the menu is open.
pub const CLASS_TOGGLE_ACTIVE: &str = "toggle-active";

/// Applied to the header once scroll passes the threshold.
pub const CLASS_SCROLLED: &str = "scrolled";

/// Applied once to each reveal target entering the viewport.
pub const CLASS_REVEALED: &str = "revealed";

/// Applied to the root while decorative animations are paused.
pub const CLASS_ANIMATIONS_PAUSED: &str = "animations-paused";

/// Applied to the root when an external animation engine takes over.
pub const CLASS_ENGINE_MANAGED: &str = "engine-managed";

// === Selectors ===

/// The navigation panel.
pub const SEL_NAVBAR: &str = "#site-nav";

/// The menu toggle control.
pub const SEL_NAV_TOGGLE: &str = "#nav-toggle";

/// Navigation links inside the panel.
pub const SEL_NAV_LINK: &str = ".nav-link";

/// The page header that gains the scrolled marker.
pub const SEL_HEADER: &str = "#header";

/// The document root carrying global markers.
pub const SEL_ROOT: &str = "body";

/// Reveal-animation targets.
pub const SEL_REVEAL: &str = ".reveal";

/// Parallax targets.
pub const SEL_PARALLAX: &str = ".parallax";

// === Validation Limits ===

/// Minimum scroll threshold in pixels.
pub const MIN_THRESHOLD_PX: f64 = 0.0;

/// Maximum scroll threshold in pixels.
pub const MAX_THRESHOLD_PX: f64 = 2000.0;

/// Minimum tablet breakpoint in pixels.
pub const MIN_BREAKPOINT_PX: f64 = 320.0;

/// Maximum tablet breakpoint in pixels.
pub const MAX_BREAKPOINT_PX: f64 = 3840.0;

/// Maximum rate-limit window in milliseconds.
pub const MAX_WINDOW_MS: u64 = 5_000;

/// Maximum parallax factor.
pub const MAX_PARALLAX_FACTOR: f64 = 1.0;
