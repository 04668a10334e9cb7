//! Tests for the model layer (states and configuration).
//!
//! Note: We intentionally use `Default::default()` then field reassignment
//! to test individual field validation. This is clearer than struct update syntax.
#![allow(clippy::field_reassign_with_default)]

use limen::model::constants::*;
use limen::model::{MenuState, RuntimeConfig, ScrollPosture};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

// === Menu State Tests ===

#[test]
fn menu_state_default_is_closed() {
    assert_eq!(MenuState::default(), MenuState::Closed);
}

#[test]
fn menu_state_toggle_round_trip() {
    let state = MenuState::Closed;
    assert_eq!(state.toggled(), MenuState::Open);
    assert_eq!(state.toggled().toggled(), MenuState::Closed);
}

#[test]
fn menu_state_is_open() {
    assert!(MenuState::Open.is_open());
    assert!(!MenuState::Closed.is_open());
}

// === Scroll Posture Tests ===

#[test]
fn posture_default_not_scrolled() {
    assert!(!ScrollPosture::default().scrolled);
}

#[test]
fn posture_follows_offset_sequence_without_hysteresis() {
    // Offsets [0, 50, 120, 80, 150] against threshold 100:
    // absent, absent, present, absent, present
    let mut posture = ScrollPosture::default();
    let expectations = [
        (0.0, false),
        (50.0, false),
        (120.0, true),
        (80.0, false),
        (150.0, true),
    ];
    for (offset, expected) in expectations {
        posture.observe(offset, 100.0);
        assert_eq!(posture.scrolled, expected, "offset {offset}");
    }
}

#[test]
fn posture_reports_flips_exactly_once() {
    let mut posture = ScrollPosture::default();
    assert_eq!(posture.observe(120.0, 100.0), Some(true));
    assert_eq!(posture.observe(130.0, 100.0), None);
    assert_eq!(posture.observe(140.0, 100.0), None);
    assert_eq!(posture.observe(20.0, 100.0), Some(false));
}

#[test]
fn posture_boundary_oscillation_flips_every_sample() {
    let mut posture = ScrollPosture::default();
    assert_eq!(posture.observe(100.1, 100.0), Some(true));
    assert_eq!(posture.observe(100.0, 100.0), Some(false));
    assert_eq!(posture.observe(100.1, 100.0), Some(true));
}

// === Config Default Tests ===

#[test]
fn config_default_threshold() {
    let config = RuntimeConfig::default();
    assert!(approx_eq(config.scroll_threshold_px, SCROLL_THRESHOLD_PX));
}

#[test]
fn config_default_breakpoint() {
    let config = RuntimeConfig::default();
    assert!(approx_eq(config.tablet_breakpoint_px, TABLET_BREAKPOINT_PX));
}

#[test]
fn config_default_windows() {
    let config = RuntimeConfig::default();
    assert_eq!(config.scroll_throttle_ms, SCROLL_THROTTLE_MS);
    assert_eq!(config.resize_debounce_ms, RESIZE_DEBOUNCE_MS);
    assert_eq!(config.reveal_throttle_ms, REVEAL_THROTTLE_MS);
}

#[test]
fn config_default_animation_settings() {
    let config = RuntimeConfig::default();
    assert!(config.animations_enabled);
    assert!(!config.external_engine);
    assert!(approx_eq(config.reveal_margin, DEFAULT_REVEAL_MARGIN));
    assert!(approx_eq(config.parallax_factor, DEFAULT_PARALLAX_FACTOR));
}

// === Config Validation Tests ===

#[test]
fn validate_clamps_threshold_below_minimum() {
    let mut config = RuntimeConfig::default();
    config.scroll_threshold_px = -10.0;
    config.validate();
    assert!(approx_eq(config.scroll_threshold_px, MIN_THRESHOLD_PX));
}

#[test]
fn validate_clamps_threshold_above_maximum() {
    let mut config = RuntimeConfig::default();
    config.scroll_threshold_px = 99_999.0;
    config.validate();
    assert!(approx_eq(config.scroll_threshold_px, MAX_THRESHOLD_PX));
}

#[test]
fn validate_clamps_breakpoint_range() {
    let mut config = RuntimeConfig::default();
    config.tablet_breakpoint_px = 10.0;
    config.validate();
    assert!(approx_eq(config.tablet_breakpoint_px, MIN_BREAKPOINT_PX));

    config.tablet_breakpoint_px = 10_000.0;
    config.validate();
    assert!(approx_eq(config.tablet_breakpoint_px, MAX_BREAKPOINT_PX));
}

#[test]
fn validate_caps_rate_limit_windows() {
    let mut config = RuntimeConfig::default();
    config.scroll_throttle_ms = 1_000_000;
    config.resize_debounce_ms = 1_000_000;
    config.reveal_throttle_ms = 1_000_000;
    config.validate();
    assert_eq!(config.scroll_throttle_ms, MAX_WINDOW_MS);
    assert_eq!(config.resize_debounce_ms, MAX_WINDOW_MS);
    assert_eq!(config.reveal_throttle_ms, MAX_WINDOW_MS);
}

#[test]
fn validate_keeps_in_range_values() {
    let mut config = RuntimeConfig::default();
    config.scroll_threshold_px = 250.0;
    config.validate();
    assert!(approx_eq(config.scroll_threshold_px, 250.0));
}

#[test]
fn validate_clamps_reveal_margin_and_parallax() {
    let mut config = RuntimeConfig::default();
    config.reveal_margin = -0.5;
    config.parallax_factor = 2.5;
    config.validate();
    assert!(approx_eq(config.reveal_margin, 0.0));
    assert!(approx_eq(config.parallax_factor, MAX_PARALLAX_FACTOR));
}

// === Config JSON Tests ===

#[test]
fn config_json_round_trip() {
    let mut config = RuntimeConfig::default();
    config.scroll_threshold_px = 80.0;
    config.animations_enabled = false;
    let json = config.to_json();
    assert_eq!(RuntimeConfig::from_json(&json), config);
}

#[test]
fn config_from_invalid_json_is_default() {
    assert_eq!(RuntimeConfig::from_json("nope"), RuntimeConfig::default());
    assert_eq!(RuntimeConfig::from_json(""), RuntimeConfig::default());
}

#[test]
fn config_from_partial_json_keeps_other_defaults() {
    let config = RuntimeConfig::from_json(r#"{"tablet_breakpoint_px": 768.0}"#);
    assert!(approx_eq(config.tablet_breakpoint_px, 768.0));
    assert!(approx_eq(config.scroll_threshold_px, SCROLL_THRESHOLD_PX));
    assert!(config.animations_enabled);
}

#[test]
fn config_from_json_is_validated() {
    let config = RuntimeConfig::from_json(r#"{"scroll_threshold_px": -400.0}"#);
    assert!(approx_eq(config.scroll_threshold_px, MIN_THRESHOLD_PX));
}

#[test]
fn config_ignores_unknown_fields() {
    let config = RuntimeConfig::from_json(r#"{"future_knob": true}"#);
    assert_eq!(config, RuntimeConfig::default());
}

// === Clone and PartialEq Tests ===

#[test]
fn config_is_cloneable() {
    let config = RuntimeConfig::default();
    let cloned = config.clone();
    assert_eq!(config, cloned);
}

#[test]
fn config_equality() {
    let config1 = RuntimeConfig::default();
    let mut config2 = RuntimeConfig::default();
    assert_eq!(config1, config2);

    config2.reveal_margin = 0.5;
    assert_ne!(config1, config2);
}
