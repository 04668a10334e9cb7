use limen::{clamp, parallax_shift, past_threshold, reveal_visible};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn clamp_keeps_inner_value() {
    assert_eq!(clamp(10.0, 0.0, 20.0), 10.0);
}

#[test]
fn clamp_limits_low_and_high() {
    assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
    assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
}

#[test]
fn threshold_is_strictly_greater_than() {
    assert!(!past_threshold(99.9, 100.0));
    assert!(!past_threshold(100.0, 100.0));
    assert!(past_threshold(100.1, 100.0));
}

#[test]
fn reveal_visible_respects_margin_band() {
    // Viewport 1000px, margin 0.15: the band ends 850px below the offset
    assert!(reveal_visible(849.0, 0.0, 1000.0, 0.15));
    assert!(!reveal_visible(850.0, 0.0, 1000.0, 0.15));
    assert!(reveal_visible(1849.0, 1000.0, 1000.0, 0.15));
}

#[test]
fn reveal_visible_clamps_margin() {
    // Margin above 1.0 collapses the band to zero, not below
    assert!(!reveal_visible(10.0, 0.0, 1000.0, 5.0));
    assert!(reveal_visible(-1.0, 0.0, 1000.0, 5.0));
    // Negative margin behaves like zero
    assert!(reveal_visible(999.0, 0.0, 1000.0, -1.0));
    assert!(!reveal_visible(1000.0, 0.0, 1000.0, -1.0));
}

#[test]
fn parallax_shift_opposes_scroll() {
    assert!(approx_eq(parallax_shift(100.0, 0.3), -30.0));
    assert!(approx_eq(parallax_shift(0.0, 0.3), 0.0));
}

#[test]
fn parallax_shift_zero_factor_is_inert() {
    assert!(approx_eq(parallax_shift(500.0, 0.0), 0.0));
}
