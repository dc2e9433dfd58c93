#![allow(clippy::unwrap_used)]

use ratatui::layout::Rect;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::util::*;

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("hello", 10), "hello");
}

#[test]
fn test_truncate_exact_length() {
    assert_eq!(truncate("hello", 5), "hello");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("Transportation", 6), "Trans…");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("hello", 0), "");
}

#[test]
fn test_truncate_unicode() {
    assert_eq!(truncate("café résumé", 5), "café…");
}

// ── share_percent ─────────────────────────────────────────────

#[test]
fn test_share_percent() {
    assert!((share_percent(dec!(1500), dec!(3300)) - 45.4545).abs() < 0.001);
    assert!((share_percent(dec!(3300), dec!(3300)) - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_share_percent_zero_total() {
    assert_eq!(share_percent(dec!(10), Decimal::ZERO), 0.0);
}

// ── centered_rect ─────────────────────────────────────────────

#[test]
fn test_centered_rect() {
    let r = centered_rect(Rect::new(0, 0, 100, 40), 60, 20);
    assert_eq!(r, Rect::new(20, 10, 60, 20));
}

#[test]
fn test_centered_rect_clamps() {
    let r = centered_rect(Rect::new(5, 5, 30, 10), 60, 20);
    assert_eq!(r, Rect::new(5, 5, 30, 10));
}
