#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

// ── format_amount ──────────────────────────────────────────

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(dec!(1234.56)), "$1,234.56");
}

#[test]
fn test_format_amount_no_commas() {
    assert_eq!(format_amount(dec!(999.99)), "$999.99");
}

#[test]
fn test_format_amount_zero() {
    assert_eq!(format_amount(dec!(0)), "$0.00");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-42.50)), "-$42.50");
}

#[test]
fn test_format_amount_large() {
    assert_eq!(format_amount(dec!(1234567.89)), "$1,234,567.89");
}

#[test]
fn test_format_amount_rounds_to_two_decimals() {
    assert_eq!(format_amount(dec!(1.5)), "$1.50");
}

#[test]
fn test_format_amount_single_digit() {
    assert_eq!(format_amount(dec!(5)), "$5.00");
}

// ── format_grouped ─────────────────────────────────────────

#[test]
fn test_format_grouped_integer() {
    assert_eq!(format_grouped(dec!(5000)), "5,000");
    assert_eq!(format_grouped(dec!(300)), "300");
    assert_eq!(format_grouped(dec!(100000)), "100,000");
}

#[test]
fn test_format_grouped_zero() {
    assert_eq!(format_grouped(Decimal::ZERO), "0");
    assert_eq!(format_grouped(dec!(0.00)), "0");
}

#[test]
fn test_format_grouped_drops_trailing_zeros() {
    assert_eq!(format_grouped(dec!(1500.00)), "1,500");
    assert_eq!(format_grouped(dec!(1234.50)), "1,234.5");
}

#[test]
fn test_format_grouped_keeps_cents() {
    assert_eq!(format_grouped(dec!(1234567.89)), "1,234,567.89");
}

#[test]
fn test_format_grouped_caps_fraction_digits() {
    assert_eq!(format_grouped(dec!(0.12345)), "0.123");
    assert_eq!(format_grouped(dec!(2.9996)), "3");
}

#[test]
fn test_format_grouped_negative() {
    assert_eq!(format_grouped(dec!(-500)), "-500");
    assert_eq!(format_grouped(dec!(-12345.5)), "-12,345.5");
}
