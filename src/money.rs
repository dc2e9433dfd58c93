use rust_decimal::{Decimal, RoundingStrategy};

/// Format a decimal amount with thousand separators and 2 decimal places.
/// e.g. `1234567.89` → `"$1,234,567.89"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let abs = val.abs();
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas = group_thousands(int_part);

    if val < Decimal::ZERO {
        format!("-${with_commas}.{dec_part}")
    } else {
        format!("${with_commas}.{dec_part}")
    }
}

/// Locale-style grouping used by the text export: thousand separators,
/// at most 3 fraction digits, no trailing zeros, sign before the digits.
/// e.g. `1500` → `"1,500"`, `-500` → `"-500"`, `1234.50` → `"1,234.5"`
pub(crate) fn format_grouped(val: Decimal) -> String {
    let rounded = val
        .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let abs = rounded.abs().to_string();
    let mut parts = abs.split('.');
    let int_part = parts.next().unwrap_or("0");
    let frac_part = parts.next();

    let mut out = String::new();
    if rounded < Decimal::ZERO {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
#[path = "money_tests.rs"]
mod tests;
