// ABOUTME: Numeric display helpers for statistic cards
// ABOUTME: Thousands grouping, shortest decimal rendering, and weight change deltas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use vitals_core::constants::units::POUNDS;

/// Insert comma separators every three digits, e.g. 13196 -> "13,196"
///
/// Grouping is locale-invariant and counted from the least significant
/// digit. A minus sign stays in front of the first group.
#[must_use]
pub fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if n < 0 {
        grouped.push('-');
    }
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

/// Shortest decimal that round-trips, without a trailing ".0"
///
/// 220.9 renders as "220.9" and 56.0 as "56". Negative zero renders as "0".
#[must_use]
pub fn format_decimal(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    format!("{value}")
}

/// Weight difference from the starting weight, e.g. "(-78.23 lbs)"
#[must_use]
pub fn format_weight_change(current: f64, start: f64) -> String {
    format!("({:.2} {POUNDS})", current - start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_group_boundaries() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(100_000), "100,000");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_thousands_keeps_sign_outside_groups() {
        assert_eq!(format_thousands(-1_234), "-1,234");
        assert_eq!(format_thousands(-999), "-999");
        assert_eq!(format_thousands(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn test_decimal_drops_trailing_zero() {
        assert_eq!(format_decimal(56.0), "56");
        assert_eq!(format_decimal(220.9), "220.9");
        assert_eq!(format_decimal(-0.0), "0");
    }

    #[test]
    fn test_weight_change_has_two_decimals() {
        assert_eq!(format_weight_change(220.9, 299.13), "(-78.23 lbs)");
        assert_eq!(format_weight_change(180.0, 175.0), "(5.00 lbs)");
    }
}
