// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Utility functions for polynomial operations.

/// Relative tolerance used by [`is_close`].
pub const RELATIVE_TOLERANCE: f64 = 1e-5;

/// Absolute tolerance used by [`is_close`].
pub const ABSOLUTE_TOLERANCE: f64 = 1e-8;

/// Checks whether `a` is close to `b`.
///
/// Uses the asymmetric test `|a - b| <= atol + rtol * |b|`, so `b` is the reference value.
///
/// # Arguments
///
/// * `a` - The value to test.
/// * `b` - The reference value.
///
/// # Returns
///
/// `true` if the values are within tolerance of each other.
pub fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= ABSOLUTE_TOLERANCE + RELATIVE_TOLERANCE * b.abs()
}

/// Formats a coefficient as the shortest decimal that round-trips, always with a
/// fractional part or exponent (`5.0`, `0.05`, `1e20`).
pub fn format_coefficient(value: f64) -> String {
    format!("{value:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_close() {
        assert!(is_close(1.0, 1.0));
        assert!(is_close(1.000001, 1.0));
        assert!(!is_close(1.001, 1.0));
        assert!(is_close(0.0, 1e-9));
        assert!(!is_close(0.0, 1e-7));
    }

    #[test]
    fn test_format_coefficient() {
        assert_eq!(format_coefficient(5.0), "5.0");
        assert_eq!(format_coefficient(-5.0), "-5.0");
        assert_eq!(format_coefficient(0.05), "0.05");
        assert_eq!(format_coefficient(0.0), "0.0");
    }
}
