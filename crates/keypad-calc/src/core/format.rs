//! Display text for results
//!
//! Follows the JVM `Double.toString` layout the keypad display has always
//! shown: `5.0` rather than `5`, and `1.0E7` past the plain-decimal range.

const PLAIN_MIN: f64 = 1e-3;
const PLAIN_MAX: f64 = 1e7;

/// Formats an evaluation result for display
///
/// # Examples
///
/// ```
/// use keypad_calc::core::format::format_result;
///
/// assert_eq!(format_result(14.0), "14.0");
/// assert_eq!(format_result(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_result(12_345_678.0), "1.2345678E7");
/// ```
#[must_use]
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        if value.fract() == 0.0 {
            format!("{value:.1}")
        } else {
            format!("{value}")
        }
    } else {
        scientific(value)
    }
}

fn scientific(value: f64) -> String {
    let formatted = format!("{value:E}");
    match formatted.split_once('E') {
        Some((mantissa, exponent)) if !mantissa.contains('.') => {
            format!("{mantissa}.0E{exponent}")
        }
        _ => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Plain range =====

    #[test]
    fn test_integral_keeps_one_decimal() {
        assert_eq!(format_result(5.0), "5.0");
        assert_eq!(format_result(-3.0), "-3.0");
        assert_eq!(format_result(9_999_999.0), "9999999.0");
    }

    #[test]
    fn test_zero() {
        assert_eq!(format_result(0.0), "0.0");
        assert_eq!(format_result(-0.0), "-0.0");
    }

    #[test]
    fn test_fractional_shortest() {
        assert_eq!(format_result(4.5), "4.5");
        assert_eq!(format_result(0.05), "0.05");
        assert_eq!(format_result(0.001), "0.001");
        assert_eq!(format_result(1.0 / 3.0), "0.3333333333333333");
    }

    // ===== Scientific range =====

    #[test]
    fn test_large_values() {
        assert_eq!(format_result(1e7), "1.0E7");
        assert_eq!(format_result(12_345_678.0), "1.2345678E7");
        assert_eq!(format_result(-2.5e10), "-2.5E10");
    }

    #[test]
    fn test_small_values() {
        assert_eq!(format_result(1e-4), "1.0E-4");
        assert_eq!(format_result(0.000_15), "1.5E-4");
    }

    // ===== Non-finite =====

    #[test]
    fn test_non_finite() {
        assert_eq!(format_result(f64::NAN), "NaN");
        assert_eq!(format_result(f64::INFINITY), "Infinity");
        assert_eq!(format_result(f64::NEG_INFINITY), "-Infinity");
    }
}
