//! # Result Formatting
//!
//! Converts a numeric result into its canonical display string. The rule
//! order is load-bearing: magnitude checks come before the integer check,
//! so `1e16` renders in scientific form instead of as a 17-character
//! integer literal.

/// Display token for a failed or meaningless calculation
pub const ERROR_TEXT: &str = "Error";

/// Display text for an infinite result
pub const DIVIDE_BY_ZERO_TEXT: &str = "Cannot divide by zero";

/// Format a calculation result for the display line and the history tape.
///
/// 1. NaN renders the error token.
/// 2. Infinities render the divide-by-zero text.
/// 3. `|n| >= 1e15` or `0 < |n| < 1e-6` render in scientific notation with
///    six digits after the decimal point.
/// 4. Integer values below `1e12` render as plain integers.
/// 5. Everything else is rounded to ten significant digits and rendered
///    without trailing zeros.
pub fn format_result(n: f64) -> String {
    if n.is_nan() {
        return ERROR_TEXT.to_string();
    }
    if n.is_infinite() {
        return DIVIDE_BY_ZERO_TEXT.to_string();
    }

    let magnitude = n.abs();
    if magnitude >= 1e15 || (magnitude > 0.0 && magnitude < 1e-6) {
        return to_exponential(n, 6);
    }

    if n.fract() == 0.0 && magnitude < 1e12 {
        return format!("{}", n as i64);
    }

    format!("{}", round_to_significant(n, 10))
}

/// Scientific notation with a fixed fraction length and a signed,
/// two-digit exponent (`1.000000e+16`, `1.000000e-07`).
fn to_exponential(n: f64, fraction_digits: usize) -> String {
    let rendered = format!("{:.*e}", fraction_digits, n);
    // Rust renders the exponent bare ("1.000000e16"); re-render it with an
    // explicit sign and at least two digits.
    let (mantissa, exponent) = rendered
        .split_once('e')
        .expect("exponential format always contains 'e'");
    let exponent: i32 = exponent
        .parse()
        .expect("exponent of a finite float is a valid integer");
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.abs())
}

/// Round to `digits` significant digits.
///
/// The rendered value relies on `f64`'s shortest round-trip `Display`
/// output, which never prints trailing zeros.
fn round_to_significant(n: f64, digits: i32) -> f64 {
    if n == 0.0 {
        return 0.0;
    }
    let order = n.abs().log10().floor() as i32;
    let factor = 10f64.powi(digits - 1 - order);
    (n * factor).round() / factor
}
