//! Number rounding and rem conversion.

/// Number of decimal places kept in fractional output.
pub const MAX_DECIMAL_PLACES: i32 = 4;

/// Unit appended to converted sizes.
pub const REM_SUFFIX: &str = "rem";

/// Rounds the exact binary value of `value` to [`MAX_DECIMAL_PLACES`]
/// decimals, with exact midpoints going away from zero.
///
/// Multiplying by `10^4` first would round the product in binary and push
/// values such as `2.00005` (stored just below the midpoint) up. Decimal
/// formatting works on the exact value instead. Its midpoint rule is
/// half-to-even, so exact midpoints are handled separately: a value lands
/// exactly halfway at four decimals only when it is an odd multiple of
/// `1/32`, and for those the scaled product is exact.
///
/// Negative zero collapses to zero so it never prints as `-0`.
pub fn round_decimals(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let rounded = if is_exact_midpoint(value) {
        let factor = 10f64.powi(MAX_DECIMAL_PLACES);
        (value * factor).round() / factor
    } else {
        format!("{:.*}", MAX_DECIMAL_PLACES as usize, value)
            .parse()
            .unwrap_or(value)
    };
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

fn is_exact_midpoint(value: f64) -> bool {
    let thirty_seconds = value * 32.0;
    thirty_seconds.fract() == 0.0 && thirty_seconds % 2.0 != 0.0
}

/// Rounds and prints a number in its shortest decimal form.
///
/// ```rust
/// use twtheme::format::format_number;
///
/// assert_eq!(format_number(1.0), "1");
/// assert_eq!(format_number(0.45), "0.45");
/// assert_eq!(format_number(2.0 / 3.0), "0.6667");
/// ```
pub fn format_number(value: f64) -> String {
    round_decimals(value).to_string()
}

/// Converts a pixel size into rem relative to `base_px`.
///
/// `base_px` must be non-zero; callers validate it before exporting.
///
/// ```rust
/// use twtheme::format::px_to_rem;
///
/// assert_eq!(px_to_rem(24.0, 16.0), "1.5rem");
/// assert_eq!(px_to_rem(0.0, 16.0), "0rem");
/// ```
pub fn px_to_rem(size_px: f64, base_px: f64) -> String {
    format!("{}{}", format_number(size_px / base_px), REM_SUFFIX)
}
