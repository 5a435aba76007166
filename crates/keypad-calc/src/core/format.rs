//! Result rounding and rendering
//!
//! A result is rounded to a fixed number of fractional digits and then
//! printed in its shortest decimal form: no trailing zeros, no forced decimal
//! point on integers, no exponent notation, no negative zero.

/// Fractional digits needed to print any finite f64 exactly
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Rounds `value` to `digits` fractional digits, half away from zero
///
/// The decision is made on the exact binary value, so `0.0009765625`
/// (exactly 1/1024) rounds up to `0.000976563` at nine digits.
#[must_use]
pub fn round_fraction(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let digits = (digits as usize).min(EXACT_FRACTION_DIGITS);
    let exact = format!("{:.prec$}", value.abs(), prec = EXACT_FRACTION_DIGITS);
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().take(digits))
        .collect();
    if fraction.as_bytes().get(digits).is_some_and(|&b| b >= b'5') {
        increment_digits(&mut kept);
    }

    let mut text: String = kept.iter().map(|&b| char::from(b)).collect();
    if digits > 0 {
        text.insert(text.len() - digits, '.');
    }
    let magnitude: f64 = text.parse().unwrap_or_else(|_| value.abs());
    if value.is_sign_negative() {
        -magnitude
    } else {
        magnitude
    }
}

/// Adds one unit in the last place to a string of ASCII digits
fn increment_digits(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Renders a finite value in shortest decimal form
#[must_use]
pub fn render_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

/// Rounds then renders, the way evaluate stores a result
#[must_use]
pub fn format_result(value: f64, digits: u32) -> String {
    render_number(round_fraction(value, digits))
}
