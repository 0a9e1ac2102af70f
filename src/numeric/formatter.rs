// ============================================================================
// Decimal Coordinate Formatter
// Scaled-integer to minimal exact decimal text
// ============================================================================

use arrayvec::ArrayVec;

/// Append the minimal exact decimal representation of a scaled coordinate
/// value to `out`.
///
/// The output is the shortest decimal text that parses back to the identical
/// scaled value: trailing zero fraction digits are dropped and the decimal
/// point is omitted when the whole fraction is zero. Exponent notation is
/// never produced.
///
/// ```rust
/// use geofix::numeric::append_scaled;
///
/// let mut out = String::new();
/// append_scaled(&mut out, -1_000_000);
/// assert_eq!(out, "-0.1");
/// ```
pub fn append_scaled(out: &mut String, value: i32) {
    if value < 0 {
        out.push('-');
    }

    // digits in least-significant-first order, padded so the decimal point
    // always sits between index 6 and 7
    let mut magnitude = value.unsigned_abs();
    let mut digits = ArrayVec::<u8, 10>::new();
    loop {
        digits.push(b'0' + (magnitude % 10) as u8);
        magnitude /= 10;
        if magnitude == 0 {
            break;
        }
    }
    while digits.len() < 7 {
        digits.push(b'0');
    }

    // digits before the decimal point
    if digits.len() > 7 {
        for &digit in digits[7..].iter().rev() {
            out.push(char::from(digit));
        }
    } else {
        out.push('0');
    }

    // skip trailing zeros of the fraction
    let mut fraction_start = 0;
    while fraction_start < 7 && digits[fraction_start] == b'0' {
        fraction_start += 1;
    }

    if fraction_start < 7 {
        out.push('.');
        for &digit in digits[fraction_start..7].iter().rev() {
            out.push(char::from(digit));
        }
    }
}

/// Convenience wrapper around [`append_scaled`] returning a fresh `String`.
pub fn scaled_to_string(value: i32) -> String {
    let mut out = String::with_capacity(12);
    append_scaled(&mut out, value);
    out
}
