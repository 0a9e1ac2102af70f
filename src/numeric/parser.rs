// ============================================================================
// Decimal Coordinate Parser
// Text to scaled-integer conversion without floating-point arithmetic
// ============================================================================

use super::errors::{CoordinateError, CoordinateResult};

/// Maximum number of digits accepted before the decimal point.
const MAX_INTEGER_DIGITS: u32 = 10;

/// Maximum number of non-significant fraction digits consumed past the
/// rounding digit.
const MAX_IGNORED_DIGITS: u32 = 20;

/// Maximum number of digits accepted in a scientific exponent.
const MAX_EXPONENT_DIGITS: u32 = 5;

/// Decimal digit at `pos`, or `None` at end of input or a non-digit.
#[inline]
fn digit_at(bytes: &[u8], pos: usize) -> Option<i64> {
    match bytes.get(pos) {
        Some(byte) if byte.is_ascii_digit() => Some(i64::from(*byte - b'0')),
        _ => None,
    }
}

/// Parse a decimal coordinate literal into its scaled 32-bit representation.
///
/// Accepts an optional minus sign, an integer part, an optional fraction and
/// an optional scientific exponent (`e`/`E`). The literal is converted to the
/// real value times [`COORDINATE_PRECISION`](super::COORDINATE_PRECISION),
/// rounded half-up on the seventh fraction digit. The whole conversion runs
/// on integer arithmetic, so values round-trip exactly.
///
/// The cursor is taken by mutable reference and advanced past the consumed
/// literal on success, which allows several adjacent literals to be parsed
/// out of one buffer:
///
/// ```rust
/// use geofix::numeric::parse_scaled;
///
/// let mut cursor = "13.5,52.5";
/// assert_eq!(parse_scaled(&mut cursor), Ok(135_000_000));
/// assert_eq!(cursor, ",52.5");
/// ```
///
/// # Errors
///
/// Returns [`CoordinateError::Malformed`] carrying the input text when the
/// literal violates the grammar, exceeds a digit cap (10 integer digits,
/// 5 exponent digits, 20 ignored fraction digits) or does not fit the scaled
/// 32-bit range. On error the cursor position is unspecified and must not be
/// reused.
pub fn parse_scaled(data: &mut &str) -> CoordinateResult<i32> {
    let full = *data;
    let bytes = full.as_bytes();
    let mut pos = 0usize;

    let mut result: i64 = 0;
    let mut negative = false;

    // one more than the significant fraction digits, reserved for rounding
    let mut scale: i64 = 8;

    // single error path, every early exit reports the whole literal
    let malformed = || Err(CoordinateError::malformed(full));

    // optional minus sign
    if bytes.get(pos) == Some(&b'-') {
        negative = true;
        pos += 1;
    }

    if bytes.get(pos) != Some(&b'.') {
        // there has to be at least one digit
        match digit_at(bytes, pos) {
            Some(digit) => {
                result = digit;
                pos += 1;
            },
            None => return malformed(),
        }

        // optional additional digits before the decimal point
        let mut max_digits = MAX_INTEGER_DIGITS;
        while let Some(digit) = digit_at(bytes, pos) {
            if max_digits == 0 {
                break;
            }
            result = result * 10 + digit;
            pos += 1;
            max_digits -= 1;
        }

        if max_digits == 0 {
            return malformed();
        }
    } else {
        // a digit has to follow the decimal point when no digit preceded it
        if digit_at(bytes, pos + 1).is_none() {
            return malformed();
        }
    }

    // optional decimal point
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;

        // significant fraction digits, the last one consumed is the
        // rounding digit
        while scale > 0 {
            match digit_at(bytes, pos) {
                Some(digit) => {
                    result = result * 10 + digit;
                    pos += 1;
                    scale -= 1;
                },
                None => break,
            }
        }

        // consume and ignore non-significant digits
        let mut max_digits = MAX_IGNORED_DIGITS;
        while digit_at(bytes, pos).is_some() {
            if max_digits == 0 {
                break;
            }
            pos += 1;
            max_digits -= 1;
        }

        if max_digits == 0 {
            return malformed();
        }
    }

    // optional exponent in scientific notation
    if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
        pos += 1;

        let mut exponent_negative = false;
        if bytes.get(pos) == Some(&b'-') {
            exponent_negative = true;
            pos += 1;
        }

        // there has to be at least one digit in the exponent
        let mut exponent: i64 = match digit_at(bytes, pos) {
            Some(digit) => {
                pos += 1;
                digit
            },
            None => return malformed(),
        };

        // optional additional exponent digits
        let mut max_digits = MAX_EXPONENT_DIGITS;
        while let Some(digit) = digit_at(bytes, pos) {
            if max_digits == 0 {
                break;
            }
            exponent = exponent * 10 + digit;
            pos += 1;
            max_digits -= 1;
        }

        if max_digits == 0 {
            return malformed();
        }

        scale += if exponent_negative { -exponent } else { exponent };
    }

    // apply the remaining scale; saturation keeps pathological exponents on
    // the error path of the final range check instead of overflowing
    if scale < 0 {
        while scale < 0 && result > 0 {
            result /= 10;
            scale += 1;
        }
    } else {
        while scale > 0 {
            result = result.saturating_mul(10);
            scale -= 1;
        }
    }

    // round half-up on the least significant retained digit
    result = result.saturating_add(5) / 10;
    if negative {
        result = -result;
    }

    match i32::try_from(result) {
        Ok(value) => {
            *data = &full[pos..];
            Ok(value)
        },
        Err(_) => malformed(),
    }
}
