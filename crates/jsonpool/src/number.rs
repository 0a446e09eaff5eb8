//! Best-effort numeric coercion of string payloads.
//!
//! These parsers accept a leading numeric prefix and ignore whatever follows,
//! so `"42abc"` coerces to `42` and `"abc"` to `0`. They back the total
//! `as_i64`/`as_f64` accessors and therefore never fail.

/// Parses an optional sign followed by decimal digits.
///
/// Accumulation wraps on overflow; text with no leading digits yields 0.
pub(crate) fn parse_integer(text: &str) -> i64 {
    let bytes = text.as_bytes();
    let mut pos = 0;
    let negative = match bytes.first() {
        Some(b'-') => {
            pos = 1;
            true
        }
        Some(b'+') => {
            pos = 1;
            false
        }
        _ => false,
    };

    let mut magnitude: i64 = 0;
    while let Some(&byte) = bytes.get(pos) {
        if !byte.is_ascii_digit() {
            break;
        }
        magnitude = magnitude
            .wrapping_mul(10)
            .wrapping_add(i64::from(byte - b'0'));
        pos += 1;
    }

    if negative { magnitude.wrapping_neg() } else { magnitude }
}

/// Parses the longest leading prefix that forms a decimal float.
///
/// Handles an optional sign, integer digits, a fractional part, and an
/// exponent. A dangling `.` or `e` is not consumed. No-number text yields 0.
pub(crate) fn parse_float(text: &str) -> f64 {
    let bytes = text.as_bytes();
    let mut pos = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos = 1;
    }

    let digits_from = |bytes: &[u8], mut at: usize| {
        while bytes.get(at).is_some_and(u8::is_ascii_digit) {
            at += 1;
        }
        at
    };

    let int_end = digits_from(bytes, pos);
    let mut end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(bytes, end + 1);
        if frac_end > end + 1 {
            end = frac_end;
        }
    }
    if end == pos {
        // Neither integer nor fractional digits: not a number.
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = digits_from(bytes, exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    text[..end].parse().unwrap_or(0.0)
}
