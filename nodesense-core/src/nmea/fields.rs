//! Numeric field conversion
//!
//! Lenient conversion reads the longest numeric prefix of a field and falls
//! back to zero when there is none, the way receivers' C firmware has always
//! read NMEA: `"4807.038"` is 4807.038, `"12abc"` is 12, `"abc"` is 0.
//! Strict conversion accepts a field only if all of it is numeric.
//!
//! Empty fields mean "no data" in NMEA and convert to zero in both modes.

/// Length of the leading `[+-]digits[.digits][e[+-]digits]` run
fn float_prefix_len(bytes: &[u8]) -> usize {
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(i);
    let mut digits = int_end - i;
    i = int_end;

    if bytes.get(i) == Some(&b'.') {
        let frac_end = digits_from(i + 1);
        digits += frac_end - (i + 1);
        i = frac_end;
    }

    if digits == 0 {
        return 0;
    }

    // Exponent only counts when it has digits
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_end = digits_from(j);
        if exp_end > j {
            i = exp_end;
        }
    }

    i
}

/// Length of the leading `[+-]digits` run
fn int_prefix_len(bytes: &[u8]) -> usize {
    let start = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let end = start + bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count();
    if end == start {
        0
    } else {
        end
    }
}

/// Best-effort float: numeric prefix or 0.0
pub(crate) fn lenient_f64(field: &str) -> f64 {
    let text = field.trim_start();
    let len = float_prefix_len(text.as_bytes());
    text[..len].parse().unwrap_or(0.0)
}

/// Best-effort integer: numeric prefix or 0, wrapping on overflow
pub(crate) fn lenient_i32(field: &str) -> i32 {
    let text = field.trim_start();
    let bytes = text.as_bytes();
    let len = int_prefix_len(bytes);
    if len == 0 {
        return 0;
    }

    let negative = bytes[0] == b'-';
    let magnitude = bytes[..len]
        .iter()
        .filter(|b| b.is_ascii_digit())
        .fold(0i32, |acc, b| acc.wrapping_mul(10).wrapping_add(i32::from(b - b'0')));

    if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    }
}

/// Whole-field float, `None` if anything but a number is present
pub(crate) fn strict_f64(field: &str) -> Option<f64> {
    if field.is_empty() {
        return Some(0.0);
    }
    if float_prefix_len(field.as_bytes()) != field.len() {
        return None;
    }
    field.parse().ok()
}

/// Whole-field unsigned 8-bit count, `None` if malformed or out of range
pub(crate) fn strict_u8(field: &str) -> Option<u8> {
    if field.is_empty() {
        return Some(0);
    }
    field.parse().ok()
}
