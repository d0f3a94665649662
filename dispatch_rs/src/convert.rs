//! Raw token to typed value conversion.
//!
//! Every converter returns a [`ConvertError`] that keeps the offending input,
//! so a parsed `0` is never confused with a failed conversion. Failures are
//! also reported on the diagnostics channel.

use std::num::IntErrorKind;

use thiserror::Error;

/// Why a token could not be converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertErrorKind {
    /// Nothing to convert (empty or whitespace only).
    Empty,
    /// Not a number, or trailing characters after the number.
    Invalid,
    /// The number does not fit the target type.
    OutOfRange,
}

/// Conversion failure for a single raw token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("conversion failed, check input `{input}` ({kind:?})")]
pub struct ConvertError {
    pub input: String,
    pub kind: ConvertErrorKind,
}

impl ConvertError {
    fn new(input: &str, kind: ConvertErrorKind) -> Self {
        tracing::error!(input, ?kind, "conversion failed, check input");
        Self {
            input: input.to_string(),
            kind,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

// ============================================================================
// Integers
// ============================================================================

/// Parse a base-10 signed integer.
///
/// Leading ASCII whitespace and one sign character are accepted, anything
/// after the digits is rejected.
pub fn to_integer(raw: &str) -> Result<i64> {
    let trimmed = raw.trim_start_matches(|c: char| c.is_ascii_whitespace());
    trimmed.parse::<i64>().map_err(|err| {
        let kind = match err.kind() {
            IntErrorKind::Empty => ConvertErrorKind::Empty,
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ConvertErrorKind::OutOfRange,
            _ => ConvertErrorKind::Invalid,
        };
        ConvertError::new(raw, kind)
    })
}

/// [`to_integer`] narrowed to `i32`.
pub fn to_int(raw: &str) -> Result<i32> {
    let value = to_integer(raw)?;
    i32::try_from(value).map_err(|_| ConvertError::new(raw, ConvertErrorKind::OutOfRange))
}

/// Parse an unsigned 64-bit value.
///
/// Uses the signed 64-bit parse underneath, so magnitudes are bounded by
/// `i64::MAX` and negative input is out of range.
pub fn to_unsigned_64(raw: &str) -> Result<u64> {
    let value = to_integer(raw)?;
    u64::try_from(value).map_err(|_| ConvertError::new(raw, ConvertErrorKind::OutOfRange))
}

/// Integer conversion truncated to a single byte.
///
/// This is a lossy narrowing: `"300"` yields `44`.
pub fn to_char(raw: &str) -> Result<u8> {
    to_integer(raw).map(|value| value as u8)
}

// ============================================================================
// Floating point
// ============================================================================

/// Parse the longest floating point literal at the start of `raw`.
///
/// Trailing characters after the literal are ignored; the conversion fails
/// only when no character can be consumed. Only decimal literals are read,
/// so `"0x10"` yields `0.0`.
pub fn to_double(raw: &str) -> Result<f64> {
    let trimmed = raw.trim_start_matches(|c: char| c.is_ascii_whitespace());
    if trimmed.is_empty() {
        return Err(ConvertError::new(raw, ConvertErrorKind::Empty));
    }

    let len = float_prefix_len(trimmed);
    if len == 0 {
        return Err(ConvertError::new(raw, ConvertErrorKind::Invalid));
    }

    trimmed[..len]
        .parse::<f64>()
        .map_err(|_| ConvertError::new(raw, ConvertErrorKind::Invalid))
}

/// [`to_double`] narrowed to `f32`.
pub fn to_float(raw: &str) -> Result<f32> {
    to_double(raw).map(|value| value as f32)
}

/// Length in bytes of the float literal `s` starts with, 0 if none.
fn float_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut cursor = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        cursor += 1;
    }

    let rest = &s[cursor..];
    for word in ["infinity", "inf", "nan"] {
        let head = rest.as_bytes().get(..word.len());
        if head.is_some_and(|head| head.eq_ignore_ascii_case(word.as_bytes())) {
            return cursor + word.len();
        }
    }

    let int_start = cursor;
    while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
        cursor += 1;
    }
    let mut digits = cursor - int_start;

    if cursor < bytes.len() && bytes[cursor] == b'.' {
        let frac_start = cursor + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            cursor = frac_end;
        }
    }

    if digits == 0 {
        return 0;
    }

    // Exponent only counts when at least one digit follows it.
    if cursor < bytes.len() && matches!(bytes[cursor], b'e' | b'E') {
        let mut exp = cursor + 1;
        if exp < bytes.len() && matches!(bytes[exp], b'+' | b'-') {
            exp += 1;
        }
        let exp_digits = exp;
        while exp < bytes.len() && bytes[exp].is_ascii_digit() {
            exp += 1;
        }
        if exp > exp_digits {
            cursor = exp;
        }
    }

    cursor
}
