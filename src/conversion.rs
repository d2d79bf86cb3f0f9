//! Numeric conversion: signed integers in bases 2 through 36.

use crate::error::{Error, Result};
use crate::str::logical;

/// Smallest and largest accepted numeric base.
pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

/// Result of a string-to-integer conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parsed<T> {
    /// Converted value, clamped to the type's bounds on overflow.
    pub value: T,
    /// Offset of the first byte that was not consumed.
    pub end: usize,
    /// True when the numeral did not fit and `value` was clamped.
    pub saturated: bool,
}

/// Convert the start of `text` to an `i32` in the given base
///
/// Accepts one optional `+` or `-`, then consumes digits for as long as
/// they are valid in `base` (letters are case-insensitive and worth 10
/// through 35). Parsing stops at the first other byte, at the null
/// terminator, or at the end of the slice. No whitespace is skipped.
///
/// If no digit follows, the value is 0 and `end` points just past the sign
/// (or at 0 without one). A numeral outside the `i32` range saturates to
/// `i32::MIN` / `i32::MAX`; the remaining digits are still consumed.
///
/// # Examples
/// ```
/// use stutils::conversion::parse_int;
///
/// let p = parse_int(b"-ff\0", 16).unwrap();
/// assert_eq!((p.value, p.end), (-255, 3));
///
/// let p = parse_int(b"12abc", 10).unwrap();
/// assert_eq!((p.value, p.end), (12, 2));
///
/// assert!(parse_int(b"1", 1).is_err());
/// ```
pub fn parse_int(text: &[u8], base: u32) -> Result<Parsed<i32>> {
    check_base(base)?;
    let p = parse_signed(text, base, i32::MAX as u64);
    Ok(Parsed {
        value: p.value as i32,
        end: p.end,
        saturated: p.saturated,
    })
}

/// Convert the start of `text` to an `i64` in the given base
///
/// Same rules as [`parse_int`], saturating at the `i64` bounds.
pub fn parse_long(text: &[u8], base: u32) -> Result<Parsed<i64>> {
    check_base(base)?;
    Ok(parse_signed(text, base, i64::MAX as u64))
}

/// Convert a base-10 string to an `i32`, ignoring where parsing stopped.
///
/// # Examples
/// ```
/// use stutils::conversion::to_int;
/// assert_eq!(to_int(b"+42 apples"), 42);
/// assert_eq!(to_int(b"apples"), 0);
/// ```
pub fn to_int(text: &[u8]) -> i32 {
    parse_signed(text, 10, i32::MAX as u64).value as i32
}

fn check_base(base: u32) -> Result<()> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(Error::InvalidBase(base))
    }
}

/// Shared conversion loop. `max` is the largest positive value of the
/// target type; negative numerals may reach `max + 1` in magnitude.
/// `base` must already be validated.
fn parse_signed(text: &[u8], base: u32, max: u64) -> Parsed<i64> {
    let text = logical(text);

    let (negative, mut i) = match text.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };

    let limit = if negative { max + 1 } else { max };
    let base64 = u64::from(base);
    let cutoff = limit / base64;
    let cutlim = limit % base64;

    let mut acc: u64 = 0;
    let mut saturated = false;

    while let Some(digit) = text.get(i).and_then(|&c| char::from(c).to_digit(base)) {
        let digit = u64::from(digit);
        if !saturated {
            if acc > cutoff || (acc == cutoff && digit > cutlim) {
                saturated = true;
                acc = limit;
            } else {
                acc = acc * base64 + digit;
            }
        }
        i += 1;
    }

    let value = if negative {
        (acc as i64).wrapping_neg()
    } else {
        acc as i64
    };

    Parsed {
        value,
        end: i,
        saturated,
    }
}
