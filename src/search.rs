//! Character-set membership.

use crate::str::logical;

/// Check whether `c` occurs in the null-terminated string `s`
///
/// The terminator itself is never matched, so `contains_char(0, s)` is
/// always false.
///
/// # Examples
/// ```
/// use stutils::search::contains_char;
/// assert!(contains_char(b',', b",;\0"));
/// assert!(!contains_char(b'x', b",;\0"));
/// assert!(!contains_char(b'\0', b",;\0"));
/// ```
pub fn contains_char(c: u8, s: &[u8]) -> bool {
    c != 0 && memchr::memchr(c, logical(s)).is_some()
}
