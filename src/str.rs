//! String manipulation functions
//!
//! Safe Rust versions of the basic NUL-terminated string helpers. These
//! operate on byte slices and treat 0 (null byte) as the string terminator.

/// Calculate the length of a null-terminated string
///
/// Returns the number of bytes before the first null byte (0).
/// If no null byte is found, returns the length of the slice.
///
/// # Examples
/// ```
/// use stutils::str::string_length;
/// assert_eq!(string_length(b"hello\0world"), 5);
/// assert_eq!(string_length(b"\0"), 0);
/// assert_eq!(string_length(b"hello"), 5); // no null terminator
/// ```
pub fn string_length(s: &[u8]) -> usize {
    memchr::memchr(0, s).unwrap_or(s.len())
}

/// The logical string of `s`: everything before the first null byte.
#[inline]
pub(crate) fn logical(s: &[u8]) -> &[u8] {
    &s[..string_length(s)]
}

/// Check whether a null-terminated string ends with `suffix`
///
/// Both arguments are compared up to their first null byte. An empty
/// suffix always matches.
///
/// # Examples
/// ```
/// use stutils::str::ends_with;
/// assert!(ends_with(b"stutils/main.c\0", b".c\0"));
/// assert!(!ends_with(b"main.h\0", b".c\0"));
/// assert!(ends_with(b"abc\0", b"\0"));
/// ```
pub fn ends_with(s: &[u8], suffix: &[u8]) -> bool {
    let s = logical(s);
    let suffix = logical(suffix);

    if suffix.len() > s.len() {
        return false;
    }

    s[s.len() - suffix.len()..] == *suffix
}

/// Replace every occurrence of `old` with `new`, in place
///
/// Only bytes before the first null terminator are touched. Replacing with
/// 0 truncates the logical string at the first replaced position.
/// Returns the number of bytes replaced.
///
/// # Examples
/// ```
/// use stutils::str::replace_char;
/// let mut buf = *b"a-b-c\0";
/// assert_eq!(replace_char(&mut buf, b'-', b'+'), 2);
/// assert_eq!(&buf, b"a+b+c\0");
/// ```
pub fn replace_char(s: &mut [u8], old: u8, new: u8) -> usize {
    let len = string_length(s);
    let mut replaced = 0;

    for b in &mut s[..len] {
        if *b == old {
            *b = new;
            replaced += 1;
        }
    }

    replaced
}
