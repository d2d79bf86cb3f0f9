//! In-place string splitting.
//!
//! [`split`] partitions a NUL-terminated buffer into tokens and writes a
//! NUL byte over the delimiter that ends each token, so every token is a
//! NUL-terminated string inside the original buffer afterwards. Tokens are
//! reported as [`Span`]s (`start`, `len`) rather than references, so the
//! caller keeps full ownership of the buffer.
//!
//! A leading run of delimiters is skipped like any other run: `",a"` yields
//! the single token `"a"`.

use crate::error::{Error, Result};
use crate::token::Tokenizer;

/// Position of a token inside its buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub len: usize,
}

impl Span {
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Offset one past the last byte of the token.
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    /// Resolve the span against the buffer it was produced from.
    ///
    /// # Panics
    /// Panics if the span lies outside `buffer`.
    pub fn get<'a>(&self, buffer: &'a [u8]) -> &'a [u8] {
        &buffer[self.start..self.end()]
    }
}

/// Split `buffer` on any byte of `delimiters`, in place
///
/// The buffer is scanned up to its first null byte. The delimiter directly
/// after each token is overwritten with 0; the rest of a delimiter run is
/// left as is. Consecutive, leading and trailing delimiters never produce
/// empty tokens. An empty delimiter set yields the whole string as one
/// token.
///
/// **This destroys the original content at the overwritten positions.**
/// Use [`split_owned`] to keep the input intact.
///
/// # Examples
/// ```
/// use stutils::split::{split, tokens};
///
/// let mut buf = *b"a,,b,c\0";
/// let spans = split(&mut buf, b",");
/// let parts: Vec<&[u8]> = tokens(&buf, &spans).collect();
/// assert_eq!(parts, vec![&b"a"[..], &b"b"[..], &b"c"[..]]);
/// assert_eq!(&buf, b"a\0,b\0c\0");
/// ```
pub fn split(buffer: &mut [u8], delimiters: &[u8]) -> Vec<Span> {
    let mut tok = Tokenizer::new(buffer, delimiters);
    let spans: Vec<Span> = std::iter::from_fn(|| tok.next_span()).collect();

    for span in &spans {
        terminate(buffer, span.end());
    }

    spans
}

/// Split `buffer` into a caller-provided, fixed-capacity output array
///
/// Spans are written in order and followed by a `None` terminator entry.
/// Returns the number of tokens. Fails with [`Error::CapacityExceeded`]
/// when `out` cannot hold every token plus the terminator; in that case
/// neither the buffer nor `out` is modified.
///
/// # Examples
/// ```
/// use stutils::split::{split_into, Span};
///
/// let mut buf = *b"one two\0";
/// let mut out = [None; 3];
/// assert_eq!(split_into(&mut buf, b" ", &mut out).unwrap(), 2);
/// assert_eq!(out, [Some(Span::new(0, 3)), Some(Span::new(4, 3)), None]);
///
/// let mut small = [None; 2];
/// assert!(split_into(&mut buf, b" ", &mut small).is_err());
/// assert_eq!(small, [None, None]);
/// ```
pub fn split_into(buffer: &mut [u8], delimiters: &[u8], out: &mut [Option<Span>]) -> Result<usize> {
    let capacity = out.len();

    // One slot is reserved for the terminator
    let count = Tokenizer::new(buffer, delimiters).count();
    if count >= capacity {
        return Err(Error::CapacityExceeded { capacity });
    }

    let mut tok = Tokenizer::new(buffer, delimiters);
    for slot in &mut out[..count] {
        *slot = tok.next_span();
    }
    out[count] = None;

    for span in out[..count].iter().flatten() {
        terminate(buffer, span.end());
    }

    Ok(count)
}

/// Split `text` without modifying it, returning owned copies of the tokens.
pub fn split_owned(text: &[u8], delimiters: &[u8]) -> Vec<Vec<u8>> {
    Tokenizer::new(text, delimiters).map(<[u8]>::to_vec).collect()
}

/// Resolve spans produced by [`split`] into slices of `buffer`.
pub fn tokens<'a>(buffer: &'a [u8], spans: &'a [Span]) -> impl Iterator<Item = &'a [u8]> {
    spans.iter().map(move |span| span.get(buffer))
}

fn terminate(buffer: &mut [u8], end: usize) {
    if let Some(b) = buffer.get_mut(end) {
        *b = 0;
    }
}
