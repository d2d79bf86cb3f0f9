//! String tokenization
//!
//! A non-destructive, iterator-based tokenizer. It yields exactly the
//! tokens that [`crate::split::split`] produces, without touching the
//! input buffer.

use crate::search::contains_char;
use crate::split::Span;
use crate::str::logical;

/// Iterator-based string tokenizer
///
/// Both `data` and `delimiters` are read up to their first null byte.
/// Runs of delimiters are collapsed, so no empty tokens are produced.
///
/// # Examples
/// ```
/// use stutils::token::Tokenizer;
///
/// let mut tok = Tokenizer::new(b",hello,,world,\0", b",\0");
///
/// assert_eq!(tok.next(), Some(&b"hello"[..]));
/// assert_eq!(tok.next(), Some(&b"world"[..]));
/// assert_eq!(tok.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    data: &'a [u8],
    delimiters: &'a [u8],
    position: usize,
}

impl<'a> Tokenizer<'a> {
    /// Create a new tokenizer
    pub fn new(data: &'a [u8], delimiters: &'a [u8]) -> Self {
        Self {
            data: logical(data),
            delimiters: logical(delimiters),
            position: 0,
        }
    }

    /// Offset of the next byte the tokenizer will examine.
    pub fn position(&self) -> usize {
        self.position
    }

    fn is_delimiter(&self, c: u8) -> bool {
        contains_char(c, self.delimiters)
    }

    /// Advance to the next token and return its span within `data`.
    pub fn next_span(&mut self) -> Option<Span> {
        let data = self.data;

        // Skip the delimiter run in front of the token
        while self.position < data.len() && self.is_delimiter(data[self.position]) {
            self.position += 1;
        }

        if self.position >= data.len() {
            return None;
        }

        let start = self.position;

        while self.position < data.len() && !self.is_delimiter(data[self.position]) {
            self.position += 1;
        }

        Some(Span::new(start, self.position - start))
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let data = self.data;
        self.next_span().map(|span| span.get(data))
    }
}
