//! stutils: small utilities for C-style, NUL-terminated byte strings.

pub mod conversion;
pub mod error;
pub mod file;
pub mod search;
pub mod split;
pub mod str;
pub mod token;

pub use error::{Error, Result};
