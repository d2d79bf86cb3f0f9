//! Whole-file reads into NUL-terminated buffers.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Read the whole file at `path` into a buffer and append a null byte.
///
/// The returned buffer can be handed directly to the splitting and parsing
/// routines. An empty file yields `[0]`.
pub fn read_entire_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let mut buffer = fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    buffer.push(0);
    Ok(buffer)
}
