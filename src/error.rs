//! Error types for stutils.

use std::path::PathBuf;

use thiserror::Error;

/// Error type shared by every fallible operation in the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The caller-provided output array cannot hold every token plus the
    /// terminating `None` entry.
    #[error("output capacity exceeded: {capacity} slots cannot hold all tokens and the terminator")]
    CapacityExceeded { capacity: usize },

    /// Numeric base outside `2..=36`.
    #[error("invalid base {0}: expected a value in 2..=36")]
    InvalidBase(u32),

    /// Opening or reading a file failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias using the crate Error type.
pub type Result<T> = std::result::Result<T, Error>;
