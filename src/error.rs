//! Errors raised while loading source text for the CLI.
//!
//! Extraction itself never fails; only reading input can.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("cannot access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{}' is {size} bytes, over the {limit} byte limit", path.display())]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("'{}' is not valid UTF-8", path.display())]
    NotUtf8 { path: PathBuf },

    #[error("cannot read standard input: {0}")]
    Stdin(#[source] io::Error),

    #[error("standard input is over the {limit} byte limit")]
    StdinTooLarge { limit: u64 },

    #[error("standard input is not valid UTF-8")]
    StdinNotUtf8,
}
