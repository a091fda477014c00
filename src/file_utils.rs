//! Loading callable source text from files or standard input
//!
//! Input is capped at a configurable size so a stray binary or generated
//! bundle does not get pulled into memory whole.

use std::io::Read;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;

use crate::error::ReadError;

/// Default maximum input size (1MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1_000_000;

/// Global configurable max input size. Set via `set_max_file_size()`.
static MAX_FILE_SIZE: AtomicU64 = AtomicU64::new(DEFAULT_MAX_FILE_SIZE);

/// Set the maximum input size.
/// This affects all subsequent calls to `read_source_file` and `read_source_stdin`.
pub fn set_max_file_size(size: u64) {
    MAX_FILE_SIZE.store(size, Ordering::SeqCst);
}

/// Get the current maximum input size setting.
pub fn get_max_file_size() -> u64 {
    MAX_FILE_SIZE.load(Ordering::SeqCst)
}

/// Read a source file if it is within the size limit and valid UTF-8.
pub fn read_source_file(path: &Path) -> Result<String, ReadError> {
    let limit = get_max_file_size();
    let io_error = |source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let size = path.metadata().map_err(io_error)?.len();
    if size > limit {
        return Err(ReadError::TooLarge {
            path: path.to_path_buf(),
            size,
            limit,
        });
    }

    let bytes = std::fs::read(path).map_err(io_error)?;
    debug!("read {} bytes from {}", bytes.len(), path.display());

    String::from_utf8(bytes).map_err(|_| ReadError::NotUtf8 {
        path: path.to_path_buf(),
    })
}

/// Read all of `reader`, failing once the size limit is exceeded.
pub fn read_source_stdin<R: Read>(reader: R) -> Result<String, ReadError> {
    let limit = get_max_file_size();
    let mut bytes = Vec::new();
    reader
        .take(limit.saturating_add(1))
        .read_to_end(&mut bytes)
        .map_err(ReadError::Stdin)?;

    if bytes.len() as u64 > limit {
        return Err(ReadError::StdinTooLarge { limit });
    }

    String::from_utf8(bytes).map_err(|_| ReadError::StdinNotUtf8)
}
