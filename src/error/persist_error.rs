use std::path::PathBuf;

use thiserror::Error;

use crate::diagnostics::Located;

/// Errors raised while saving or loading a compiled program.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The file could not be opened, read or written.
    #[error("Could not access {}: {source}", path.display())]
    Io {
        /// The file involved.
        path:   PathBuf,
        /// The underlying failure.
        source: std::io::Error,
    },
    /// The contents are not a valid compiled program.
    #[error("Malformed compiled program: {0}")]
    Format(#[from] serde_json::Error),
    /// The file was written by an incompatible format version.
    #[error("Unsupported compiled program version {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version found in the file.
        found:    u32,
        /// Version this build reads and writes.
        expected: u32,
    },
}

impl Located for PersistError {
    fn line(&self) -> Option<usize> {
        None
    }
}
