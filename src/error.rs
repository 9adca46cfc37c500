//! Error types.
//!
//! Every failure is fatal to the run. Each variant carries the path that
//! caused it so the maintainer can see exactly where vendoring stopped.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VendorError {
    /// The vendor root, the architecture subdirectory or a metadata file is absent.
    #[error("input not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid glob pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// Two distinct sources would flatten onto the same destination name.
    #[error("duplicate destination {name}: {} and {}", first.display(), second.display())]
    DuplicateDestination {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("path has no usable file name: {}", path.display())]
    InvalidFileName { path: PathBuf },
}

impl VendorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        VendorError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, VendorError>;
