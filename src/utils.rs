//! Utility functions.

use std::path::Path;

use crate::error::{Result, VendorError};

/// Returns the UTF-8 base name of `path`.
pub fn base_name(path: &Path) -> Result<&str> {
    path.file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| VendorError::InvalidFileName {
            path: path.to_path_buf(),
        })
}

/// True for `.c` and `.h` files.
pub fn is_c_source(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("c" | "h"))
}
