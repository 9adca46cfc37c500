//! Path flattening.
//!
//! This module decides, for every file of the vendor tree, where it lands in the flat
//! output directory and which transform it goes through. It performs no writes; the
//! resulting records are handed to the rewriter by the driver.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::arch::Architecture;
use crate::catalog::{ExclusionSet, METADATA_FILES};
use crate::error::{Result, VendorError};
use crate::utils::{base_name, is_c_source};

/// What happens to a file on its way to the output directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Byte-for-byte copy.
    Verbatim,
    /// Rewritten with the architecture table.
    Arch,
    /// Rewritten with the top-level table.
    TopLevel,
}

/// One file to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path inside the vendor tree.
    pub source: PathBuf,
    /// File name inside the output directory.
    pub destination: String,
    pub transform: Transform,
}

/// Lists the `.c` and `.h` files directly inside `dir`, sorted.
fn list_c_sources(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(VendorError::InputNotFound {
            path: dir.to_path_buf(),
        });
    }

    // A lossy conversion would silently glob a different directory.
    let dir_str = dir.to_str().ok_or_else(|| VendorError::InvalidFileName {
        path: dir.to_path_buf(),
    })?;
    let pattern = format!("{}/*.[ch]", glob::Pattern::escape(dir_str));
    let entries = glob::glob(&pattern).map_err(|source| VendorError::InvalidGlob {
        pattern: pattern.clone(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            VendorError::io(path, e.into_error())
        })?;
        if path.is_file() && is_c_source(&path) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Records for the architecture subdirectory, renamed with the backend's prefix.
pub fn arch_sources<A: Architecture>(root: &Path, arch: &A) -> Result<Vec<FileRecord>> {
    list_c_sources(&root.join(arch.source_dir()))?
        .into_iter()
        .map(|source| {
            let destination = arch.flattened_name(base_name(&source)?);
            Ok(FileRecord {
                source,
                destination,
                transform: Transform::Arch,
            })
        })
        .collect()
}

/// Records for the sources directly in the vendor root. Excluded base names are copied.
pub fn top_level_sources(root: &Path, exclusions: &ExclusionSet) -> Result<Vec<FileRecord>> {
    list_c_sources(root)?
        .into_iter()
        .map(|source| {
            let name = base_name(&source)?;
            let transform = if exclusions.contains(name) {
                Transform::Verbatim
            } else {
                Transform::TopLevel
            };
            Ok(FileRecord {
                destination: name.to_string(),
                source,
                transform,
            })
        })
        .collect()
}

/// Records for the license and readme.
pub fn metadata_files(root: &Path) -> Result<Vec<FileRecord>> {
    METADATA_FILES
        .iter()
        .map(|(from, to)| {
            let source = root.join(from);
            if !source.is_file() {
                return Err(VendorError::InputNotFound { path: source });
            }
            Ok(FileRecord {
                source,
                destination: to.to_string(),
                transform: Transform::Verbatim,
            })
        })
        .collect()
}

/// Fails if two records share a destination name.
pub fn check_unique(records: &[FileRecord]) -> Result<()> {
    let mut seen: HashMap<&str, &Path> = HashMap::new();
    for record in records {
        if let Some(first) = seen.insert(&record.destination, &record.source) {
            return Err(VendorError::DuplicateDestination {
                name: record.destination.clone(),
                first: first.to_path_buf(),
                second: record.source.clone(),
            });
        }
    }
    Ok(())
}

/// Plans the whole run: architecture sources, then top-level sources, then metadata.
pub fn plan<A: Architecture>(
    root: &Path,
    arch: &A,
    exclusions: &ExclusionSet,
) -> Result<Vec<FileRecord>> {
    if !root.is_dir() {
        return Err(VendorError::InputNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut records = arch_sources(root, arch)?;
    records.extend(top_level_sources(root, exclusions)?);
    records.extend(metadata_files(root)?);
    check_unique(&records)?;
    Ok(records)
}
