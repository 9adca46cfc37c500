//! Vendoring driver.
//!
//! This module contains the `Vendorer` struct which orchestrates one run:
//! 1. Planning: enumerate and classify the vendor tree (see `flatten`).
//! 2. Rewriting: push each included source through its pattern table.
//! 3. Copying: copy excluded sources and the metadata files byte-for-byte.
//!
//! Files are processed one at a time, and the first failure aborts the run: a half-patched
//! tree must not reach the compiler.

use std::path::Path;

use crate::arch::Architecture;
use crate::catalog::{top_level_table, ExclusionSet, GZIP_HELPERS};
use crate::error::Result;
use crate::flatten::{self, FileRecord, Transform};
use crate::pattern::PatternTable;
use crate::rewriter;

/// Totals for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub rewritten: usize,
    pub copied: usize,
    /// Rewritten files where no pattern fired.
    pub unmatched: usize,
    pub changed_lines: usize,
}

pub struct Vendorer<A: Architecture> {
    arch: A,
    exclusions: ExclusionSet,
    arch_table: PatternTable,
    top_level_table: PatternTable,
}

impl<A: Architecture> Vendorer<A> {
    /// Builds both pattern tables once for the given backend.
    pub fn new(arch: A) -> Self {
        let arch_table = arch.pattern_table();
        let top_level_table = top_level_table(&arch);
        Self {
            arch,
            exclusions: GZIP_HELPERS,
            arch_table,
            top_level_table,
        }
    }

    pub fn arch_table(&self) -> &PatternTable {
        &self.arch_table
    }

    pub fn top_level_table(&self) -> &PatternTable {
        &self.top_level_table
    }

    pub fn plan(&self, root: &Path) -> Result<Vec<FileRecord>> {
        flatten::plan(root, &self.arch, &self.exclusions)
    }

    fn table_for(&self, transform: Transform) -> Option<&PatternTable> {
        match transform {
            Transform::Verbatim => None,
            Transform::Arch => Some(&self.arch_table),
            Transform::TopLevel => Some(&self.top_level_table),
        }
    }

    /// Flattens the vendor tree at `root` into `output_dir`.
    pub fn run(&self, root: &Path, output_dir: &Path) -> Result<Summary> {
        let records = self.plan(root)?;
        tracing::debug!(
            "planned {} files from {} ({} backend)",
            records.len(),
            root.display(),
            self.arch.name()
        );

        let mut summary = Summary::default();
        for record in &records {
            let destination = output_dir.join(&record.destination);
            match self.table_for(record.transform) {
                None => {
                    let bytes = rewriter::copy_verbatim(&record.source, &destination)?;
                    tracing::info!(
                        "copy {} -> {} ({} bytes)",
                        record.source.display(),
                        destination.display(),
                        bytes
                    );
                    summary.copied += 1;
                }
                Some(table) => {
                    let stats = rewriter::rewrite(&record.source, &destination, table)?;
                    tracing::info!(
                        "rewrite {} -> {} [{}] ({}/{} lines changed)",
                        record.source.display(),
                        destination.display(),
                        table.name(),
                        stats.changed,
                        stats.lines
                    );
                    if stats.changed == 0 {
                        tracing::debug!("no pattern matched in {}", record.source.display());
                        summary.unmatched += 1;
                    }
                    summary.rewritten += 1;
                    summary.changed_lines += stats.changed;
                }
            }
        }

        tracing::info!(
            "vendored {} files ({} rewritten, {} copied, {} lines changed)",
            records.len(),
            summary.rewritten,
            summary.copied,
            summary.changed_lines
        );
        Ok(summary)
    }
}
