//! Architecture abstraction.
//!
//! This module defines the `Architecture` trait, which captures everything specific to one
//! instruction-set subdirectory of the vendor tree: where it lives, how its files are renamed
//! when flattened, and which symbols its accelerated sources export. The flattener and the
//! driver stay generic while each backend supplies its own part of the pattern catalog.

use crate::pattern::{Pattern, PatternTable};

pub mod x86;

/// Relative includes from inside the subdirectory point back at the vendor root, which is
/// the flattened directory itself.
pub const PARENT_INCLUDE: Pattern = Pattern::new("\"../../", "\"./");

/// A trait representing an accelerated-path subdirectory (e.g., `arch/x86`).
pub trait Architecture {
    /// Short name used in logs and table names.
    fn name(&self) -> &'static str;

    /// Subdirectory relative to the vendor root, one level of files deep.
    fn source_dir(&self) -> &'static str;

    /// Literal prefix prepended to each base name when flattening.
    fn flattened_prefix(&self) -> &'static str;

    /// Rewrites of include paths into the flattened naming convention.
    ///
    /// The generic directory rewrite must come first; the per-header overrides that follow
    /// target its output.
    fn path_patterns(&self) -> Vec<Pattern>;

    /// Renames of every non-static symbol defined by the subdirectory's sources.
    fn symbol_patterns(&self) -> Vec<Pattern>;

    /// The table applied to the subdirectory's own sources.
    fn pattern_table(&self) -> PatternTable {
        let mut patterns = vec![PARENT_INCLUDE];
        patterns.extend(self.path_patterns());
        patterns.extend(self.symbol_patterns());
        PatternTable::new(self.name(), patterns)
    }

    /// Destination name for a file from this subdirectory.
    fn flattened_name(&self, base_name: &str) -> String {
        format!("{}{}", self.flattened_prefix(), base_name)
    }
}
