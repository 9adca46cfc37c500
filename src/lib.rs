//! zlib-ng vendoring library.
//!
//! This library provides the pieces of the `zngvendor` tool, which flattens a zlib-ng source
//! tree into one directory and renames its global symbols so it can be linked next to another
//! copy of the library.
//! It is organized into several modules:
//! - `config`: CLI configuration.
//! - `arch`: Architecture-specific subdirectory and symbol patterns.
//! - `catalog`: Top-level pattern table, exclusion set and metadata files.
//! - `pattern`: Ordered literal substitution tables.
//! - `flatten`: Destination naming and classification of source files.
//! - `rewriter`: Line rewriting and verbatim copying.
//! - `vendor`: The main vendoring orchestration.

pub mod arch;
pub mod catalog;
pub mod config;
pub mod error;
pub mod flatten;
pub mod pattern;
pub mod rewriter;
pub mod utils;
pub mod vendor;
