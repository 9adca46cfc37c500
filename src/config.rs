//! Configuration module.
//!
//! This module defines the command-line interface (CLI) for the vendoring tool using `clap`.
//! It handles parsing the vendor source directory, the output directory and the log level.

use clap::Parser;
use std::path::PathBuf;

/// Vendor directory used when none is given, relative to `$HOME`.
pub const DEFAULT_VENDOR_DIR: &str = "src/zlib-ng";

/// Flattens a zlib-ng source tree into a single directory with `zng_`-tagged globals.
///
/// Architecture sources under `arch/x86` become `arch-x86-*` files, top-level sources keep
/// their names, and the gzip helpers are copied untouched.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// zlib-ng source directory (defaults to $HOME/src/zlib-ng)
    pub vendor_dir: Option<PathBuf>,

    /// Output directory
    #[arg(
        short,
        long,
        default_value = ".",
        help = "Directory receiving the flattened files; the vendor directory itself rewrites the tree in place"
    )]
    pub output_dir: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub log_level: String,
}

impl Config {
    /// The vendor directory, falling back to `$HOME/src/zlib-ng`.
    pub fn resolve_vendor_dir(&self) -> Option<PathBuf> {
        self.vendor_dir.clone().or_else(|| {
            std::env::var_os("HOME").map(|home| PathBuf::from(home).join(DEFAULT_VENDOR_DIR))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positional_and_flags() {
        let config = Config::parse_from(["zngvendor", "/tmp/zlib-ng", "-o", "out", "--log-level", "debug"]);
        assert_eq!(config.vendor_dir, Some(PathBuf::from("/tmp/zlib-ng")));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn defaults() {
        let config = Config::parse_from(["zngvendor"]);
        assert_eq!(config.vendor_dir, None);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn explicit_dir_wins_over_home() {
        let config = Config::parse_from(["zngvendor", "vendor"]);
        assert_eq!(config.resolve_vendor_dir(), Some(PathBuf::from("vendor")));
    }
}
