//! File rewriting.
//!
//! This module handles writing each flattened file: either a line-by-line pass through a
//! pattern table, or a byte-for-byte copy for files that must not be touched.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{Result, VendorError};
use crate::pattern::PatternTable;

/// Outcome of rewriting one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteStats {
    /// Lines read (and written).
    pub lines: usize,
    /// Lines altered by at least one pattern.
    pub changed: usize,
}

/// Reads `source` as lines, keeping each line's terminator.
fn read_lines(source: &Path) -> Result<Vec<String>> {
    let file = File::open(source).map_err(|e| VendorError::io(source, e))?;
    let mut reader = BufReader::new(file);
    let mut lines = Vec::new();
    loop {
        let mut line = String::new();
        let n = reader
            .read_line(&mut line)
            .map_err(|e| VendorError::io(source, e))?;
        if n == 0 {
            break;
        }
        lines.push(line);
    }
    Ok(lines)
}

/// Rewrites `source` into `destination` through `table`.
///
/// The destination is always written, even when nothing matched, and any existing file
/// there is replaced. The source is read in full first, so `source` and `destination`
/// may be the same path.
pub fn rewrite(source: &Path, destination: &Path, table: &PatternTable) -> Result<RewriteStats> {
    let lines = read_lines(source)?;

    let file = File::create(destination).map_err(|e| VendorError::io(destination, e))?;
    let mut writer = BufWriter::new(file);
    let mut stats = RewriteStats {
        lines: lines.len(),
        changed: 0,
    };
    for line in &lines {
        let out = table.apply(line);
        if out != line.as_str() {
            stats.changed += 1;
        }
        writer
            .write_all(out.as_bytes())
            .map_err(|e| VendorError::io(destination, e))?;
    }
    writer.flush().map_err(|e| VendorError::io(destination, e))?;

    Ok(stats)
}

/// Copies `source` to `destination` unchanged. Returns the number of bytes copied.
///
/// Like `rewrite`, the source is read in full before the destination is truncated, so
/// copying a file onto itself leaves it intact.
pub fn copy_verbatim(source: &Path, destination: &Path) -> Result<u64> {
    let bytes = fs::read(source).map_err(|e| VendorError::io(source, e))?;
    fs::write(destination, &bytes).map_err(|e| VendorError::io(destination, e))?;
    Ok(bytes.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Pattern;
    use tempfile::TempDir;

    fn table(patterns: &[(&'static str, &'static str)]) -> PatternTable {
        PatternTable::new(
            "test",
            patterns.iter().map(|&(f, t)| Pattern::new(f, t)).collect(),
        )
    }

    #[test]
    fn rewrite_counts_changed_lines() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("in.c");
        let dst = dir.path().join("out.c");
        fs::write(&src, "void zcalloc(void);\nint x;\nzcalloc(1);\n").unwrap();

        let stats = rewrite(&src, &dst, &table(&[("zcalloc", "zng_zcalloc")])).unwrap();
        assert_eq!(stats, RewriteStats { lines: 3, changed: 2 });
        assert_eq!(
            fs::read_to_string(&dst).unwrap(),
            "void zng_zcalloc(void);\nint x;\nzng_zcalloc(1);\n"
        );
    }

    #[test]
    fn terminators_are_preserved() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("in.c");
        let dst = dir.path().join("out.c");
        fs::write(&src, "a\r\nb\r\nlast a").unwrap();

        let stats = rewrite(&src, &dst, &table(&[("a", "b")])).unwrap();
        assert_eq!(stats.lines, 3);
        assert_eq!(fs::read_to_string(&dst).unwrap(), "b\r\nb\r\nlbst b");
    }

    #[test]
    fn unmatched_file_is_still_written() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("in.c");
        let dst = dir.path().join("out.c");
        fs::write(&src, "int x;\n").unwrap();

        let stats = rewrite(&src, &dst, &table(&[("zcalloc", "zng_zcalloc")])).unwrap();
        assert_eq!(stats.changed, 0);
        assert_eq!(fs::read_to_string(&dst).unwrap(), "int x;\n");
    }

    #[test]
    fn rewrite_in_place() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deflate.c");
        fs::write(&path, "#include \"arch/x86/x86.h\"\n").unwrap();

        rewrite(&path, &path, &table(&[("arch/x86/", "./")])).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "#include \"./x86.h\"\n");
    }

    #[test]
    fn missing_source_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = rewrite(
            &dir.path().join("missing.c"),
            &dir.path().join("out.c"),
            &table(&[("a", "b")]),
        )
        .unwrap_err();
        assert!(matches!(err, VendorError::Io { path, .. } if path.ends_with("missing.c")));
    }

    #[test]
    fn unwritable_destination_is_io_error() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("in.c");
        fs::write(&src, "a\n").unwrap();
        let dst = dir.path().join("no/such/dir/out.c");

        let err = rewrite(&src, &dst, &table(&[("a", "b")])).unwrap_err();
        assert!(matches!(err, VendorError::Io { path, .. } if path == dst));
    }

    #[test]
    fn copy_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("gzread.c");
        let dst = dir.path().join("copy.c");
        let bytes = b"zcalloc\r\n\xff\xfe binary tail";
        fs::write(&src, bytes).unwrap();

        let n = copy_verbatim(&src, &dst).unwrap();
        assert_eq!(n, bytes.len() as u64);
        assert_eq!(fs::read(&dst).unwrap(), bytes);
    }

    #[test]
    fn copy_onto_itself_keeps_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gzlib.c");
        let content = "/* gzlib */\nint a;\n";
        fs::write(&path, content).unwrap();

        let n = copy_verbatim(&path, &path).unwrap();
        assert_eq!(n, content.len() as u64);
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn copy_read_failure_names_source() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("gzguts.h");
        fs::create_dir(&src).unwrap();
        let dst = dir.path().join("out.h");

        let err = copy_verbatim(&src, &dst).unwrap_err();
        assert!(matches!(err, VendorError::Io { ref path, .. } if *path == src));
        assert!(!dst.exists());
    }

    #[test]
    fn copy_missing_source_names_source() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("gzwrite.c");
        let err = copy_verbatim(&src, &dir.path().join("out.c")).unwrap_err();
        assert!(matches!(err, VendorError::Io { path, .. } if path == src));
    }

    #[test]
    fn copy_write_failure_names_destination() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("gzread.c");
        fs::write(&src, "x\n").unwrap();
        let dst = dir.path().join("no/such/dir/gzread.c");

        let err = copy_verbatim(&src, &dst).unwrap_err();
        assert!(matches!(err, VendorError::Io { path, .. } if path == dst));
    }
}
