//! The hand-maintained symbol catalog.
//!
//! Every entry here was added because a link against a second copy of zlib-ng collided
//! on it. A new collision is fixed by appending an entry; the engine does not check the
//! catalog for completeness.

use crate::arch::{Architecture, PARENT_INCLUDE};
use crate::pattern::{Pattern, PatternTable};

/// Globals the upstream library exports without the `zng_` tag.
const TOP_LEVEL_SYMBOLS: &[Pattern] = &[
    // Tree and block-flush internals (trees.c).
    Pattern::new("_tr_init", "zng_tr_init"),
    Pattern::new("_tr_stored_block", "zng_tr_stored_block"),
    Pattern::new("_tr_flush_block", "zng_tr_flush_block"),
    Pattern::new("_tr_flush_bits", "zng_tr_flush_bits"),
    Pattern::new("_tr_align", "zng_tr_align"),
    Pattern::new("flush_pending", "zng_flush_pending"),
    Pattern::new("fill_window", "zng_fill_window"),
    Pattern::new("read_buf", "zng_read_buf"),
    // Bit window.
    Pattern::new("bi_reverse", "zng_bi_reverse"),
    Pattern::new("bi_windup", "zng_bi_windup"),
    Pattern::new("bi_flush", "zng_bi_flush"),
    // Length and distance code tables (trees.h).
    Pattern::new("_length_code", "zng_length_code"),
    Pattern::new("_dist_code", "zng_dist_code"),
    Pattern::new("static_ltree", "zng_static_ltree"),
    Pattern::new("static_dtree", "zng_static_dtree"),
    Pattern::new("base_length", "zng_base_length"),
    Pattern::new("base_dist", "zng_base_dist"),
    // Generic fallbacks installed in the dispatch table.
    Pattern::new("adler32_c", "zng_adler32_c"),
    Pattern::new("crc32_generic", "zng_crc32_generic"),
    Pattern::new("slide_hash_c", "zng_slide_hash_c"),
    // Dispatch table. Declaration, member access and address-of are separate spellings.
    Pattern::new("struct functable_s functable", "struct functable_s zng_functable"),
    Pattern::new("functable.", "zng_functable."),
    Pattern::new("&functable", "&zng_functable"),
    // Error messages and copyright strings.
    Pattern::new("z_errmsg", "zng_errmsg"),
    Pattern::new("deflate_copyright", "zng_deflate_copyright"),
    Pattern::new("inflate_copyright", "zng_inflate_copyright"),
    // Allocator shims.
    Pattern::new("zcalloc", "zng_zcalloc"),
    Pattern::new("zcfree", "zng_zcfree"),
];

/// Undoes side effects of earlier entries. Must stay at the end of the table.
const CORRECTIONS: &[Pattern] = &[
    // "functable." also matched the header name.
    Pattern::new("\"zng_functable.h\"", "\"functable.h\""),
];

/// Builds the table applied to sources directly in the vendor root.
///
/// Top-level sources both include the architecture headers and call the accelerated
/// routines, so the architecture's path and symbol patterns come first.
pub fn top_level_table<A: Architecture>(arch: &A) -> PatternTable {
    let mut patterns = vec![PARENT_INCLUDE];
    patterns.extend(arch.path_patterns());
    patterns.extend(arch.symbol_patterns());
    patterns.extend_from_slice(TOP_LEVEL_SYMBOLS);
    patterns.extend_from_slice(CORRECTIONS);
    PatternTable::new("top-level", patterns)
}

/// Base names copied without substitution. The gzip stream helpers are not compiled into
/// the embedding and must keep the host library's ABI.
#[derive(Debug, Clone, Copy)]
pub struct ExclusionSet {
    names: &'static [&'static str],
}

impl ExclusionSet {
    pub const fn new(names: &'static [&'static str]) -> Self {
        Self { names }
    }

    /// Exact base-name match.
    pub fn contains(&self, base_name: &str) -> bool {
        self.names.iter().any(|n| *n == base_name)
    }
}

pub const GZIP_HELPERS: ExclusionSet =
    ExclusionSet::new(&["gzguts.h", "gzlib.c", "gzread.c", "gzwrite.c"]);

/// Metadata files copied verbatim: (name under the vendor root, destination name).
pub const METADATA_FILES: &[(&str, &str)] = &[
    ("LICENSE.md", "LICENSE.md"),
    ("README.md", "README-zlibng.md"),
];
