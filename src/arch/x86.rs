//! x86 architecture backend.
//!
//! Covers `arch/x86`, home of the PCLMULQDQ CRC folding and the CPUID feature probe.

use super::Architecture;
use crate::pattern::Pattern;

/// The x86 architecture backend.
pub struct X86;

const PATH_PATTERNS: &[Pattern] = &[
    Pattern::new("arch/x86/", "./"),
    // Bare includes from inside arch/x86, normalised to the form above.
    Pattern::new("\"x86.h\"", "\"./x86.h\""),
    Pattern::new("\"crc_folding.h\"", "\"./crc_folding.h\""),
    Pattern::new("\"./x86.h\"", "\"./arch-x86-x86.h\""),
    Pattern::new("\"./crc_folding.h\"", "\"./arch-x86-crc_folding.h\""),
];

const SYMBOL_PATTERNS: &[Pattern] = &[
    Pattern::new("crc_fold_", "zng_crc_fold_"),
    Pattern::new("x86_check_features", "zng_x86_check_features"),
    Pattern::new("x86_cpu_has_", "zng_x86_cpu_has_"),
];

impl Architecture for X86 {
    fn name(&self) -> &'static str {
        "x86"
    }

    fn source_dir(&self) -> &'static str {
        "arch/x86"
    }

    fn flattened_prefix(&self) -> &'static str {
        "arch-x86-"
    }

    fn path_patterns(&self) -> Vec<Pattern> {
        PATH_PATTERNS.to_vec()
    }

    fn symbol_patterns(&self) -> Vec<Pattern> {
        SYMBOL_PATTERNS.to_vec()
    }
}
