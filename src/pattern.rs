//! Literal substitution patterns.
//!
//! A `PatternTable` is an ordered list of `(from, to)` string pairs. Each line
//! is run through every pattern in table order; a pattern replaces all
//! non-overlapping occurrences of `from` in the line as it stands after the
//! previous patterns, so later entries see the output of earlier ones. A
//! pattern's own output is never rescanned for itself.

use std::borrow::Cow;

/// A single literal rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub from: &'static str,
    pub to: &'static str,
}

impl Pattern {
    pub const fn new(from: &'static str, to: &'static str) -> Self {
        Self { from, to }
    }

    /// True when applying this pattern twice gives the same result as once.
    pub fn is_projection(&self) -> bool {
        !self.to.contains(self.from)
    }
}

/// An ordered, named list of patterns.
#[derive(Debug, Clone)]
pub struct PatternTable {
    name: &'static str,
    patterns: Vec<Pattern>,
}

impl PatternTable {
    /// Creates a table. An empty `from` would match between every character,
    /// so it is rejected.
    pub fn new(name: &'static str, patterns: Vec<Pattern>) -> Self {
        assert!(
            patterns.iter().all(|p| !p.from.is_empty()),
            "pattern table {} contains an empty match string",
            name
        );
        Self { name, patterns }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Runs one line through the whole table.
    ///
    /// Returns the line borrowed when no pattern matched.
    pub fn apply<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let mut current = Cow::Borrowed(line);
        for pattern in &self.patterns {
            if current.contains(pattern.from) {
                current = Cow::Owned(current.replace(pattern.from, pattern.to));
            }
        }
        current
    }
}
