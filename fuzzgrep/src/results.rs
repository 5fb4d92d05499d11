//! Search result types.
//!
//! A search produces one ordered list of match offsets per pattern. Offsets
//! are character indices into the searched text, unique within a pattern's
//! list, and already ordered and truncated by the engine.

use serde::Serialize;
use std::collections::HashMap;

/// Aggregated results of a search across all patterns.
#[derive(Debug, Default, Clone, Serialize)]
pub struct SearchReport {
    /// Match offsets keyed by pattern (as searched, i.e. after any case
    /// folding)
    pub matches: HashMap<String, Vec<usize>>,
    /// Total number of match offsets across all patterns
    pub total_matches: usize,
    /// Number of patterns with at least one match
    pub patterns_with_matches: usize,
}

impl SearchReport {
    /// Creates a new empty search report
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one pattern's match offsets and updates the statistics
    pub fn add_pattern_result(&mut self, pattern: String, offsets: Vec<usize>) {
        self.total_matches += offsets.len();
        if !offsets.is_empty() {
            self.patterns_with_matches += 1;
        }
        self.matches.insert(pattern, offsets);
    }

    /// Returns the match offsets recorded for `pattern`, if it was searched
    pub fn offsets(&self, pattern: &str) -> Option<&[usize]> {
        self.matches.get(pattern).map(Vec::as_slice)
    }
}
