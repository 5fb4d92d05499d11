//! Per-pattern sliding scan.
//!
//! The scan is a deliberate brute force: every character offset of the text
//! is probed with up to three distance computations against the pattern.
//! There is no index and no pruning beyond the distance threshold itself,
//! which keeps the matching semantics easy to state and test.

use tracing::{debug, trace};

use crate::distance::levenshtein_chars;

/// Scans `text` for offsets where a substring approximately matches
/// `pattern`, within `dist_threshold` edits.
///
/// Three candidate shapes are probed at each offset `i`:
/// - the prefix `text[..i]`, which records a match at offset 0;
/// - the suffix `text[i..]`, which records a match at offset `i`;
/// - the fixed window `text[i..i + pattern_len]`, when it fits, which also
///   records a match at offset `i`.
///
/// Prefixes and suffixes catch matches hugging the text's edges that a
/// fixed window misses; the window catches interior matches without paying
/// edge-length distance costs.
///
/// Returns the qualifying offsets deduplicated and in ascending order. An
/// offset that qualifies through more than one shape counts once. Ordering
/// and truncation beyond that are the engine's concern.
pub fn scan_pattern(text: &[char], pattern: &str, dist_threshold: usize) -> Vec<usize> {
    let pattern_chars: Vec<char> = pattern.chars().collect();
    trace!(
        "Scanning {} offsets for pattern '{}'",
        text.len(),
        pattern
    );

    let mut candidates: Vec<(usize, usize)> = Vec::new();

    for i in 0..text.len() {
        let prefix = &text[..i];
        let suffix = &text[i..];

        record_candidate(&mut candidates, prefix, &pattern_chars, dist_threshold, 0);
        record_candidate(&mut candidates, suffix, &pattern_chars, dist_threshold, i);

        if i + pattern_chars.len() <= text.len() {
            let window = &text[i..i + pattern_chars.len()];
            record_candidate(&mut candidates, window, &pattern_chars, dist_threshold, i);
        }
    }

    // First-seen order is ascending because the scan runs left to right.
    let mut matched: Vec<usize> = Vec::new();
    for (offset, _dist) in candidates {
        if !matched.contains(&offset) {
            matched.push(offset);
        }
    }

    debug!("Pattern '{}': {} matching offsets", pattern, matched.len());
    matched
}

/// Appends `(offset, distance)` to `candidates` when the distance between
/// `window` and `pattern` is within `max`.
fn record_candidate(
    candidates: &mut Vec<(usize, usize)>,
    window: &[char],
    pattern: &[char],
    max: usize,
    offset: usize,
) {
    let dist = levenshtein_chars(window, pattern);
    if dist <= max {
        candidates.push((offset, dist));
    }
}
