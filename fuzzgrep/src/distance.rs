//! Levenshtein edit distance, the similarity measure driving every match
//! decision in the scanner.
//!
//! The distance is computed over Unicode scalar values (`char`), never raw
//! bytes: a multi-byte character counts as a single edit unit, so offsets
//! reported by the scanner line up with character indexing of the source
//! text.

/// Computes the Levenshtein distance between two strings.
///
/// Returns the minimum number of single-character insertions, deletions,
/// or substitutions required to transform `a` into `b`.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein_chars(&a, &b)
}

/// Computes the Levenshtein distance between two character slices.
///
/// Rolls two rows sized to the shorter operand instead of materializing the
/// full DP matrix, so the working set is O(min(len)) rather than O(n * m).
pub fn levenshtein_chars(a: &[char], b: &[char]) -> usize {
    // Keep the shorter operand on the row axis; distance is symmetric.
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let n = short.len();

    if n == 0 {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];

    for (i, &lc) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &sc) in short.iter().enumerate() {
            let cost = usize::from(sc != lc);
            curr[j + 1] = (curr[j] + 1)
                .min(prev[j + 1] + 1)
                .min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
