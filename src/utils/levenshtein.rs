//! Levenshtein edit distance

/// Minimum number of single-character insertions, deletions or
/// substitutions turning `a` into `b`.
///
/// Characters are Unicode scalar values and are compared as given, so
/// callers wanting case-insensitive distance must fold case first.
/// Two rows of the DP table are kept; row `i` holds the distances between the
/// first `i` characters of `b` and every prefix of `a`.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Row 0: transforming the empty prefix of b costs j insertions.
    let mut prev: Vec<usize> = (0..=a.len()).collect();
    let mut curr = vec![0; a.len() + 1];

    for (i, cb) in b.iter().enumerate() {
        curr[0] = i + 1;
        for (j, ca) in a.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j]
            } else {
                let substitution = prev[j];
                let insertion = curr[j];
                let deletion = prev[j + 1];
                1 + substitution.min(insertion).min(deletion)
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[a.len()]
}
