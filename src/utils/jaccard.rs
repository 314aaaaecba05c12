//! Token-set Jaccard similarity

use std::collections::HashSet;

/// Lower-case `text` and split it on runs of whitespace into a token set.
pub fn tokenize(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// `|A ∩ B| / |A ∪ B|` over the whitespace token sets of `a` and `b`.
///
/// Two empty token sets are a perfect match (1.0); one empty set against a
/// non-empty one scores 0.0. The result is never NaN.
pub fn jaccard_similarity(a: &str, b: &str) -> f64 {
    let set_a = tokenize(a);
    let set_b = tokenize(b);

    match (set_a.is_empty(), set_b.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        (false, false) => {}
    }

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.len() + set_b.len() - intersection;

    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_collapses_case_and_duplicates() {
        let tokens = tokenize("  Customer\tSUCCESS customer\n");
        assert_eq!(tokens.len(), 2);
        assert!(tokens.contains("customer"));
        assert!(tokens.contains("success"));
    }

    #[test]
    fn test_partial_overlap() {
        let score = jaccard_similarity("customer success", "Customer Success Team");
        assert!((score - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_order_is_irrelevant() {
        assert_eq!(jaccard_similarity("acme corp", "Corp ACME"), 1.0);
    }

    #[test]
    fn test_disjoint() {
        assert_eq!(jaccard_similarity("amazon", "ebay"), 0.0);
    }

    #[test]
    fn test_empty_sets() {
        assert_eq!(jaccard_similarity("", ""), 1.0);
        assert_eq!(jaccard_similarity("   ", "\t"), 1.0);
        assert_eq!(jaccard_similarity("", "ebay"), 0.0);
        assert_eq!(jaccard_similarity("ebay", " "), 0.0);
    }
}
