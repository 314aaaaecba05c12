//! Fuzzy matching utilities for name lookups
//!
//! Blends normalized Levenshtein similarity with whitespace-token Jaccard
//! similarity, and ranks candidate names (accounts, merchants) against a
//! loosely typed query.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::jaccard::jaccard_similarity;
use super::levenshtein::levenshtein;
use crate::error::{MatchError, MatchResult};

/// Minimum blended score a candidate needs to be returned
pub const DEFAULT_MIN_SCORE: f64 = 0.3;

/// Number of matches returned when the caller does not ask for more
pub const DEFAULT_LIMIT: usize = 3;

/// Result of a fuzzy match with the matched value and score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyMatch {
    pub value: String,
    pub score: f64,
    /// Position of the candidate in the input list
    pub index: usize,
}

/// Fold case so both sub-metrics see the same text
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Weights for combining the edit-distance and token-overlap sub-scores.
///
/// The default is an even 50/50 blend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Blend {
    pub edit_weight: f64,
    pub token_weight: f64,
}

impl Default for Blend {
    fn default() -> Self {
        Self {
            edit_weight: 0.5,
            token_weight: 0.5,
        }
    }
}

impl Blend {
    /// Build a blend, rejecting negative, non-finite or all-zero weights
    pub fn new(edit_weight: f64, token_weight: f64) -> MatchResult<Self> {
        let blend = Self {
            edit_weight,
            token_weight,
        };
        blend.validate()?;
        Ok(blend)
    }

    pub fn validate(&self) -> MatchResult<()> {
        for (name, w) in [("edit", self.edit_weight), ("token", self.token_weight)] {
            if !w.is_finite() || w < 0.0 {
                return Err(MatchError::InvalidWeights(format!(
                    "{} weight must be finite and non-negative, got {}",
                    name, w
                )));
            }
        }
        let total = self.edit_weight + self.token_weight;
        if total <= 0.0 {
            return Err(MatchError::InvalidWeights(
                "at least one weight must be positive".to_string(),
            ));
        }
        if !total.is_finite() {
            return Err(MatchError::InvalidWeights(format!(
                "weights must sum to a finite value, got {} + {}",
                self.edit_weight, self.token_weight
            )));
        }
        Ok(())
    }

    /// Weights scaled to sum to one; unusable weights fall back to the even blend
    fn normalized(&self) -> (f64, f64) {
        let total = self.edit_weight + self.token_weight;
        if self.validate().is_err() {
            let even = Self::default();
            return (even.edit_weight, even.token_weight);
        }
        (self.edit_weight / total, self.token_weight / total)
    }

    /// Blended similarity of `a` and `b` in [0, 1].
    ///
    /// Both inputs are case-folded before either sub-metric runs.
    pub fn score(&self, a: &str, b: &str) -> f64 {
        let a = fold_case(a);
        let b = fold_case(b);

        let max_len = a.chars().count().max(b.chars().count());
        if max_len == 0 {
            return 1.0;
        }

        let edit_sim = 1.0 - levenshtein(&a, &b) as f64 / max_len as f64;
        let token_sim = jaccard_similarity(&a, &b);

        let (edit_weight, token_weight) = self.normalized();
        // weights are finite and sum to one here; clamp only absorbs rounding
        (edit_weight * edit_sim + token_weight * token_sim).clamp(0.0, 1.0)
    }

    /// Score every candidate, keep those at or above `min_score`, best first.
    ///
    /// Ties keep input order. A NaN `min_score` keeps nothing.
    pub fn find_matches<S: AsRef<str>>(
        &self,
        query: &str,
        candidates: &[S],
        min_score: f64,
        limit: usize,
    ) -> Vec<FuzzyMatch> {
        if limit == 0 || candidates.is_empty() {
            return Vec::new();
        }

        let query = fold_case(query);

        let mut matches: Vec<FuzzyMatch> = candidates
            .iter()
            .enumerate()
            .filter_map(|(index, candidate)| {
                let candidate = candidate.as_ref();
                let score = self.score(&query, candidate);
                (score >= min_score).then(|| FuzzyMatch {
                    value: candidate.to_string(),
                    score,
                    index,
                })
            })
            .collect();

        // sort_by is stable, so equal scores stay in input order
        matches.sort_by(|a, b| b.score.total_cmp(&a.score));
        matches.truncate(limit);

        debug!(
            "Fuzzy match '{}': {} candidates, {} kept (min_score={}, limit={})",
            query,
            candidates.len(),
            matches.len(),
            min_score,
            limit
        );

        matches
    }
}

/// Calculate blended similarity between two strings (even weights)
pub fn similarity(a: &str, b: &str) -> f64 {
    Blend::default().score(a, b)
}

/// Find matches in a list of candidates
///
/// Returns up to `limit` matches scoring at least `min_score`, best first.
pub fn find_matches<S: AsRef<str>>(
    query: &str,
    candidates: &[S],
    min_score: f64,
    limit: usize,
) -> Vec<FuzzyMatch> {
    Blend::default().find_matches(query, candidates, min_score, limit)
}

/// Candidate names only, best match first
pub fn rank_matches<S: AsRef<str>>(
    query: &str,
    candidates: &[S],
    min_score: f64,
    limit: usize,
) -> Vec<String> {
    find_matches(query, candidates, min_score, limit)
        .into_iter()
        .map(|m| m.value)
        .collect()
}

/// Find the best match above a minimum score
///
/// Returns None if no match meets the cutoff
pub fn find_best_match<S: AsRef<str>>(
    query: &str,
    candidates: &[S],
    min_score: f64,
) -> Option<FuzzyMatch> {
    find_matches(query, candidates, min_score, 1).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        for s in ["", " ", "ebay", "Customer Success Team", "café"] {
            assert_eq!(similarity(s, s), 1.0, "identity failed for {:?}", s);
        }
    }

    #[test]
    fn test_case_folding_applies_to_both_metrics() {
        assert_eq!(similarity("eBay", "ebay"), 1.0);
        assert_eq!(similarity("ACME Corp", "acme corp"), 1.0);
    }

    #[test]
    fn test_monotonic_degradation() {
        let same = similarity("hello", "hello");
        let close = similarity("hello", "hallo");
        let far = similarity("hello", "xyz");
        assert!(same > close);
        assert!(close > far);
        assert!((close - 0.4).abs() < 1e-9);
        assert_eq!(far, 0.0);
    }

    #[test]
    fn test_one_side_empty() {
        assert_eq!(similarity("", "ebay"), 0.0);
    }

    #[test]
    fn test_custom_blend() {
        let edit_only = Blend::new(1.0, 0.0).unwrap();
        assert!((edit_only.score("hello", "hallo") - 0.8).abs() < 1e-9);

        let token_only = Blend::new(0.0, 2.0).unwrap();
        assert_eq!(token_only.score("acme corp", "corp acme"), 1.0);
    }

    #[test]
    fn test_invalid_blend() {
        assert!(matches!(
            Blend::new(0.0, 0.0),
            Err(MatchError::InvalidWeights(_))
        ));
        assert!(Blend::new(-0.1, 1.0).is_err());
        assert!(Blend::new(f64::NAN, 1.0).is_err());
        assert!(Blend::new(0.5, f64::INFINITY).is_err());
        assert!(Blend::new(1e308, 1e308).is_err());
    }

    #[test]
    fn test_unusable_weights_score_as_even_blend() {
        let even = similarity("hello", "hallo");

        let huge = Blend {
            edit_weight: 1e308,
            token_weight: 1e308,
        };
        assert_eq!(huge.score("ebay", "ebay"), 1.0);
        assert_eq!(huge.score("hello", "hallo"), even);

        let zero = Blend {
            edit_weight: 0.0,
            token_weight: 0.0,
        };
        assert_eq!(zero.score("a", "b"), similarity("a", "b"));
        assert!(!zero.score("a", "b").is_nan());

        let nan = Blend {
            edit_weight: f64::NAN,
            token_weight: 0.5,
        };
        assert_eq!(nan.score("hello", "hallo"), even);
        assert_eq!(
            nan.find_matches("ebay", &["ebay"], DEFAULT_MIN_SCORE, DEFAULT_LIMIT)
                .len(),
            1
        );
    }

    #[test]
    fn test_find_matches() {
        let candidates = vec!["eBay", "Ebuyer", "Amazon"];

        let matches = find_matches("ebay", &candidates, DEFAULT_MIN_SCORE, DEFAULT_LIMIT);
        assert!(!matches.is_empty());
        assert_eq!(matches[0].value, "eBay");
        assert_eq!(matches[0].index, 0);
        assert!(matches[0].score > DEFAULT_MIN_SCORE);
        assert!(matches.iter().all(|m| m.value != "Amazon"));
    }

    #[test]
    fn test_find_best_match() {
        let candidates = vec!["Globex Inc".to_string(), "Initech".to_string()];

        let best = find_best_match("globex", &candidates, DEFAULT_MIN_SCORE);
        assert!(best.is_some());
        assert_eq!(best.unwrap().value, "Globex Inc");

        assert!(find_best_match("zzz", &candidates, 0.9).is_none());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let candidates = ["acme 2", "acme 1", "acme 3"];
        let ranked = rank_matches("acme", &candidates, 0.0, 10);
        assert_eq!(ranked, vec!["acme 2", "acme 1", "acme 3"]);
    }

    #[test]
    fn test_zero_limit_and_empty_candidates() {
        let empty: [&str; 0] = [];
        assert!(rank_matches("", &empty, DEFAULT_MIN_SCORE, DEFAULT_LIMIT).is_empty());
        assert!(rank_matches("ebay", &["ebay"], DEFAULT_MIN_SCORE, 0).is_empty());
    }

    #[test]
    fn test_nan_threshold_keeps_nothing() {
        assert!(find_matches("ebay", &["ebay"], f64::NAN, 3).is_empty());
    }
}
