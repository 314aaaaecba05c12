//! Utility modules

pub mod fuzzy;
pub mod jaccard;
pub mod levenshtein;

pub use fuzzy::{
    find_best_match, find_matches, fold_case, rank_matches, similarity, Blend, FuzzyMatch,
    DEFAULT_LIMIT, DEFAULT_MIN_SCORE,
};
pub use jaccard::{jaccard_similarity, tokenize};
pub use levenshtein::levenshtein;
