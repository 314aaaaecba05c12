//! fuzzyrank Library
//!
//! Fuzzy name ranking for SaaS connectors: resolves a loosely typed name
//! (account, merchant) to the closest entries of an upstream listing.

pub mod config;
pub mod error;
pub mod matcher;
pub mod utils;

pub use config::MatchConfig;
pub use error::{MatchError, MatchResult};
pub use matcher::Matcher;
pub use utils::{
    find_best_match, find_matches, jaccard_similarity, levenshtein, rank_matches, similarity,
    Blend, FuzzyMatch, DEFAULT_LIMIT, DEFAULT_MIN_SCORE,
};
