//! Configured Matcher
//!
//! Holds a validated threshold, limit and blend so connectors can rank
//! upstream listings without repeating the parameters on every call.

use std::path::Path;

use tracing::debug;

use crate::config::MatchConfig;
use crate::error::MatchResult;
use crate::utils::fuzzy::{Blend, FuzzyMatch};

/// Ranks candidate names against queries using one configuration.
#[derive(Debug, Clone)]
pub struct Matcher {
    blend: Blend,
    min_score: f64,
    limit: usize,
}

impl Default for Matcher {
    fn default() -> Self {
        let config = MatchConfig::default();
        Self {
            blend: config.blend(),
            min_score: config.min_score,
            limit: config.limit,
        }
    }
}

impl Matcher {
    /// Create a matcher, validating the configuration once
    pub fn new(config: MatchConfig) -> MatchResult<Self> {
        config.validate()?;
        Ok(Self {
            blend: config.blend(),
            min_score: config.min_score,
            limit: config.limit,
        })
    }

    /// Create a matcher from a JSON config file (defaults if missing)
    pub fn from_config_file(path: impl AsRef<Path>) -> MatchResult<Self> {
        let config = MatchConfig::load_from(path)?;
        Self::new(config)
    }

    pub fn min_score(&self) -> f64 {
        self.min_score
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        self.blend.score(a, b)
    }

    pub fn find_matches<S: AsRef<str>>(&self, query: &str, candidates: &[S]) -> Vec<FuzzyMatch> {
        self.blend
            .find_matches(query, candidates, self.min_score, self.limit)
    }

    /// Candidate names only, best first
    pub fn rank<S: AsRef<str>>(&self, query: &str, candidates: &[S]) -> Vec<String> {
        self.find_matches(query, candidates)
            .into_iter()
            .map(|m| m.value)
            .collect()
    }

    /// Best candidate, ignoring the configured limit
    pub fn best_match<S: AsRef<str>>(&self, query: &str, candidates: &[S]) -> Option<FuzzyMatch> {
        let best = self
            .blend
            .find_matches(query, candidates, self.min_score, 1)
            .into_iter()
            .next();
        match &best {
            Some(m) => debug!("Best match for '{}': '{}' ({:.3})", query, m.value, m.score),
            None => debug!("No match for '{}' above {}", query, self.min_score),
        }
        best
    }

    /// Ranked matches as pretty JSON text, the form handed back to the model
    pub fn matches_json<S: AsRef<str>>(&self, query: &str, candidates: &[S]) -> MatchResult<String> {
        let matches = self.find_matches(query, candidates);
        Ok(serde_json::to_string_pretty(&matches)?)
    }
}
