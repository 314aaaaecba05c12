//! fuzzyrank Error Types
//!
//! Scoring never fails; errors only come from configuration and output.

use thiserror::Error;

/// Central error type for fuzzyrank
#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Invalid blend weights: {0}")]
    InvalidWeights(String),

    #[error("Invalid minimum score: {0} (expected a finite value in [0, 1])")]
    InvalidThreshold(f64),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for fuzzyrank operations
pub type MatchResult<T> = Result<T, MatchError>;
