use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{MatchError, MatchResult};
use crate::utils::fuzzy::{Blend, DEFAULT_LIMIT, DEFAULT_MIN_SCORE};

/// Matching configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Candidates scoring below this are dropped
    pub min_score: f64,
    /// Maximum number of matches returned
    pub limit: usize,

    // Blend
    pub edit_weight: f64,
    pub token_weight: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        let blend = Blend::default();
        Self {
            min_score: DEFAULT_MIN_SCORE,
            limit: DEFAULT_LIMIT,
            edit_weight: blend.edit_weight,
            token_weight: blend.token_weight,
        }
    }
}

impl MatchConfig {
    /// Load config from the default location, or use defaults
    pub fn load() -> Result<Self> {
        Self::load_from(config_path())
    }

    /// Load config from `path`
    ///
    /// A missing file yields defaults. A corrupt file is logged, moved aside
    /// and replaced by defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading match config {}", path.display()))?;
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!(
                    "Match config {} is invalid, using defaults: {}",
                    path.display(),
                    e
                );
                let backup_path = path.with_extension("json.corrupt");
                let _ = std::fs::rename(path, &backup_path);
                Ok(Self::default())
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(config_path())
    }

    /// Save config to `path` as pretty JSON
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("writing match config {}", path.display()))?;
        Ok(())
    }

    pub fn blend(&self) -> Blend {
        Blend {
            edit_weight: self.edit_weight,
            token_weight: self.token_weight,
        }
    }

    /// Check threshold and weights
    pub fn validate(&self) -> MatchResult<()> {
        if !self.min_score.is_finite() || !(0.0..=1.0).contains(&self.min_score) {
            return Err(MatchError::InvalidThreshold(self.min_score));
        }
        self.blend().validate()
    }
}

/// Default config file location
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fuzzyrank")
        .join("config.json")
}
