use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Similarity a fuzzy candidate must reach to be accepted, on a 0.0–1.0 scale.
pub const DEFAULT_FUZZY_CUTOFF: f64 = 0.72;

/// Tuning knobs for knowledge lookup.
///
/// `MatchConfig` is cheap to clone and serde-friendly so it can be embedded in
/// the YAML bot configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MatchConfig {
    /// Minimum similarity ratio for the fuzzy fallback. Inclusive.
    #[serde(default = "MatchConfig::default_fuzzy_cutoff")]
    pub fuzzy_cutoff: f64,
    /// Whether the fuzzy fallback runs at all once exact and overlap matching
    /// came up empty.
    #[serde(default = "MatchConfig::default_fuzzy_enabled")]
    pub fuzzy_enabled: bool,
}

impl MatchConfig {
    pub(crate) fn default_fuzzy_cutoff() -> f64 {
        DEFAULT_FUZZY_CUTOFF
    }

    pub(crate) fn default_fuzzy_enabled() -> bool {
        true
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), MatchError> {
        if !(self.fuzzy_cutoff > 0.0 && self.fuzzy_cutoff <= 1.0) {
            return Err(MatchError::InvalidConfig(format!(
                "fuzzy_cutoff must be in (0.0, 1.0], got {}",
                self.fuzzy_cutoff
            )));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            fuzzy_cutoff: Self::default_fuzzy_cutoff(),
            fuzzy_enabled: Self::default_fuzzy_enabled(),
        }
    }
}

/// Which lookup stage produced a knowledge answer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchKind {
    /// The normalized query is a stored question.
    Exact,
    /// Best token-overlap score; `score` is the number of shared tokens.
    Overlap { score: usize },
    /// Closest stored question by normalized edit similarity.
    Fuzzy { ratio: f64 },
}

/// A knowledge entry selected for a query, borrowed from the knowledge base.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchHit<'a> {
    /// Normalized stored question that matched.
    pub question: &'a str,
    /// Answer text attached to `question`.
    pub answer: &'a str,
    pub kind: MatchKind,
}

/// Errors produced by the matching layer.
///
/// Lookups themselves never fail; only construction with a bad configuration
/// does.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchError {
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
}
