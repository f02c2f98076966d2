//! Trait definitions for external interactions
//!
//! These traits define the boundary between the scoring engine and
//! infrastructure that talks to search or language-model services.

use crate::Score;
use thiserror::Error;

/// Errors an external scorer may report
///
/// The engine never surfaces these to callers; any of them makes it
/// degrade to the fallback score.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExternalScoringError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// A call did not complete within its deadline
    #[error("Timed out after {0} seconds")]
    Timeout(u64),

    /// The service answered with something that cannot become a score
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Generic error
    #[error("External scoring error: {0}")]
    Other(String),
}

/// Scoring backed by real external data (web search, summarization)
///
/// Implementations may be non-deterministic, set `fallback = false`, report a
/// non-zero confidence and cite sources. They must still return a valid
/// [`Score`] for the requested entity.
pub trait ExternalScorer: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Score an entity
    fn score(&self, entity: &str) -> Result<Score, ExternalScoringError>;
}
