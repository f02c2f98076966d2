//! Placeholder for scoring backed by web search and summarization
//!
//! The intended pipeline is: search the web for the entity, summarize the
//! results with a language model, rate the four criteria from the summary
//! and report a confidence with the cited sources. Until that is wired the
//! scorer returns the deterministic offline score.

use crate::fallback::compute_fallback_score;
use impact_domain::{ExternalScorer, ExternalScoringError, Score};
use tracing::debug;

/// External scorer installed when search and language-model keys are configured
#[derive(Debug, Clone, Copy, Default)]
pub struct ResearchScorer;

impl ResearchScorer {
    /// Create a research scorer
    pub fn new() -> Self {
        Self
    }
}

impl ExternalScorer for ResearchScorer {
    fn name(&self) -> &str {
        "research"
    }

    fn score(&self, entity: &str) -> Result<Score, ExternalScoringError> {
        // TODO: replace with search + summary once the HTTP clients exist
        debug!(entity, "research scoring not wired, using offline score");
        compute_fallback_score(entity).map_err(|e| ExternalScoringError::Other(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_like_fallback_for_now() {
        let scorer = ResearchScorer::new();
        assert_eq!(scorer.name(), "research");

        let score = scorer.score("OpenAI").unwrap();
        let offline = compute_fallback_score("OpenAI").unwrap();
        assert_eq!(score.sub_scores(), offline.sub_scores());
        assert!(score.is_fallback());
    }

    #[test]
    fn test_empty_entity_is_an_error() {
        assert!(matches!(
            ResearchScorer::new().score(""),
            Err(ExternalScoringError::Other(_))
        ));
    }
}
