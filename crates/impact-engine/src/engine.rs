//! Scoring engine: chooses between the external and offline paths

use crate::fallback::compute_fallback_score;
use crate::{Credentials, ResearchScorer, ScoringError};
use impact_domain::{ExternalScorer, ExternalScoringError, Score};
use std::fmt;
use tracing::{debug, warn};

/// Which path the engine tries first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringMode {
    /// Deterministic offline scoring only
    Fallback,
    /// External scorer, degrading to offline scoring on failure
    External,
}

impl ScoringMode {
    /// Lowercase name used in logs and health reports
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringMode::Fallback => "fallback",
            ScoringMode::External => "external",
        }
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stateless scoring service
///
/// Holds an optional external scorer. Scores are computed fresh on every
/// call and nothing is shared between calls, so one engine can serve any
/// number of concurrent requests.
pub struct ScoringEngine {
    external: Option<Box<dyn ExternalScorer>>,
}

impl ScoringEngine {
    /// Engine that only uses the offline path
    pub fn offline() -> Self {
        Self { external: None }
    }

    /// Engine that tries `scorer` first
    pub fn with_external(scorer: Box<dyn ExternalScorer>) -> Self {
        Self {
            external: Some(scorer),
        }
    }

    /// Engine for the given credentials
    ///
    /// Installs the [`ResearchScorer`] only when both keys are present.
    pub fn from_credentials(credentials: &Credentials) -> Self {
        if credentials.is_complete() {
            Self::with_external(Box::new(ResearchScorer::new()))
        } else {
            Self::offline()
        }
    }

    /// Current scoring mode
    pub fn mode(&self) -> ScoringMode {
        if self.external.is_some() {
            ScoringMode::External
        } else {
            ScoringMode::Fallback
        }
    }

    /// Score an entity
    ///
    /// External failures are logged and replaced by the offline score, so the
    /// only error a caller can see is [`ScoringError::InvalidInput`].
    pub fn score(&self, name: &str) -> Result<Score, ScoringError> {
        if name.is_empty() {
            return Err(ScoringError::InvalidInput(
                "entity name must not be empty".to_string(),
            ));
        }

        if let Some(scorer) = &self.external {
            match try_external(scorer.as_ref(), name) {
                Ok(score) => {
                    debug!(
                        entity = name,
                        scorer = scorer.name(),
                        total = score.total(),
                        "computed external score"
                    );
                    return Ok(score);
                }
                Err(e) => {
                    warn!(
                        entity = name,
                        scorer = scorer.name(),
                        error = %e,
                        "external scoring failed, using fallback"
                    );
                }
            }
        }

        let score = compute_fallback_score(name)?;
        debug!(entity = name, total = score.total(), "computed fallback score");
        Ok(score)
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::offline()
    }
}

impl fmt::Debug for ScoringEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoringEngine")
            .field("mode", &self.mode())
            .field("external", &self.external.as_ref().map(|s| s.name()))
            .finish()
    }
}

fn try_external(scorer: &dyn ExternalScorer, name: &str) -> Result<Score, ExternalScoringError> {
    let score = scorer.score(name)?;
    if score.entity() != name {
        return Err(ExternalScoringError::InvalidResponse(format!(
            "scored '{}' instead of '{}'",
            score.entity(),
            name
        )));
    }
    Ok(score)
}

/// Score `name`, using the external path when credentials are configured
///
/// # Examples
///
/// ```
/// use impact_engine::compute_score;
///
/// let offline = compute_score("OpenAI", false).unwrap();
/// let credentialed = compute_score("OpenAI", true).unwrap();
/// assert_eq!(offline.total(), credentialed.total());
/// ```
pub fn compute_score(name: &str, has_external_credentials: bool) -> Result<Score, ScoringError> {
    if has_external_credentials {
        ScoringEngine::with_external(Box::new(ResearchScorer::new())).score(name)
    } else {
        compute_fallback_score(name)
    }
}
