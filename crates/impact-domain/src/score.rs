//! Score module - the result of scoring one entity

use crate::{Confidence, Decision, DomainError, SubScores};
use chrono::{DateTime, Utc};

/// An impact score for a named entity
///
/// Scores are immutable once built. `total` and `decision` are derived from
/// the sub-scores inside [`Score::new`], so they can never disagree with them.
#[derive(Debug, Clone, PartialEq)]
pub struct Score {
    entity: String,
    sub_scores: SubScores,
    total: u8,
    decision: Decision,
    confidence: Confidence,
    sources: Vec<String>,
    fallback: bool,
    timestamp: DateTime<Utc>,
}

impl Score {
    /// Build a score, deriving its total and decision
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyEntity`] if `entity` is empty.
    pub fn new(
        entity: impl Into<String>,
        sub_scores: SubScores,
        confidence: Confidence,
        sources: Vec<String>,
        fallback: bool,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let entity = entity.into();
        if entity.is_empty() {
            return Err(DomainError::EmptyEntity);
        }

        let total = sub_scores.total();
        Ok(Self {
            entity,
            sub_scores,
            total,
            decision: Decision::from_total(total),
            confidence,
            sources,
            fallback,
            timestamp,
        })
    }

    /// Build an offline score: zero confidence, no sources, fallback flag set
    ///
    /// # Examples
    ///
    /// ```
    /// use impact_domain::{Decision, Score, SubScores};
    ///
    /// let sub = SubScores::new(3, 1, 2, 3).unwrap();
    /// let score = Score::fallback("abc", sub, chrono::Utc::now()).unwrap();
    /// assert_eq!(score.total(), 9);
    /// assert_eq!(score.decision(), Decision::Monitor);
    /// assert!(score.is_fallback());
    /// ```
    pub fn fallback(
        entity: impl Into<String>,
        sub_scores: SubScores,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        Self::new(
            entity,
            sub_scores,
            Confidence::NONE,
            Vec::new(),
            true,
            timestamp,
        )
    }

    /// The scored entity name
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// The four ratings
    pub fn sub_scores(&self) -> &SubScores {
        &self.sub_scores
    }

    /// Sum of the sub-scores
    pub fn total(&self) -> u8 {
        self.total
    }

    /// Decision derived from the total
    pub fn decision(&self) -> Decision {
        self.decision
    }

    /// Trust in the external grounding of this score
    pub fn confidence(&self) -> Confidence {
        self.confidence
    }

    /// Evidence cited for this score, in order
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Whether the deterministic offline path produced this score
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// When the score was computed
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
