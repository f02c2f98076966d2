//! JSON bodies returned by the server
//!
//! Sub-score keys keep the names existing clients already consume.

use chrono::{DateTime, Utc};
use impact_domain::{Score, SubScores};
use serde::{Deserialize, Serialize};

/// Sub-scores as sent on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubScoresBody {
    /// Strategic alignment (1-3)
    pub alignement_strategique: u8,
    /// Coverage (1-3)
    pub couverture: u8,
    /// Experience-impact (1-3)
    pub experience_impact: u8,
    /// Reputation (1-3)
    pub reputation: u8,
}

impl From<&SubScores> for SubScoresBody {
    fn from(sub: &SubScores) -> Self {
        Self {
            alignement_strategique: sub.strategic_alignment(),
            couverture: sub.coverage(),
            experience_impact: sub.experience_impact(),
            reputation: sub.reputation(),
        }
    }
}

/// Body of `GET /score`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResponse {
    /// Scored entity name
    pub entity: String,
    /// Sum of the sub-scores
    pub total: u8,
    /// "to prioritize", "to monitor" or "to discard"
    pub decision: String,
    /// The four ratings
    pub sub_scores: SubScoresBody,
    /// Confidence percentage (0-100)
    pub confidence: u8,
    /// Evidence cited for the score
    pub sources: Vec<String>,
    /// Whether the offline path produced the score
    pub fallback: bool,
    /// When the score was computed (UTC)
    pub timestamp: DateTime<Utc>,
}

impl From<&Score> for ScoreResponse {
    fn from(score: &Score) -> Self {
        Self {
            entity: score.entity().to_string(),
            total: score.total(),
            decision: score.decision().label().to_string(),
            sub_scores: SubScoresBody::from(score.sub_scores()),
            confidence: score.confidence().percent(),
            sources: score.sources().to_vec(),
            fallback: score.is_fallback(),
            timestamp: score.timestamp(),
        }
    }
}

/// Body of `GET /`
#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    /// Static status message
    pub msg: String,
    /// Current server time (UTC)
    pub time: DateTime<Utc>,
}

/// Body of `GET /health`
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// Scoring mode: "fallback" or "external"
    pub mode: String,
}

/// Error body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
