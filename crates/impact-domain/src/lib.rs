//! Impact Score Domain Layer
//!
//! Value objects shared by the scoring engine and the HTTP layer.
//! Nothing in this crate performs I/O.
//!
//! ## Key Concepts
//!
//! - **Sub-score**: one of four 1-3 ratings (alignment, coverage,
//!   experience-impact, reputation)
//! - **Score**: the immutable result of scoring one entity, with its total
//!   and decision label derived from the sub-scores
//! - **Decision**: "to prioritize" / "to monitor" / "to discard"
//! - **External scorer**: the extension point for scoring backed by real
//!   search and summarization data

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod confidence;
pub mod decision;
pub mod error;
pub mod score;
pub mod sub_scores;
pub mod traits;

// Re-exports for convenience
pub use confidence::Confidence;
pub use decision::Decision;
pub use error::DomainError;
pub use score::Score;
pub use sub_scores::{SubScores, SUB_SCORE_MAX, SUB_SCORE_MIN};
pub use traits::{ExternalScorer, ExternalScoringError};
