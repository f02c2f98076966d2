//! Impact Score Engine
//!
//! Computes four-part impact scores for named entities.
//!
//! The engine provides:
//! - A deterministic offline score derived from an MD5 digest of the name
//! - A pluggable external scoring path ([`ExternalScorer`]) that degrades to
//!   the offline score on any failure
//! - Entity name validation for the query interface
//!
//! # Examples
//!
//! ```
//! use impact_engine::{compute_fallback_score, ScoringEngine};
//!
//! let score = compute_fallback_score("abc").unwrap();
//! assert_eq!(score.total(), 9);
//! assert!(score.is_fallback());
//!
//! let engine = ScoringEngine::offline();
//! let again = engine.score("abc").unwrap();
//! assert_eq!(again.sub_scores(), score.sub_scores());
//! ```

#![warn(missing_docs)]

mod credentials;
mod engine;
mod error;
mod fallback;
mod research;
mod validation;

pub use credentials::Credentials;
pub use engine::{compute_score, ScoringEngine, ScoringMode};
pub use error::ScoringError;
pub use fallback::{compute_fallback_score, compute_fallback_score_at, entity_digest};
pub use research::ResearchScorer;
pub use validation::{validate_entity, EntityBounds};

pub use impact_domain::{ExternalScorer, ExternalScoringError, Score};
