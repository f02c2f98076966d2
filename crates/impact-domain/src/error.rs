//! Domain error types

use thiserror::Error;

/// Invariant violations raised while constructing domain values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A sub-score fell outside the inclusive range 1..=3
    #[error("Sub-score '{field}' must be between 1 and 3, got {value}")]
    SubScoreOutOfRange {
        /// Name of the offending criterion
        field: &'static str,
        /// Rejected value
        value: u8,
    },

    /// Confidence percentage above 100
    #[error("Confidence must be between 0 and 100, got {0}")]
    ConfidenceOutOfRange(u8),

    /// Entity name was empty
    #[error("Entity name must not be empty")]
    EmptyEntity,
}
