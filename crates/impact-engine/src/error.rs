//! Engine error types

use impact_domain::DomainError;
use thiserror::Error;

/// Errors that can reach a caller of the engine
///
/// External scoring failures are absorbed by the engine and never appear here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    /// The entity name failed validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<DomainError> for ScoringError {
    fn from(e: DomainError) -> Self {
        ScoringError::InvalidInput(e.to_string())
    }
}
