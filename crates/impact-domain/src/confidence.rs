//! Confidence percentage

use crate::DomainError;
use std::fmt;

/// Trust in a score's grounding in real external data, as a percentage
///
/// Always 0 for fallback scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Confidence(u8);

impl Confidence {
    /// No grounding in external data
    pub const NONE: Confidence = Confidence(0);

    /// Create a confidence percentage, rejecting values above 100
    pub fn new(percent: u8) -> Result<Self, DomainError> {
        if percent > 100 {
            return Err(DomainError::ConfidenceOutOfRange(percent));
        }
        Ok(Self(percent))
    }

    /// Get the percentage value
    pub fn percent(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
