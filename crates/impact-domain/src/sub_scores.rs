//! The four sub-criteria composing an impact score

use crate::DomainError;

/// Lowest allowed sub-score
pub const SUB_SCORE_MIN: u8 = 1;

/// Highest allowed sub-score
pub const SUB_SCORE_MAX: u8 = 3;

/// Four 1-3 ratings, one per criterion
///
/// Every field is checked at construction, so a `SubScores` value always
/// holds ratings in `1..=3` and its total is always in `4..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubScores {
    strategic_alignment: u8,
    coverage: u8,
    experience_impact: u8,
    reputation: u8,
}

impl SubScores {
    /// Create sub-scores, rejecting any rating outside `1..=3`
    ///
    /// # Examples
    ///
    /// ```
    /// use impact_domain::SubScores;
    ///
    /// let sub = SubScores::new(3, 1, 2, 3).unwrap();
    /// assert_eq!(sub.total(), 9);
    ///
    /// assert!(SubScores::new(0, 1, 2, 3).is_err());
    /// ```
    pub fn new(
        strategic_alignment: u8,
        coverage: u8,
        experience_impact: u8,
        reputation: u8,
    ) -> Result<Self, DomainError> {
        check("strategic_alignment", strategic_alignment)?;
        check("coverage", coverage)?;
        check("experience_impact", experience_impact)?;
        check("reputation", reputation)?;

        Ok(Self {
            strategic_alignment,
            coverage,
            experience_impact,
            reputation,
        })
    }

    /// Strategic alignment rating
    pub fn strategic_alignment(&self) -> u8 {
        self.strategic_alignment
    }

    /// Coverage rating
    pub fn coverage(&self) -> u8 {
        self.coverage
    }

    /// Experience-impact rating
    pub fn experience_impact(&self) -> u8 {
        self.experience_impact
    }

    /// Reputation rating
    pub fn reputation(&self) -> u8 {
        self.reputation
    }

    /// Ratings in criterion order: alignment, coverage, experience-impact, reputation
    pub fn as_array(&self) -> [u8; 4] {
        [
            self.strategic_alignment,
            self.coverage,
            self.experience_impact,
            self.reputation,
        ]
    }

    /// Sum of the four ratings
    pub fn total(&self) -> u8 {
        self.as_array().iter().sum()
    }
}

fn check(field: &'static str, value: u8) -> Result<(), DomainError> {
    if (SUB_SCORE_MIN..=SUB_SCORE_MAX).contains(&value) {
        Ok(())
    } else {
        Err(DomainError::SubScoreOutOfRange { field, value })
    }
}
