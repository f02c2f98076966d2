//! Decision labels derived from the total score

use std::fmt;

/// Minimum total for [`Decision::Prioritize`]
pub const PRIORITIZE_THRESHOLD: u8 = 11;

/// Minimum total for [`Decision::Monitor`]
pub const MONITOR_THRESHOLD: u8 = 7;

/// What to do with an entity, given its total score
///
/// Variants are ordered from least to most favourable, so comparing two
/// decisions follows the ordering of their totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Decision {
    /// Total below 7
    Discard,
    /// Total from 7 to 10
    Monitor,
    /// Total of 11 or more
    Prioritize,
}

impl Decision {
    /// Map a total to its decision, checking the highest threshold first
    ///
    /// # Examples
    ///
    /// ```
    /// use impact_domain::Decision;
    ///
    /// assert_eq!(Decision::from_total(12), Decision::Prioritize);
    /// assert_eq!(Decision::from_total(9), Decision::Monitor);
    /// assert_eq!(Decision::from_total(4), Decision::Discard);
    /// ```
    pub fn from_total(total: u8) -> Self {
        if total >= PRIORITIZE_THRESHOLD {
            Decision::Prioritize
        } else if total >= MONITOR_THRESHOLD {
            Decision::Monitor
        } else {
            Decision::Discard
        }
    }

    /// Human-readable label used on the wire
    pub fn label(&self) -> &'static str {
        match self {
            Decision::Prioritize => "to prioritize",
            Decision::Monitor => "to monitor",
            Decision::Discard => "to discard",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
