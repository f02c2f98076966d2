//! Deterministic offline scoring
//!
//! The digest of the entity name is read as a 128-bit integer `h`. Each
//! criterion gets a fixed seed (1 to 4, in criterion order) and a rating of
//! `1 + ((h + seed) mod 3)`. Only the timestamp differs between two calls
//! for the same name.

use crate::ScoringError;
use chrono::{DateTime, Utc};
use impact_domain::{Score, SubScores};
use md5::{Digest, Md5};

/// Seeds for alignment, coverage, experience-impact and reputation
const SEEDS: [u128; 4] = [1, 2, 3, 4];

/// MD5 digest of the UTF-8 name, read as a big-endian integer
///
/// # Examples
///
/// ```
/// use impact_engine::entity_digest;
///
/// assert_eq!(entity_digest("abc"), 0x900150983cd24fb0d6963f7d28e17f72);
/// ```
pub fn entity_digest(name: &str) -> u128 {
    let digest = Md5::digest(name.as_bytes());
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest);
    u128::from_be_bytes(bytes)
}

/// `1 + ((h + seed) mod 3)`, reduced first so the addition cannot overflow
fn pick(h: u128, seed: u128) -> u8 {
    1 + ((h % 3 + seed) % 3) as u8
}

/// Compute the offline score for `name`, stamped with the current time
///
/// # Errors
///
/// Returns [`ScoringError::InvalidInput`] if `name` is empty.
pub fn compute_fallback_score(name: &str) -> Result<Score, ScoringError> {
    compute_fallback_score_at(name, Utc::now())
}

/// Compute the offline score for `name` with a caller-supplied timestamp
pub fn compute_fallback_score_at(
    name: &str,
    timestamp: DateTime<Utc>,
) -> Result<Score, ScoringError> {
    if name.is_empty() {
        return Err(ScoringError::InvalidInput(
            "entity name must not be empty".to_string(),
        ));
    }

    let h = entity_digest(name);
    let [alignment, coverage, experience, reputation] = SEEDS.map(|seed| pick(h, seed));
    let sub_scores = SubScores::new(alignment, coverage, experience, reputation)?;

    Ok(Score::fallback(name, sub_scores, timestamp)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use impact_domain::{Confidence, Decision};
    use std::collections::HashSet;

    #[test]
    fn test_abc_matches_manual_computation() {
        // md5("abc") = 900150983cd24fb0d6963f7d28e17f72, which is 1 mod 3
        let h = entity_digest("abc");
        assert_eq!(h % 3, 1);

        let expected: Vec<u8> = (1..=4u128).map(|s| 1 + ((h % 3 + s) % 3) as u8).collect();
        assert_eq!(expected, vec![3, 1, 2, 3]);

        let score = compute_fallback_score("abc").unwrap();
        assert_eq!(score.sub_scores().as_array(), [3, 1, 2, 3]);
        assert_eq!(score.total(), 9);
        assert_eq!(score.decision(), Decision::Monitor);
        assert_eq!(score.decision().label(), "to monitor");
    }

    #[test]
    fn test_known_names() {
        // Tesla: digest is 0 mod 3
        let tesla = compute_fallback_score("Tesla").unwrap();
        assert_eq!(tesla.sub_scores().as_array(), [2, 3, 1, 2]);
        assert_eq!(tesla.total(), 8);

        // Anthropic: digest is 2 mod 3
        let anthropic = compute_fallback_score("Anthropic").unwrap();
        assert_eq!(anthropic.sub_scores().as_array(), [1, 2, 3, 1]);
        assert_eq!(anthropic.total(), 7);
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(
            compute_fallback_score(""),
            Err(ScoringError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_fallback_metadata() {
        let score = compute_fallback_score("OpenAI").unwrap();
        assert!(score.is_fallback());
        assert_eq!(score.confidence(), Confidence::NONE);
        assert!(score.sources().is_empty());
        assert_eq!(score.entity(), "OpenAI");
    }

    #[test]
    fn test_only_timestamp_varies() {
        let t1 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2025, 6, 30, 12, 0, 0).unwrap();

        let first = compute_fallback_score_at("OpenAI", t1).unwrap();
        let second = compute_fallback_score_at("OpenAI", t2).unwrap();

        assert_eq!(first.sub_scores(), second.sub_scores());
        assert_eq!(first.total(), second.total());
        assert_eq!(first.decision(), second.decision());
        assert_ne!(first.timestamp(), second.timestamp());
        assert_eq!(first.timestamp(), t1);
    }

    #[test]
    fn test_non_ascii_names() {
        let score = compute_fallback_score("Société Générale ✓").unwrap();
        assert!((4..=12).contains(&score.total()));
    }

    #[test]
    fn test_totals_do_not_collapse() {
        let names = [
            "abc", "Tesla", "Anthropic", "OpenAI", "Mozilla", "Rust Foundation",
            "Red Cross", "UNESCO", "Linux", "Wikipedia",
        ];
        let totals: HashSet<u8> = names
            .iter()
            .map(|n| compute_fallback_score(n).unwrap().total())
            .collect();
        assert!(totals.len() > 1);
    }

    #[test]
    fn test_pick_does_not_overflow() {
        assert_eq!(pick(u128::MAX, 4), 1 + ((u128::MAX % 3 + 4) % 3) as u8);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use impact_domain::Decision;
    use proptest::prelude::*;

    proptest! {
        /// Property: every sub-score is in 1..=3 and the total is their sum
        #[test]
        fn test_range_invariant(name in ".{1,100}") {
            let score = compute_fallback_score(&name).unwrap();
            let sub = score.sub_scores().as_array();
            prop_assert!(sub.iter().all(|v| (1..=3).contains(v)));
            prop_assert_eq!(score.total(), sub.iter().sum::<u8>());
            prop_assert!((4..=12).contains(&score.total()));
        }

        /// Property: repeated calls agree on everything but the timestamp
        #[test]
        fn test_determinism(name in ".{1,100}") {
            let a = compute_fallback_score(&name).unwrap();
            let b = compute_fallback_score(&name).unwrap();
            prop_assert_eq!(a.sub_scores(), b.sub_scores());
            prop_assert_eq!(a.total(), b.total());
            prop_assert_eq!(a.decision(), b.decision());
        }

        /// Property: decision matches the threshold rule for the total
        #[test]
        fn test_decision_follows_total(name in ".{1,100}") {
            let score = compute_fallback_score(&name).unwrap();
            prop_assert_eq!(score.decision(), Decision::from_total(score.total()));
        }

        /// Property: the fallback path never claims external grounding
        #[test]
        fn test_fallback_flags(name in ".{1,100}") {
            let score = compute_fallback_score(&name).unwrap();
            prop_assert!(score.is_fallback());
            prop_assert_eq!(score.confidence().percent(), 0);
            prop_assert!(score.sources().is_empty());
        }
    }
}
