//! Entity name validation for the query interface

use crate::ScoringError;
use serde::Deserialize;

/// Character-count bounds on entity names accepted by the query interface
///
/// The engine itself only requires a non-empty name; these bounds are
/// applied by callers before scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct EntityBounds {
    /// Minimum number of characters (default: 3)
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,

    /// Maximum number of characters (default: 100)
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

fn default_min_chars() -> usize {
    3
}

fn default_max_chars() -> usize {
    100
}

impl Default for EntityBounds {
    fn default() -> Self {
        Self {
            min_chars: default_min_chars(),
            max_chars: default_max_chars(),
        }
    }
}

/// Check that `name` is non-empty and within `bounds`, counting characters
pub fn validate_entity(name: &str, bounds: &EntityBounds) -> Result<(), ScoringError> {
    if name.is_empty() {
        return Err(ScoringError::InvalidInput(
            "entity name must not be empty".to_string(),
        ));
    }

    let chars = name.chars().count();
    if chars < bounds.min_chars {
        return Err(ScoringError::InvalidInput(format!(
            "entity name must have at least {} characters, got {}",
            bounds.min_chars, chars
        )));
    }
    if chars > bounds.max_chars {
        return Err(ScoringError::InvalidInput(format!(
            "entity name must have at most {} characters, got {}",
            bounds.max_chars, chars
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds() {
        let bounds = EntityBounds::default();
        assert_eq!(bounds.min_chars, 3);
        assert_eq!(bounds.max_chars, 100);
    }

    #[test]
    fn test_accepts_within_bounds() {
        let bounds = EntityBounds::default();
        assert!(validate_entity("abc", &bounds).is_ok());
        assert!(validate_entity(&"x".repeat(100), &bounds).is_ok());
    }

    #[test]
    fn test_rejects_outside_bounds() {
        let bounds = EntityBounds::default();
        assert!(validate_entity("", &bounds).is_err());
        assert!(validate_entity("ab", &bounds).is_err());
        assert!(validate_entity(&"x".repeat(101), &bounds).is_err());
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let bounds = EntityBounds::default();
        // three characters, six bytes
        assert!(validate_entity("éèà", &bounds).is_ok());
        // 100 characters, 200 bytes
        assert!(validate_entity(&"é".repeat(100), &bounds).is_ok());
    }

    #[test]
    fn test_error_message() {
        let err = validate_entity("ab", &EntityBounds::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input: entity name must have at least 3 characters, got 2"
        );
    }
}
