//! Engine error taxonomy. Every variant is recoverable: the action is
//! rejected and the session state is left untouched.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Not enough gold, MP, ingredients, or items for the attempted action.
    InsufficientResource(String),
    /// Acting on a dead or missing enemy index.
    InvalidTarget,
    /// A content key that is not present in the catalog.
    UnknownKey(String),
    /// A combat action was attempted with no active encounter, or outside
    /// the player's turn.
    NoActiveEncounter,
    NotPlayersTurn,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InsufficientResource(what) => {
                write!(f, "insufficient resources: {}", what)
            }
            EngineError::InvalidTarget => write!(f, "invalid target"),
            EngineError::UnknownKey(key) => write!(f, "unknown content key: {}", key),
            EngineError::NoActiveEncounter => write!(f, "no active encounter"),
            EngineError::NotPlayersTurn => write!(f, "it is not the player's turn"),
        }
    }
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            EngineError::UnknownKey("health_potion".to_string()).to_string(),
            "unknown content key: health_potion"
        );
        assert_eq!(EngineError::InvalidTarget.to_string(), "invalid target");
    }
}
