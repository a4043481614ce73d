//! Error types for the game core.
//!
//! Bad input is not an error here: unrecognized text becomes
//! [`Move::Invalid`](crate::Move::Invalid) and voids the round. The only
//! errors are calls the state machine cannot honor in its current phase,
//! and saved games that no sequence of rounds could have produced.

/// Errors that can occur when driving a [`GameState`](crate::GameState).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// A round was submitted after the final round was resolved.
    #[error("game is over: no rounds remain")]
    GameOver,

    /// The final result was requested while rounds are still left.
    #[error("game still in progress (round {round} is next)")]
    NotFinished { round: u8 },

    /// A deserialized game does not replay to the state it claims.
    ///
    /// Raised while loading, before the caller ever holds the value, so a
    /// [`GameState`](crate::GameState) in hand always satisfies the round
    /// and scoring rules.
    #[error("invalid game snapshot: {0}")]
    InvalidSnapshot(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(GameError::GameOver.to_string(), "game is over: no rounds remain");
        assert!(GameError::NotFinished { round: 2 }.to_string().contains("round 2"));
        assert_eq!(
            GameError::InvalidSnapshot("round 7".into()).to_string(),
            "invalid game snapshot: round 7"
        );
    }
}
