//! Moves, participants, and the text validator.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Participant
// ---------------------------------------------------------------------------

/// One side of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Participant {
    User,
    Bot,
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Bot => write!(f, "bot"),
        }
    }
}

// ---------------------------------------------------------------------------
// Move
// ---------------------------------------------------------------------------

/// A move submitted for one round.
///
/// `Invalid` is a regular value, not an error: it stands for any input that
/// did not name one of the four legal moves, and for a bomb played by a
/// side that has already spent theirs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Bomb,
    Invalid,
}

impl Move {
    /// The four moves a player may legally name.
    pub const LEGAL: [Move; 4] = [Move::Rock, Move::Paper, Move::Scissors, Move::Bomb];

    /// The classic moves, available every round.
    pub const CLASSIC: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Lowercase token for this move.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
            Self::Bomb => "bomb",
            Self::Invalid => "invalid",
        }
    }

    /// Returns `true` if this move wins against `other`.
    ///
    /// Bomb beats the three classic moves; the classic moves form the usual
    /// cycle. Nothing beats or loses to `Invalid`, and equal moves never
    /// beat each other.
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Self::Bomb, Self::Rock | Self::Paper | Self::Scissors)
                | (Self::Rock, Self::Scissors)
                | (Self::Scissors, Self::Paper)
                | (Self::Paper, Self::Rock)
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps raw user text to a [`Move`].
///
/// The text is trimmed and lowercased, then must match one of `rock`,
/// `paper`, `scissors` or `bomb` exactly. Anything else (synonyms, typos,
/// empty input) is [`Move::Invalid`].
pub fn validate(raw: &str) -> Move {
    match raw.trim().to_lowercase().as_str() {
        "rock" => Move::Rock,
        "paper" => Move::Paper,
        "scissors" => Move::Scissors,
        "bomb" => Move::Bomb,
        _ => Move::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_the_four_tokens() {
        assert_eq!(validate("rock"), Move::Rock);
        assert_eq!(validate("paper"), Move::Paper);
        assert_eq!(validate("scissors"), Move::Scissors);
        assert_eq!(validate("bomb"), Move::Bomb);
    }

    #[test]
    fn test_validate_normalizes_case_and_whitespace() {
        assert_eq!(validate("  ROCK\n"), Move::Rock);
        assert_eq!(validate("\tBoMb "), Move::Bomb);
    }

    #[test]
    fn test_validate_rejects_everything_else() {
        assert_eq!(validate("lizard"), Move::Invalid);
        assert_eq!(validate(""), Move::Invalid);
        assert_eq!(validate("rocks"), Move::Invalid);
        assert_eq!(validate("scissor"), Move::Invalid);
        assert_eq!(validate("rock paper"), Move::Invalid);
        assert_eq!(validate("invalid"), Move::Invalid);
    }

    #[test]
    fn test_classic_cycle() {
        assert!(Move::Rock.beats(Move::Scissors));
        assert!(Move::Scissors.beats(Move::Paper));
        assert!(Move::Paper.beats(Move::Rock));
        assert!(!Move::Scissors.beats(Move::Rock));
        assert!(!Move::Rock.beats(Move::Rock));
    }

    #[test]
    fn test_bomb_beats_classic_but_not_itself() {
        for m in Move::CLASSIC {
            assert!(Move::Bomb.beats(m), "bomb vs {m}");
            assert!(!m.beats(Move::Bomb), "{m} vs bomb");
        }
        assert!(!Move::Bomb.beats(Move::Bomb));
    }

    #[test]
    fn test_invalid_never_wins_or_loses() {
        for m in Move::LEGAL {
            assert!(!Move::Invalid.beats(m));
            assert!(!m.beats(Move::Invalid));
        }
    }

    #[test]
    fn test_display_and_serde_use_lowercase_tokens() {
        assert_eq!(Move::Scissors.to_string(), "scissors");
        assert_eq!(Participant::Bot.to_string(), "bot");
        assert_eq!(serde_json::to_string(&Move::Bomb).unwrap(), "\"bomb\"");
    }
}
