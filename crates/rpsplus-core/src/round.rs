//! Round outcomes and the resolution table.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Move, Participant};

/// Who took a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundWinner {
    User,
    Bot,
    Draw,
    /// Invalid input on at least one side; nothing changed but the round.
    Void,
}

impl RoundWinner {
    /// Applies the resolution table to two moves as they stand after the
    /// bomb gate.
    pub fn decide(user: Move, bot: Move) -> Self {
        match (user, bot) {
            (Move::Invalid, _) | (_, Move::Invalid) => Self::Void,
            (a, b) if a == b => Self::Draw,
            (a, b) if a.beats(b) => Self::User,
            _ => Self::Bot,
        }
    }

    /// The side that scored, if one did.
    pub fn participant(self) -> Option<Participant> {
        match self {
            Self::User => Some(Participant::User),
            Self::Bot => Some(Participant::Bot),
            Self::Draw | Self::Void => None,
        }
    }
}

impl fmt::Display for RoundWinner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Bot => write!(f, "bot"),
            Self::Draw => write!(f, "draw"),
            Self::Void => write!(f, "void"),
        }
    }
}

/// The record of one resolved round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Which round this was (1-based).
    pub round: u8,
    /// The user's move after validation and the bomb gate.
    pub user_move: Move,
    /// The bot's move after the bomb gate.
    pub bot_move: Move,
    pub winner: RoundWinner,
    /// The rule that decided the round, e.g. "bomb beats rock".
    pub reason: String,
}

impl RoundResult {
    /// Returns `true` if the round was wasted.
    pub fn is_void(&self) -> bool {
        self.winner == RoundWinner::Void
    }
}

/// Describes the rule applied to two legal moves.
pub(crate) fn rule_reason(user: Move, bot: Move, winner: RoundWinner) -> String {
    match winner {
        RoundWinner::User => format!("{user} beats {bot}"),
        RoundWinner::Bot => format!("{bot} beats {user}"),
        RoundWinner::Draw => format!("{user} draws with {bot}"),
        RoundWinner::Void => "round void".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decide_matches_table() {
        use Move::*;
        let table = [
            (Rock, Scissors, RoundWinner::User),
            (Scissors, Paper, RoundWinner::User),
            (Paper, Rock, RoundWinner::User),
            (Scissors, Rock, RoundWinner::Bot),
            (Paper, Scissors, RoundWinner::Bot),
            (Rock, Paper, RoundWinner::Bot),
            (Bomb, Rock, RoundWinner::User),
            (Bomb, Paper, RoundWinner::User),
            (Paper, Bomb, RoundWinner::Bot),
            (Bomb, Bomb, RoundWinner::Draw),
            (Rock, Rock, RoundWinner::Draw),
            (Invalid, Rock, RoundWinner::Void),
            (Bomb, Invalid, RoundWinner::Void),
            (Invalid, Invalid, RoundWinner::Void),
        ];
        for (user, bot, expected) in table {
            assert_eq!(RoundWinner::decide(user, bot), expected, "{user} vs {bot}");
        }
    }

    #[test]
    fn test_every_legal_pair_has_exactly_one_outcome() {
        for user in Move::LEGAL {
            for bot in Move::LEGAL {
                let w = RoundWinner::decide(user, bot);
                assert_ne!(w, RoundWinner::Void);
                // Swapping sides mirrors the result.
                let mirrored = match w {
                    RoundWinner::User => RoundWinner::Bot,
                    RoundWinner::Bot => RoundWinner::User,
                    other => other,
                };
                assert_eq!(RoundWinner::decide(bot, user), mirrored);
            }
        }
    }

    #[test]
    fn test_rule_reason() {
        assert_eq!(
            rule_reason(Move::Bomb, Move::Rock, RoundWinner::User),
            "bomb beats rock"
        );
        assert_eq!(
            rule_reason(Move::Rock, Move::Paper, RoundWinner::Bot),
            "paper beats rock"
        );
        assert_eq!(
            rule_reason(Move::Bomb, Move::Bomb, RoundWinner::Draw),
            "bomb draws with bomb"
        );
    }

    #[test]
    fn test_participant() {
        assert_eq!(RoundWinner::User.participant(), Some(Participant::User));
        assert_eq!(RoundWinner::Draw.participant(), None);
        assert_eq!(RoundWinner::Void.participant(), None);
    }
}
