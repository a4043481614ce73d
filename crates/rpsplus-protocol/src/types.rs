//! Report types handed to the presentation layer.
//!
//! Every type here is plain data built from the core's state after the
//! fact. Nothing in this module can change a game.

use rpsplus_core::{
    GameState, Move, Outcome, Participant, RoundResult, RoundWinner, Verdict, ROUNDS_PER_GAME,
};
use serde::{Deserialize, Serialize};

use crate::ProtocolError;

// ---------------------------------------------------------------------------
// Report: the envelope
// ---------------------------------------------------------------------------

/// One step of a game as seen by a front-end.
///
/// `#[serde(tag = "type")]` puts the variant name next to the fields, so a
/// round report encodes as `{"type":"round","round":1,...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Report {
    /// Sent once before the first round.
    Rules(RulesReport),
    /// The referee is waiting for the user's move.
    Prompt(PromptReport),
    /// A round was resolved.
    Round(RoundReport),
    /// The game is over.
    Final(FinalReport),
}

impl Report {
    /// Checks that the report describes something a real game can produce.
    ///
    /// # Errors
    /// Returns [`ProtocolError::InvalidReport`] for rounds outside
    /// `1..=ROUNDS_PER_GAME`, or scores that add up to more rounds than a
    /// game has.
    pub fn check(&self) -> Result<(), ProtocolError> {
        let (round, user_score, bot_score) = match self {
            Self::Rules(r) => {
                if r.rounds != ROUNDS_PER_GAME {
                    return Err(ProtocolError::InvalidReport(format!(
                        "game has {ROUNDS_PER_GAME} rounds, report says {}",
                        r.rounds
                    )));
                }
                return Ok(());
            }
            Self::Prompt(p) => (Some(p.round), 0, 0),
            Self::Round(r) => (Some(r.round), r.user_score, r.bot_score),
            Self::Final(f) => (None, f.user_score, f.bot_score),
        };
        if let Some(round) = round {
            if !(1..=ROUNDS_PER_GAME).contains(&round) {
                return Err(ProtocolError::InvalidReport(format!(
                    "round {round} outside 1..={ROUNDS_PER_GAME}"
                )));
            }
        }
        if user_score.saturating_add(bot_score) > u32::from(ROUNDS_PER_GAME) {
            return Err(ProtocolError::InvalidReport(format!(
                "score {user_score}-{bot_score} exceeds {ROUNDS_PER_GAME} rounds"
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// RulesReport
// ---------------------------------------------------------------------------

/// The fixed rules of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesReport {
    /// Rounds per game.
    pub rounds: u8,
    /// Moves a player may name.
    pub moves: Vec<Move>,
    /// How many bombs each side may play per game.
    pub bombs_per_player: u8,
}

impl Default for RulesReport {
    fn default() -> Self {
        Self {
            rounds: ROUNDS_PER_GAME,
            moves: Move::LEGAL.to_vec(),
            bombs_per_player: 1,
        }
    }
}

// ---------------------------------------------------------------------------
// PromptReport
// ---------------------------------------------------------------------------

/// Asks for the user's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptReport {
    pub round: u8,
    /// Whether the user may still play bomb.
    pub bomb_available: bool,
}

impl PromptReport {
    /// Builds the prompt for the round `state` is about to play.
    ///
    /// Returns `None` once the game is terminal.
    pub fn for_state(state: &GameState) -> Option<Self> {
        Some(Self {
            round: state.current_round()?,
            bomb_available: state.check_bomb_eligible(Participant::User),
        })
    }
}

// ---------------------------------------------------------------------------
// RoundReport
// ---------------------------------------------------------------------------

/// A resolved round plus the running totals after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub round: u8,
    pub user_move: Move,
    pub bot_move: Move,
    pub winner: RoundWinner,
    pub reason: String,
    pub user_score: u32,
    pub bot_score: u32,
    pub user_bomb_available: bool,
    pub bot_bomb_available: bool,
    /// `true` if this was the last round.
    pub game_over: bool,
}

impl RoundReport {
    /// Combines a round result with the state it left behind.
    pub fn new(result: &RoundResult, state: &GameState) -> Self {
        let (user_score, bot_score) = state.score();
        Self {
            round: result.round,
            user_move: result.user_move,
            bot_move: result.bot_move,
            winner: result.winner,
            reason: result.reason.clone(),
            user_score,
            bot_score,
            user_bomb_available: state.check_bomb_eligible(Participant::User),
            bot_bomb_available: state.check_bomb_eligible(Participant::Bot),
            game_over: state.is_terminal(),
        }
    }
}

// ---------------------------------------------------------------------------
// FinalReport
// ---------------------------------------------------------------------------

/// The verdict of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalReport {
    pub verdict: Verdict,
    pub user_score: u32,
    pub bot_score: u32,
}

impl From<Outcome> for FinalReport {
    fn from(outcome: Outcome) -> Self {
        Self {
            verdict: outcome.verdict,
            user_score: outcome.user_score,
            bot_score: outcome.bot_score,
        }
    }
}
