//! Game phase and per-player state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{GameError, Participant, RoundResult};

/// Number of rounds in one game.
pub const ROUNDS_PER_GAME: u8 = 3;

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// Where a game is in its lifecycle.
///
/// Transitions are strictly ordered, one per resolved (or voided) round:
///
/// ```text
/// InProgress(1) → InProgress(2) → InProgress(3) → Terminal
/// ```
///
/// The round carried by `InProgress` is the round about to be played and
/// is always in `1..=ROUNDS_PER_GAME`. Nothing leaves `Terminal`.
/// Deserializing goes through [`SavedPhase`], which refuses any other
/// round number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "SavedPhase")]
pub enum Phase {
    InProgress(u8),
    Terminal,
}

impl Phase {
    /// The phase a new game starts in.
    pub fn first() -> Self {
        Self::InProgress(1)
    }

    /// Returns the phase after one more round, or `None` from `Terminal`.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::InProgress(round) if round < ROUNDS_PER_GAME => {
                Some(Self::InProgress(round + 1))
            }
            Self::InProgress(_) => Some(Self::Terminal),
            Self::Terminal => None,
        }
    }

    /// The round about to be played, if any.
    pub fn round(self) -> Option<u8> {
        match self {
            Self::InProgress(round) => Some(round),
            Self::Terminal => None,
        }
    }

    /// Returns `true` once every round has been played.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Terminal)
    }
}

/// Wire shape of [`Phase`] before its round is checked.
#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum SavedPhase {
    InProgress(u8),
    Terminal,
}

impl TryFrom<SavedPhase> for Phase {
    type Error = GameError;

    fn try_from(saved: SavedPhase) -> Result<Self, Self::Error> {
        match saved {
            SavedPhase::InProgress(round) if (1..=ROUNDS_PER_GAME).contains(&round) => {
                Ok(Self::InProgress(round))
            }
            SavedPhase::InProgress(round) => Err(GameError::InvalidSnapshot(format!(
                "round {round} outside 1..={ROUNDS_PER_GAME}"
            ))),
            SavedPhase::Terminal => Ok(Self::Terminal),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress(round) => write!(f, "round {round} of {ROUNDS_PER_GAME}"),
            Self::Terminal => write!(f, "game over"),
        }
    }
}

// ---------------------------------------------------------------------------
// PlayerState
// ---------------------------------------------------------------------------

/// Score and bomb usage for one side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Rounds won outright.
    pub wins: u32,
    /// Set the first time this side plays bomb in a non-void round.
    pub bomb_used: bool,
}

// ---------------------------------------------------------------------------
// GameState
// ---------------------------------------------------------------------------

/// The whole state of one game.
///
/// The caller owns it and passes it to every operation; nothing about a
/// game lives anywhere else. Fields are private so the only way to change
/// a game is [`GameState::resolve_round`], which keeps the invariants:
/// scores and bomb flags only move in non-void rounds, the phase advances
/// exactly once per round, and a terminal game is never mutated again.
///
/// It is `Serialize`/`Deserialize` so a host can snapshot it in whatever
/// format it likes. A snapshot is only accepted if replaying its history
/// on a fresh game lands on exactly the phase, scores and bomb flags it
/// carries; see [`GameError::InvalidSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SavedGame")]
pub struct GameState {
    pub(crate) phase: Phase,
    pub(crate) user: PlayerState,
    pub(crate) bot: PlayerState,
    pub(crate) history: Vec<RoundResult>,
}

impl GameState {
    /// Starts a game at round 1 with zero scores and both bombs available.
    pub fn new() -> Self {
        Self {
            phase: Phase::first(),
            user: PlayerState::default(),
            bot: PlayerState::default(),
            history: Vec::with_capacity(ROUNDS_PER_GAME as usize),
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The round about to be played, or `None` once terminal.
    pub fn current_round(&self) -> Option<u8> {
        self.phase.round()
    }

    /// State for one side.
    pub fn player(&self, who: Participant) -> &PlayerState {
        match who {
            Participant::User => &self.user,
            Participant::Bot => &self.bot,
        }
    }

    pub(crate) fn player_mut(&mut self, who: Participant) -> &mut PlayerState {
        match who {
            Participant::User => &mut self.user,
            Participant::Bot => &mut self.bot,
        }
    }

    /// `(user, bot)` wins so far.
    pub fn score(&self) -> (u32, u32) {
        (self.user.wins, self.bot.wins)
    }

    /// Every round resolved so far, oldest first.
    pub fn history(&self) -> &[RoundResult] {
        &self.history
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Wire shape of [`GameState`] before it is replayed.
#[derive(Deserialize)]
struct SavedGame {
    phase: Phase,
    user: PlayerState,
    bot: PlayerState,
    history: Vec<RoundResult>,
}

impl TryFrom<SavedGame> for GameState {
    type Error = GameError;

    /// Replays the saved rounds on a fresh game and keeps the snapshot only
    /// if every round, and the state they leave behind, comes out the same.
    /// Reasons are free text and are kept as saved.
    fn try_from(saved: SavedGame) -> Result<Self, Self::Error> {
        let mut replay = GameState::new();
        for recorded in &saved.history {
            let Some(round) = replay.current_round() else {
                return Err(GameError::InvalidSnapshot(format!(
                    "{} rounds recorded, a game has {ROUNDS_PER_GAME}",
                    saved.history.len()
                )));
            };
            let replayed = replay.play_round(round, recorded.user_move, recorded.bot_move);
            if (recorded.round, recorded.user_move, recorded.bot_move, recorded.winner)
                != (round, replayed.user_move, replayed.bot_move, replayed.winner)
            {
                return Err(GameError::InvalidSnapshot(format!(
                    "recorded round {} does not replay as round {round}",
                    recorded.round
                )));
            }
        }

        if replay.phase != saved.phase {
            return Err(GameError::InvalidSnapshot(format!(
                "phase is {} but the history ends at {}",
                saved.phase, replay.phase
            )));
        }
        for (who, claimed) in [(Participant::User, saved.user), (Participant::Bot, saved.bot)] {
            if *replay.player(who) != claimed {
                return Err(GameError::InvalidSnapshot(format!(
                    "{who} state {claimed:?} does not match the history"
                )));
            }
        }

        Ok(Self {
            history: saved.history,
            ..replay
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_next_follows_strict_order() {
        assert_eq!(Phase::first(), Phase::InProgress(1));
        assert_eq!(Phase::InProgress(1).next(), Some(Phase::InProgress(2)));
        assert_eq!(Phase::InProgress(2).next(), Some(Phase::InProgress(3)));
        assert_eq!(Phase::InProgress(3).next(), Some(Phase::Terminal));
        assert_eq!(Phase::Terminal.next(), None);
    }

    #[test]
    fn test_phase_round_and_terminal() {
        assert_eq!(Phase::InProgress(2).round(), Some(2));
        assert_eq!(Phase::Terminal.round(), None);
        assert!(Phase::Terminal.is_terminal());
        assert!(!Phase::InProgress(3).is_terminal());
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::InProgress(1).to_string(), "round 1 of 3");
        assert_eq!(Phase::Terminal.to_string(), "game over");
    }

    #[test]
    fn test_phase_rejects_rounds_out_of_range() {
        let ok: Phase = serde_json::from_str(r#"{"in_progress":3}"#).unwrap();
        assert_eq!(ok, Phase::InProgress(3));
        let done: Phase = serde_json::from_str(r#""terminal""#).unwrap();
        assert_eq!(done, Phase::Terminal);

        for bad in [r#"{"in_progress":0}"#, r#"{"in_progress":4}"#, r#"{"in_progress":7}"#] {
            let err = serde_json::from_str::<Phase>(bad).unwrap_err();
            assert!(err.to_string().contains("invalid game snapshot"), "{bad}: {err}");
        }
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.phase(), Phase::InProgress(1));
        assert_eq!(game.current_round(), Some(1));
        assert_eq!(game.score(), (0, 0));
        assert!(!game.player(Participant::User).bomb_used);
        assert!(!game.player(Participant::Bot).bomb_used);
        assert!(game.history().is_empty());
        assert_eq!(game, GameState::default());
    }
}
