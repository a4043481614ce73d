//! Round resolution and the end-of-game verdict.

use std::fmt;

use serde::{Deserialize, Serialize};
use crate::round::rule_reason;
use crate::{GameError, GameState, Move, Participant, Phase, RoundResult, RoundWinner};

/// A move after the bomb-eligibility gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gated {
    Legal(Move),
    Invalid,
    BombSpent,
}

impl Gated {
    fn resolved(self) -> Move {
        match self {
            Self::Legal(m) => m,
            Self::Invalid | Self::BombSpent => Move::Invalid,
        }
    }

    fn void_reason(self, who: Participant) -> Option<String> {
        match self {
            Self::Legal(_) => None,
            Self::Invalid => Some(format!("{who} move was invalid")),
            Self::BombSpent => Some(format!("{who} already used bomb")),
        }
    }
}

impl GameState {
    /// Returns `false` once `who` has spent their bomb in this game.
    pub fn check_bomb_eligible(&self, who: Participant) -> bool {
        !self.player(who).bomb_used
    }

    /// Returns `true` once all rounds have been played.
    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    fn gate(&self, who: Participant, mv: Move) -> Gated {
        match mv {
            Move::Invalid => Gated::Invalid,
            Move::Bomb if !self.check_bomb_eligible(who) => {
                tracing::debug!(%who, "bomb already spent, round will be void");
                Gated::BombSpent
            }
            legal => Gated::Legal(legal),
        }
    }

    /// Plays one round and advances the game.
    ///
    /// If either move is invalid after the bomb gate, the round is void:
    /// scores and bomb flags stay put and only the round counter moves.
    /// Otherwise the winner scores and every bomb played is marked used,
    /// whatever the outcome.
    ///
    /// # Errors
    /// Returns [`GameError::GameOver`] if the game is already terminal; the
    /// state is left untouched.
    pub fn resolve_round(
        &mut self,
        user_move: Move,
        bot_move: Move,
    ) -> Result<RoundResult, GameError> {
        let Phase::InProgress(round) = self.phase else {
            tracing::warn!(%user_move, %bot_move, "round submitted after the game ended");
            return Err(GameError::GameOver);
        };

        let result = self.play_round(round, user_move, bot_move);
        tracing::debug!(
            round,
            user_move = %result.user_move,
            bot_move = %result.bot_move,
            winner = %result.winner,
            reason = %result.reason,
            "round resolved"
        );
        if self.is_terminal() {
            let (user_score, bot_score) = self.score();
            tracing::info!(user_score, bot_score, "game finished");
        }

        Ok(result)
    }

    /// Applies one round to a game known to be at `round`. Shared by
    /// [`resolve_round`](Self::resolve_round) and snapshot replay.
    pub(crate) fn play_round(
        &mut self,
        round: u8,
        user_move: Move,
        bot_move: Move,
    ) -> RoundResult {
        let user = self.gate(Participant::User, user_move);
        let bot = self.gate(Participant::Bot, bot_move);
        let (user_move, bot_move) = (user.resolved(), bot.resolved());
        let winner = RoundWinner::decide(user_move, bot_move);

        let reason = if winner == RoundWinner::Void {
            let parts: Vec<String> = [
                user.void_reason(Participant::User),
                bot.void_reason(Participant::Bot),
            ]
            .into_iter()
            .flatten()
            .collect();
            parts.join(" and ")
        } else {
            for (who, mv) in [(Participant::User, user_move), (Participant::Bot, bot_move)] {
                if mv == Move::Bomb {
                    self.player_mut(who).bomb_used = true;
                }
            }
            if let Some(who) = winner.participant() {
                self.player_mut(who).wins += 1;
            }
            rule_reason(user_move, bot_move, winner)
        };

        let result = RoundResult {
            round,
            user_move,
            bot_move,
            winner,
            reason,
        };
        self.history.push(result.clone());
        self.phase = self.phase.next().unwrap_or(Phase::Terminal);
        result
    }

    /// Compares final scores.
    ///
    /// Pure read: may be called any number of times once terminal.
    ///
    /// # Errors
    /// Returns [`GameError::NotFinished`] while rounds remain.
    pub fn final_result(&self) -> Result<Outcome, GameError> {
        if let Phase::InProgress(round) = self.phase {
            return Err(GameError::NotFinished { round });
        }
        let (user_score, bot_score) = self.score();
        let verdict = match user_score.cmp(&bot_score) {
            std::cmp::Ordering::Greater => Verdict::UserWins,
            std::cmp::Ordering::Less => Verdict::BotWins,
            std::cmp::Ordering::Equal => Verdict::Draw,
        };
        Ok(Outcome {
            verdict,
            user_score,
            bot_score,
        })
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Overall winner of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    UserWins,
    BotWins,
    Draw,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserWins => write!(f, "user wins"),
            Self::BotWins => write!(f, "bot wins"),
            Self::Draw => write!(f, "draw"),
        }
    }
}

/// Final verdict plus the score it was decided on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub verdict: Verdict,
    pub user_score: u32,
    pub bot_score: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(game: &mut GameState, user: Move, bot: Move) -> RoundResult {
        game.resolve_round(user, bot).unwrap()
    }

    #[test]
    fn test_user_win_scores_and_advances() {
        let mut game = GameState::new();
        let r = play(&mut game, Move::Rock, Move::Scissors);
        assert_eq!(r.round, 1);
        assert_eq!(r.winner, RoundWinner::User);
        assert_eq!(r.reason, "rock beats scissors");
        assert_eq!(game.score(), (1, 0));
        assert_eq!(game.phase(), Phase::InProgress(2));
    }

    #[test]
    fn test_draw_scores_nobody() {
        let mut game = GameState::new();
        let r = play(&mut game, Move::Paper, Move::Paper);
        assert_eq!(r.winner, RoundWinner::Draw);
        assert_eq!(game.score(), (0, 0));
        assert_eq!(game.current_round(), Some(2));
    }

    #[test]
    fn test_invalid_move_voids_round() {
        let mut game = GameState::new();
        let r = play(&mut game, crate::validate("lizard"), Move::Rock);
        assert!(r.is_void());
        assert_eq!(r.user_move, Move::Invalid);
        assert_eq!(r.reason, "user move was invalid");
        assert_eq!(game.score(), (0, 0));
        assert_eq!(game.current_round(), Some(2));
    }

    #[test]
    fn test_void_round_does_not_spend_bot_bomb() {
        let mut game = GameState::new();
        let r = play(&mut game, Move::Invalid, Move::Bomb);
        assert!(r.is_void());
        assert!(game.check_bomb_eligible(Participant::Bot));
        assert_eq!(game.score(), (0, 0));
    }

    #[test]
    fn test_void_round_does_not_spend_user_bomb() {
        let mut game = GameState::new();
        let r = play(&mut game, Move::Bomb, Move::Invalid);
        assert!(r.is_void());
        assert_eq!(r.user_move, Move::Bomb);
        assert_eq!(r.reason, "bot move was invalid");
        assert!(game.check_bomb_eligible(Participant::User));
        assert_eq!(game.score(), (0, 0));

        // The bomb is still there to win the next round with.
        let r = play(&mut game, Move::Bomb, Move::Rock);
        assert_eq!(r.winner, RoundWinner::User);
        assert!(!game.check_bomb_eligible(Participant::User));
    }

    #[test]
    fn test_both_invalid_reason_names_both_sides() {
        let mut game = GameState::new();
        let r = play(&mut game, Move::Invalid, Move::Invalid);
        assert_eq!(r.reason, "user move was invalid and bot move was invalid");
    }

    #[test]
    fn test_bomb_marks_flag_even_on_draw() {
        let mut game = GameState::new();
        let r = play(&mut game, Move::Bomb, Move::Bomb);
        assert_eq!(r.winner, RoundWinner::Draw);
        assert_eq!(r.reason, "bomb draws with bomb");
        assert!(!game.check_bomb_eligible(Participant::User));
        assert!(!game.check_bomb_eligible(Participant::Bot));
    }

    #[test]
    fn test_second_bomb_is_void() {
        let mut game = GameState::new();
        play(&mut game, Move::Bomb, Move::Rock);
        let r = play(&mut game, Move::Bomb, Move::Paper);
        assert!(r.is_void());
        assert_eq!(r.user_move, Move::Invalid);
        assert_eq!(r.bot_move, Move::Paper);
        assert_eq!(r.reason, "user already used bomb");
        assert_eq!(game.score(), (1, 0));
        assert_eq!(game.current_round(), Some(3));
    }

    #[test]
    fn test_bot_bomb_reuse_is_void_too() {
        let mut game = GameState::new();
        play(&mut game, Move::Paper, Move::Bomb);
        let r = play(&mut game, Move::Rock, Move::Bomb);
        assert!(r.is_void());
        assert_eq!(r.reason, "bot already used bomb");
        assert_eq!(game.score(), (0, 1));
    }

    #[test]
    fn test_resolve_after_terminal_is_rejected() {
        let mut game = GameState::new();
        for _ in 0..3 {
            play(&mut game, Move::Rock, Move::Rock);
        }
        assert!(game.is_terminal());
        let before = game.clone();
        assert_eq!(
            game.resolve_round(Move::Rock, Move::Scissors),
            Err(GameError::GameOver)
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_final_result_before_terminal() {
        let mut game = GameState::new();
        assert_eq!(game.final_result(), Err(GameError::NotFinished { round: 1 }));
        play(&mut game, Move::Rock, Move::Rock);
        assert_eq!(game.final_result(), Err(GameError::NotFinished { round: 2 }));
    }

    #[test]
    fn test_final_result_verdicts() {
        let mut game = GameState::new();
        play(&mut game, Move::Rock, Move::Paper);
        play(&mut game, Move::Rock, Move::Rock);
        play(&mut game, Move::Invalid, Move::Rock);
        let outcome = game.final_result().unwrap();
        assert_eq!(outcome.verdict, Verdict::BotWins);
        assert_eq!((outcome.user_score, outcome.bot_score), (0, 1));

        let mut game = GameState::new();
        play(&mut game, Move::Rock, Move::Paper);
        play(&mut game, Move::Rock, Move::Scissors);
        play(&mut game, Move::Rock, Move::Rock);
        assert_eq!(game.final_result().unwrap().verdict, Verdict::Draw);
    }

    #[test]
    fn test_final_result_is_idempotent() {
        let mut game = GameState::new();
        for _ in 0..3 {
            play(&mut game, Move::Scissors, Move::Paper);
        }
        let first = game.final_result().unwrap();
        let second = game.final_result().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.verdict, Verdict::UserWins);
        assert_eq!(first.user_score, 3);
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::UserWins.to_string(), "user wins");
        assert_eq!(Verdict::Draw.to_string(), "draw");
    }
}
