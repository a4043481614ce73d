//! How the bot picks its move each round.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{GameState, Move, Participant};

/// Chooses the bot's move for the round the game is about to play.
///
/// Strategies only read the state; the move they return still goes through
/// the bomb gate in [`GameState::resolve_round`], so a strategy that plays
/// a second bomb simply wastes the round.
pub trait BotStrategy: Send {
    fn choose(&mut self, state: &GameState) -> Move;
}

fn random_classic<R: Rng>(rng: &mut R) -> Move {
    Move::CLASSIC[rng.random_range(0..Move::CLASSIC.len())]
}

// ---------------------------------------------------------------------------
// RandomBot
// ---------------------------------------------------------------------------

/// Picks rock, paper or scissors uniformly. Never bombs.
pub struct RandomBot {
    rng: StdRng,
}

impl RandomBot {
    /// Seeds from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic bot for replays and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new()
    }
}

impl BotStrategy for RandomBot {
    fn choose(&mut self, _state: &GameState) -> Move {
        random_classic(&mut self.rng)
    }
}

// ---------------------------------------------------------------------------
// StrategicBot
// ---------------------------------------------------------------------------

/// Random classic moves, except it drops its bomb in round 2 when trailing.
pub struct StrategicBot {
    rng: StdRng,
}

impl StrategicBot {
    /// Round in which a trailing bot plays its bomb.
    pub const BOMB_ROUND: u8 = 2;

    /// Seeds from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic bot for replays and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StrategicBot {
    fn default() -> Self {
        Self::new()
    }
}

impl BotStrategy for StrategicBot {
    fn choose(&mut self, state: &GameState) -> Move {
        let (user_score, bot_score) = state.score();
        if state.check_bomb_eligible(Participant::Bot)
            && state.current_round() == Some(Self::BOMB_ROUND)
            && bot_score < user_score
        {
            tracing::debug!(user_score, bot_score, "bot is trailing, playing bomb");
            return Move::Bomb;
        }
        random_classic(&mut self.rng)
    }
}

// ---------------------------------------------------------------------------
// ScriptedBot
// ---------------------------------------------------------------------------

/// Replays a fixed sequence of moves, then keeps playing rock.
pub struct ScriptedBot {
    moves: std::vec::IntoIter<Move>,
}

impl ScriptedBot {
    pub fn new(moves: impl Into<Vec<Move>>) -> Self {
        Self {
            moves: moves.into().into_iter(),
        }
    }
}

impl BotStrategy for ScriptedBot {
    fn choose(&mut self, _state: &GameState) -> Move {
        self.moves.next().unwrap_or(Move::Rock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_bot_only_plays_classic_moves() {
        let mut bot = RandomBot::seeded(7);
        let state = GameState::new();
        for _ in 0..100 {
            assert!(Move::CLASSIC.contains(&bot.choose(&state)));
        }
    }

    #[test]
    fn test_seeded_bots_are_deterministic() {
        let state = GameState::new();
        let mut a = RandomBot::seeded(42);
        let mut b = RandomBot::seeded(42);
        let xs: Vec<Move> = (0..20).map(|_| a.choose(&state)).collect();
        let ys: Vec<Move> = (0..20).map(|_| b.choose(&state)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_strategic_bot_bombs_when_trailing_in_round_two() {
        let mut state = GameState::new();
        state.resolve_round(Move::Rock, Move::Scissors).unwrap();
        let mut bot = StrategicBot::seeded(1);
        assert_eq!(bot.choose(&state), Move::Bomb);
    }

    #[test]
    fn test_strategic_bot_holds_bomb_when_not_trailing() {
        let mut state = GameState::new();
        state.resolve_round(Move::Rock, Move::Rock).unwrap();
        let mut bot = StrategicBot::seeded(1);
        for _ in 0..50 {
            assert_ne!(bot.choose(&state), Move::Bomb);
        }
    }

    #[test]
    fn test_strategic_bot_holds_bomb_outside_round_two() {
        let state = GameState::new();
        let mut bot = StrategicBot::seeded(3);
        for _ in 0..50 {
            assert_ne!(bot.choose(&state), Move::Bomb);
        }
    }

    #[test]
    fn test_strategic_bot_never_bombs_twice() {
        let mut state = GameState::new();
        state.resolve_round(Move::Paper, Move::Bomb).unwrap();
        state.resolve_round(Move::Rock, Move::Rock).unwrap();
        // The bomb is spent; nothing about the score can bring it back.
        let mut bot = StrategicBot::seeded(9);
        assert_ne!(bot.choose(&state), Move::Bomb);
    }

    #[test]
    fn test_scripted_bot_replays_then_falls_back() {
        let state = GameState::new();
        let mut bot = ScriptedBot::new([Move::Paper, Move::Bomb]);
        assert_eq!(bot.choose(&state), Move::Paper);
        assert_eq!(bot.choose(&state), Move::Bomb);
        assert_eq!(bot.choose(&state), Move::Rock);
    }
}
