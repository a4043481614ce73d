//! Game state machine for Rock-Paper-Scissors-Plus.
//!
//! A game is three rounds of simultaneous moves between a user and a bot.
//! Besides the classic three moves each side may play `bomb` once per game;
//! it beats everything except another bomb. Any input that is not one of
//! the four tokens voids the round, and so does a second bomb.
//!
//! # Key types
//!
//! - [`Move`] and [`validate`]: turn raw text into a closed set of moves
//! - [`GameState`]: owns rounds, scores and bomb flags; resolves rounds
//! - [`Phase`]: `InProgress(round)` → … → `Terminal`
//! - [`RoundResult`] / [`Outcome`]: what the presentation layer gets back
//! - [`BotStrategy`]: how the bot picks its move
//!
//! # Example
//!
//! ```rust
//! use rpsplus_core::{validate, GameState, Move, RoundWinner, Verdict};
//!
//! let mut game = GameState::new();
//! let round = game.resolve_round(validate(" Rock "), Move::Scissors).unwrap();
//! assert_eq!(round.winner, RoundWinner::User);
//!
//! game.resolve_round(validate("lizard"), Move::Paper).unwrap();
//! game.resolve_round(Move::Paper, Move::Paper).unwrap();
//!
//! assert!(game.is_terminal());
//! assert_eq!(game.final_result().unwrap().verdict, Verdict::UserWins);
//! ```

mod bot;
mod error;
mod game;
mod moves;
mod round;
mod state;

pub use bot::{BotStrategy, RandomBot, ScriptedBot, StrategicBot};
pub use error::GameError;
pub use game::{Outcome, Verdict};
pub use moves::{validate, Move, Participant};
pub use round::{RoundResult, RoundWinner};
pub use state::{GameState, Phase, PlayerState, ROUNDS_PER_GAME};
