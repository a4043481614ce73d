//! # RPS+
//!
//! A referee for Rock-Paper-Scissors-Plus: best of three rounds against a
//! bot, with a once-per-game `bomb` that beats everything but another bomb.
//!
//! The crates stack up like this:
//!
//! ```text
//! rpsplus            ← referee session, narration, config (this crate)
//!   ├─ rpsplus-protocol   ← structured reports + codecs
//!   ├─ rpsplus-transport  ← line-oriented I/O
//!   └─ rpsplus-core       ← the game state machine
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rpsplus::prelude::*;
//!
//! # async fn demo() -> Result<(), RpsPlusError> {
//! let config = RefereeConfig::from_env()?;
//! let mut referee = Referee::from_config(StdioChannel::stdio(), &config);
//! if let Some(outcome) = referee.run().await? {
//!     println!("{}", outcome.verdict);
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod narrator;
mod referee;

pub use config::{BotKind, ConfigError, OutputFormat, RefereeConfig};
pub use error::RpsPlusError;
pub use narrator::{JsonNarrator, Narration, Narrator, TextNarrator};
pub use referee::Referee;

/// Everything needed to run a referee session.
pub mod prelude {
    pub use crate::{
        BotKind, ConfigError, JsonNarrator, Narration, Narrator, OutputFormat, Referee,
        RefereeConfig, RpsPlusError, TextNarrator,
    };
    pub use rpsplus_core::{
        validate, BotStrategy, GameError, GameState, Move, Outcome, Participant, Phase,
        RandomBot, RoundResult, RoundWinner, ScriptedBot, StrategicBot, Verdict,
    };
    pub use rpsplus_protocol::{
        decode_report, Codec, FinalReport, JsonCodec, PromptReport, ProtocolError, Report, RoundReport,
        RulesReport,
    };
    pub use rpsplus_transport::{
        IoChannel, LineChannel, MemoryChannel, StdioChannel, TransportError,
    };
}
