//! Structured reports for RPS+ front-ends.
//!
//! The game core never phrases anything for a human. After every round it
//! hands back data, and this crate defines the shape that data takes on its
//! way to whatever presents it:
//!
//! - **Types** ([`Report`], [`RoundReport`], [`FinalReport`], ...): what
//!   a front-end receives at each step of a game.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]): how reports become bytes.
//! - **Errors** ([`ProtocolError`]): what can go wrong on the way.
//!
//! ```text
//! Core (GameState, RoundResult) → Protocol (Report) → Narrator / front-end
//! ```

mod codec;
mod error;
mod types;

pub use codec::{decode_report, Codec};
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use error::ProtocolError;
pub use types::{FinalReport, PromptReport, Report, RoundReport, RulesReport};
