//! Unified error type for the referee.
//!
//! Each sub-crate reports failures in its own terms. The binary and any
//! host embedding [`Referee`](crate::Referee) see just one type,
//! [`RpsPlusError`], and can still match on the layer that failed.

use rpsplus_core::GameError;
use rpsplus_protocol::ProtocolError;
use rpsplus_transport::TransportError;

use crate::ConfigError;

/// Top-level error that wraps every crate-specific error.
///
/// `#[from]` generates a `From` impl for each variant, so `?` on a
/// `Result<_, TransportError>` inside a function returning
/// `Result<_, RpsPlusError>` converts on its own. `#[error(transparent)]`
/// forwards `Display` and `source()` to the wrapped error, so the message
/// a user sees is the sub-crate's own.
#[derive(Debug, thiserror::Error)]
pub enum RpsPlusError {
    /// The game refused an operation, e.g. a round after the end or a
    /// saved game that does not replay.
    #[error(transparent)]
    Game(#[from] GameError),

    /// A report could not be encoded.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Reading input or writing output failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The environment held an unusable setting.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_game_error() {
        let err: RpsPlusError = GameError::GameOver.into();
        assert!(matches!(err, RpsPlusError::Game(_)));
        assert!(err.to_string().contains("game is over"));
    }

    #[test]
    fn test_from_protocol_error() {
        let err: RpsPlusError = ProtocolError::InvalidReport("round 9".into()).into();
        assert!(matches!(err, RpsPlusError::Protocol(_)));
        assert!(err.to_string().contains("round 9"));
    }

    #[test]
    fn test_from_transport_error() {
        let err: RpsPlusError = TransportError::Closed.into();
        assert!(matches!(err, RpsPlusError::Transport(_)));
    }

    #[test]
    fn test_from_config_error() {
        let err: RpsPlusError = ConfigError::InvalidValue {
            key: "RPSPLUS_BOT",
            value: "genius".into(),
            expected: "strategic or random",
        }
        .into();
        assert!(matches!(err, RpsPlusError::Config(_)));
        assert!(err.to_string().contains("genius"));
    }
}
