//! Codec trait and implementations for reports.
//!
//! A "codec" (coder/decoder) turns a [`Report`] into bytes and back. The
//! referee does not care how a report is laid out on the wire; it hands
//! the report to whatever implements [`Codec`] and writes the bytes it
//! gets back.
//!
//! [`JsonCodec`] is the only implementation today. It produces one compact
//! JSON object per report, which is what the `json` output format streams
//! to a front-end, one object per line.

use serde::{de::DeserializeOwned, Serialize};

use crate::{ProtocolError, Report};

/// Encodes values to bytes and decodes them back.
///
/// ## Trait bounds
///
/// - `Send + Sync` lets a codec sit inside a narrator that a session moves
///   between tokio worker threads.
/// - `'static` means the codec owns everything it uses and borrows nothing
///   from the caller.
///
/// ## Generic methods
///
/// `encode` and `decode` are generic over the value type rather than fixed
/// to [`Report`], so the same codec also handles a lone
/// [`RoundReport`](crate::RoundReport) or a saved
/// [`GameState`](rpsplus_core::GameState). `decode` asks for
/// `DeserializeOwned`: the result owns its data and the input buffer can be
/// dropped straight away.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into bytes.
    ///
    /// # Errors
    /// Returns `ProtocolError::Encode` if serialization fails.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError>;

    /// Deserializes bytes back into a value.
    ///
    /// # Errors
    /// Returns `ProtocolError::Decode` if the bytes are malformed or
    /// don't match the expected type.
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError>;
}

/// Decodes a [`Report`] and rejects ones no real game could produce.
///
/// Decoding alone only proves the bytes have the right shape. A report
/// claiming round 9, or a 3-1 score in a three-round game, decodes fine;
/// [`Report::check`] is what turns it away.
///
/// # Errors
/// Any decode error from the codec, or `ProtocolError::InvalidReport`.
pub fn decode_report<C: Codec>(codec: &C, data: &[u8]) -> Result<Report, ProtocolError> {
    let report: Report = codec.decode(data)?;
    report.check()?;
    Ok(report)
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] that uses JSON (via `serde_json`).
///
/// Output is compact, single-line JSON, which is what the referee's
/// JSON-lines mode relies on.
///
/// ```rust
/// use rpsplus_protocol::{Codec, JsonCodec, PromptReport, Report};
///
/// let codec = JsonCodec;
/// let report = Report::Prompt(PromptReport { round: 1, bomb_available: true });
///
/// let bytes = codec.encode(&report).unwrap();
/// assert_eq!(
///     std::str::from_utf8(&bytes).unwrap(),
///     r#"{"type":"prompt","round":1,"bomb_available":true}"#
/// );
///
/// let decoded: Report = codec.decode(&bytes).unwrap();
/// assert_eq!(decoded, report);
/// ```
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[cfg(feature = "json")]
impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError> {
        serde_json::from_slice(data).map_err(ProtocolError::Decode)
    }
}
