//! Error types for the protocol layer.
//!
//! Every crate in the workspace has its own error enum. A `ProtocolError`
//! always means a report could not be turned into bytes or back, never
//! that the game or the console misbehaved.

/// Errors that can occur while encoding or decoding reports.
///
/// `thiserror` derives `std::error::Error` and `Display`; each
/// `#[error("...")]` attribute is the message printed for that variant.
/// The JSON variants only exist with the `json` feature, since without it
/// there is no `serde_json` error to wrap.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed.
    ///
    /// Reports are plain data, so in practice this only happens with a
    /// custom value type whose `Serialize` impl refuses.
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed: malformed input, missing fields, or the
    /// wrong report shape.
    ///
    /// The inner `serde_json::Error` is kept as-is so its line and column
    /// still reach whoever prints it.
    #[cfg(feature = "json")]
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// The report decoded but describes something no game can produce,
    /// e.g. round 0 or a round past the last one.
    #[error("invalid report: {0}")]
    InvalidReport(String),
}
