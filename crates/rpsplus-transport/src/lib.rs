//! Line-oriented transport for the RPS+ referee.
//!
//! The referee talks to its user one line at a time: it writes a prompt,
//! waits for a line of text, then writes one or more lines of output. The
//! [`LineChannel`] trait captures exactly that, so the same session runs
//! over a terminal ([`IoChannel::stdio`]), any async reader/writer pair, or
//! an in-memory script ([`MemoryChannel`]) in tests.

#![allow(async_fn_in_trait)]

mod error;
mod io;
mod memory;

pub use error::TransportError;
pub use io::{IoChannel, StdioChannel};
pub use memory::MemoryChannel;

/// A bidirectional, line-at-a-time text channel.
pub trait LineChannel: Send {
    /// Receives the next line, without its line terminator.
    ///
    /// Returns `Ok(None)` when the input is closed (end of file).
    async fn read_line(&mut self) -> Result<Option<String>, TransportError>;

    /// Sends one line; the terminator is added by the channel.
    async fn write_line(&mut self, line: &str) -> Result<(), TransportError>;

    /// Sends text without a terminator and flushes it, so the user sees a
    /// prompt on the same line they type on.
    ///
    /// Defaults to [`write_line`](Self::write_line). Channels where a
    /// trailing newline matters should override this.
    async fn write_prompt(&mut self, text: &str) -> Result<(), TransportError> {
        self.write_line(text).await
    }
}
