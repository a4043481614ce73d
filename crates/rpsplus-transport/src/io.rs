//! [`LineChannel`] over any tokio reader/writer pair.

use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};

use crate::{LineChannel, TransportError};

/// A channel reading lines from `R` and writing them to `W`.
///
/// Lines are read as raw bytes and decoded lossily: bytes that are not
/// UTF-8 become `U+FFFD`. A garbled line therefore reaches the referee as
/// ordinary text that names no move, instead of failing the read.
pub struct IoChannel<R, W> {
    reader: R,
    buf: Vec<u8>,
    writer: W,
}

/// The process's own stdin and stdout.
pub type StdioChannel = IoChannel<BufReader<Stdin>, Stdout>;

impl<R, W> IoChannel<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            writer,
        }
    }

    /// Gives back the writer, e.g. to inspect what a test session wrote.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl StdioChannel {
    /// Wraps the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> LineChannel for IoChannel<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn read_line(&mut self) -> Result<Option<String>, TransportError> {
        self.buf.clear();
        let read = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .await
            .map_err(TransportError::ReadFailed)?;
        if read == 0 {
            tracing::trace!("input closed");
            return Ok(None);
        }

        let mut bytes = self.buf.as_slice();
        if let Some(rest) = bytes.strip_suffix(b"\n") {
            bytes = rest.strip_suffix(b"\r").unwrap_or(rest);
        }
        let line = String::from_utf8_lossy(bytes).into_owned();
        tracing::trace!(%line, "line received");
        Ok(Some(line))
    }

    async fn write_line(&mut self, line: &str) -> Result<(), TransportError> {
        self.writer
            .write_all(line.as_bytes())
            .await
            .map_err(TransportError::from_write)?;
        self.writer
            .write_all(b"\n")
            .await
            .map_err(TransportError::from_write)?;
        self.writer.flush().await.map_err(TransportError::from_write)
    }

    async fn write_prompt(&mut self, text: &str) -> Result<(), TransportError> {
        self.writer
            .write_all(text.as_bytes())
            .await
            .map_err(TransportError::from_write)?;
        self.writer.flush().await.map_err(TransportError::from_write)
    }
}
