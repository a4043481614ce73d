/// Errors that can occur in the transport layer.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The other end stopped listening (e.g. a closed pipe).
    #[error("channel closed")]
    Closed,

    /// Reading a line failed.
    #[error("read failed: {0}")]
    ReadFailed(#[source] std::io::Error),

    /// Writing a line failed.
    #[error("write failed: {0}")]
    WriteFailed(#[source] std::io::Error),
}

impl TransportError {
    /// Classifies a write error: a broken pipe means the reader went away.
    pub(crate) fn from_write(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::BrokenPipe {
            Self::Closed
        } else {
            Self::WriteFailed(err)
        }
    }
}
