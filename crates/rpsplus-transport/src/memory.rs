//! In-memory [`LineChannel`] for scripted sessions.

use std::collections::VecDeque;

use crate::{LineChannel, TransportError};

/// Feeds queued input lines and records everything written.
///
/// Prompts are recorded as their own entries, exactly as written.
#[derive(Debug, Default)]
pub struct MemoryChannel {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl MemoryChannel {
    /// A channel that will yield `lines` in order, then end of input.
    pub fn with_input<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Everything written so far, one entry per write.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Input lines not yet consumed.
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl LineChannel for MemoryChannel {
    async fn read_line(&mut self) -> Result<Option<String>, TransportError> {
        Ok(self.input.pop_front())
    }

    async fn write_line(&mut self, line: &str) -> Result<(), TransportError> {
        self.output.push(line.to_string());
        Ok(())
    }
}
