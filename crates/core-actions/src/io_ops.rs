//! File IO helpers used by the dispatcher and the runtime.
//!
//! Synchronous and minimal. Errors are logged here and turned into a result
//! enum so the dispatcher only has to pick a status message.

use std::path::PathBuf;

use anyhow::Result;
use core_state::EditorState;
use core_text::{Buffer, LoadOutcome, WriteOutcome};

/// Result of a write attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteFileResult {
    Success { bytes: usize },
    NoFilename,
    Error,
}

/// Build a buffer for `path` and load it. A missing file is created empty.
pub fn open_buffer(
    path: Option<PathBuf>,
    height: usize,
    width: usize,
) -> Result<(Buffer, LoadOutcome)> {
    let mut buffer = Buffer::new(path, height, width);
    let outcome = buffer.read_file()?;
    tracing::info!(target: "actions.dispatch", ?outcome, lines = buffer.line_count(), "buffer_opened");
    Ok((buffer, outcome))
}

/// Write the buffer to its backing file. Clears `modified` on success.
pub fn write_file(state: &mut EditorState) -> WriteFileResult {
    match state.buffer.write_file() {
        Ok(WriteOutcome::Written { bytes }) => {
            state.modified = false;
            WriteFileResult::Success { bytes }
        }
        Ok(WriteOutcome::NoFilename) => WriteFileResult::NoFilename,
        Err(e) => {
            tracing::error!(target: "actions.dispatch", error = %format!("{e:#}"), "file_write_error");
            WriteFileResult::Error
        }
    }
}
