//! Plain-text persistence for `Buffer`.
//!
//! Layout: document lines joined by `\n`, no terminator after the last line,
//! so an empty trailing line survives a save/load cycle. On load a `\r`
//! ending a record is dropped (CRLF files open as plain lines). Loading a
//! path that does not exist creates the file and yields an empty document.

use std::fs::OpenOptions;
use std::io::ErrorKind;

use anyhow::{Context, Result};

use crate::Buffer;

/// Result of loading the backing file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { lines: usize },
    /// The file did not exist; it was created empty.
    Created,
    /// The buffer has no backing file name.
    Unnamed,
}

/// Result of a save attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written { bytes: usize },
    NoFilename,
}

/// Normalize CRLF records to bare lines joined by `\n`.
pub fn normalize_line_endings(content: &str) -> String {
    content
        .split('\n')
        .map(|record| record.strip_suffix('\r').unwrap_or(record))
        .collect::<Vec<_>>()
        .join("\n")
}

impl Buffer {
    /// Replace the document with the backing file's content.
    pub fn read_file(&mut self) -> Result<LoadOutcome> {
        let Some(path) = self.file_name.clone() else {
            return Ok(LoadOutcome::Unnamed);
        };
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                self.replace_text(&normalize_line_endings(&content));
                let lines = self.line_count();
                tracing::debug!(target: "text.persist", file = %path.display(), size_bytes = content.len(), lines, "file_read_ok");
                Ok(LoadOutcome::Loaded { lines })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                OpenOptions::new()
                    .write(true)
                    .create_new(true)
                    .open(&path)
                    .with_context(|| format!("creating {}", path.display()))?;
                self.replace_text("");
                tracing::info!(target: "text.persist", file = %path.display(), "file_created");
                Ok(LoadOutcome::Created)
            }
            Err(e) => Err(e).with_context(|| format!("reading {}", path.display())),
        }
    }

    /// Write the document to the backing file.
    pub fn write_file(&self) -> Result<WriteOutcome> {
        let Some(path) = self.file_name.as_ref() else {
            tracing::warn!(target: "text.persist", "write_without_filename");
            return Ok(WriteOutcome::NoFilename);
        };
        let content = self.to_text();
        std::fs::write(path, content.as_bytes())
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(target: "text.persist", file = %path.display(), size_bytes = content.len(), "file_write_ok");
        Ok(WriteOutcome::Written {
            bytes: content.len(),
        })
    }
}
