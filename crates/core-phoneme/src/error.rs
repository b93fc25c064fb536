//! Recoverable failures of the phoneme pipeline.
//!
//! None of these end an editing session: the caller logs them and continues
//! with the state the component left behind.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhonemeError {
    /// A non-alphabetic key arrived while characters were pending. The
    /// pending characters have been discarded.
    #[error("non-alphabetic character {0:?} cannot participate in phoneme accumulation")]
    InvalidKeystroke(char),
    /// A full-length prefix matched no digraph. Carries the raw characters so
    /// the caller may reinsert them as literal text.
    #[error("no phoneme possible for prefix {0:?}")]
    UnmatchedPrefix(String),
}

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("reading dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing dictionary: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("entry {entry}: {source}")]
    Spelling {
        entry: usize,
        #[source]
        source: PhonemeError,
    },
    #[error("entry {entry}: spelling {spelling:?} does not end on a phoneme boundary")]
    Incomplete { entry: usize, spelling: String },
    #[error("entry {entry}: empty phoneme spelling")]
    Empty { entry: usize },
}
