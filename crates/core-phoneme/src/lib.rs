//! Phoneme input pipeline.
//!
//! Keystrokes flow through three stages:
//!
//! 1. `PhonemeMatcher` accumulates at most one pending character and emits a
//!    `Phoneme` as soon as the lowercased buffer names a digraph in the
//!    `PhonemeTable`.
//! 2. A `WordInterpreter` maps the committed phoneme sequence to an ordered
//!    candidate list (`DictionaryInterpreter` is the lookup-table backend).
//! 3. `InputMethod` owns the per-word state, cycles candidates and hands the
//!    resolved word back on commit.
//!
//! The table is a process-wide static; dictionaries are loaded once and moved
//! into the session. Nothing here performs I/O except `dictionary::load`.

pub mod dictionary;
pub mod error;
pub mod interpreter;
pub mod matcher;
pub mod session;
pub mod symbol;

pub use dictionary::DictionaryInterpreter;
pub use error::{DictionaryError, PhonemeError};
pub use interpreter::WordInterpreter;
pub use matcher::{MatchStep, PhonemeMatcher};
pub use session::{InputMethod, KeyOutcome};
pub use symbol::{Phoneme, PhonemeSymbol, PhonemeTable};
