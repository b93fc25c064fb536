//! Word interpretation seam.

use crate::symbol::Phoneme;

/// Maps a phoneme sequence to candidate words, best guess first.
///
/// Implementations must be deterministic: the same sequence always yields
/// the same candidates in the same order, so cycling is stable. An empty
/// sequence yields no candidates.
pub trait WordInterpreter {
    fn interpret(&self, phonemes: &[Phoneme]) -> Vec<String>;
}

impl<T: WordInterpreter + ?Sized> WordInterpreter for Box<T> {
    fn interpret(&self, phonemes: &[Phoneme]) -> Vec<String> {
        (**self).interpret(phonemes)
    }
}

impl<T: WordInterpreter + ?Sized> WordInterpreter for std::sync::Arc<T> {
    fn interpret(&self, phonemes: &[Phoneme]) -> Vec<String> {
        (**self).interpret(phonemes)
    }
}
