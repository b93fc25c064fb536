//! Input method session: the per-word phoneme composition state machine.
//!
//! States, per word in progress:
//! * Empty: nothing pending, no phonemes.
//! * Accumulating: the matcher holds a pending character.
//! * Interpreting: a phoneme was just committed; the interpreter is asked for
//!   candidates for the whole sequence. An empty answer keeps the word open.
//! * Cycling: candidates exist and the selection can move either way.
//!
//! A non-alphabetic key or `complete` commits the resolved word (possibly
//! empty) and returns to Empty. `backspace` walks back one step at a time.

use crate::error::PhonemeError;
use crate::interpreter::WordInterpreter;
use crate::matcher::{MatchStep, PhonemeMatcher};
use crate::symbol::{Phoneme, PhonemeTable};

/// What a keystroke did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The keystroke was absorbed into the word being composed.
    Composing,
    /// The keystroke terminated the word; carries the committed text, empty
    /// when no word was resolved.
    Committed(String),
}

pub struct InputMethod {
    matcher: PhonemeMatcher,
    phonemes: Vec<Phoneme>,
    candidates: Vec<String>,
    candidate_index: usize,
    interpreter: Box<dyn WordInterpreter>,
}

impl std::fmt::Debug for InputMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputMethod")
            .field("pending", &self.matcher.pending())
            .field("phonemes", &self.phonemes)
            .field("candidates", &self.candidates)
            .field("candidate_index", &self.candidate_index)
            .finish()
    }
}

impl InputMethod {
    pub fn new(table: &'static PhonemeTable, interpreter: Box<dyn WordInterpreter>) -> Self {
        Self {
            matcher: PhonemeMatcher::new(table),
            phonemes: Vec::new(),
            candidates: Vec::new(),
            candidate_index: 0,
            interpreter,
        }
    }

    pub fn pending_chars(&self) -> &[char] {
        self.matcher.pending()
    }

    pub fn phonemes(&self) -> &[Phoneme] {
        &self.phonemes
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn candidate_index(&self) -> usize {
        self.candidate_index
    }

    /// True when no word is in progress.
    pub fn is_empty(&self) -> bool {
        self.matcher.is_idle() && self.phonemes.is_empty()
    }

    pub fn has_candidates(&self) -> bool {
        !self.candidates.is_empty()
    }

    /// Feed one keystroke.
    ///
    /// Alphabetic characters extend the word. Any other character commits the
    /// word, except when a character is pending and no phoneme has been
    /// committed yet: that is an `InvalidKeystroke`, and the session resets to
    /// Empty without emitting a word. An `UnmatchedPrefix` discards only the
    /// offending prefix; committed phonemes stay.
    pub fn push_char(&mut self, ch: char) -> Result<KeyOutcome, PhonemeError> {
        if !ch.is_alphabetic() {
            if !self.matcher.is_idle() && self.phonemes.is_empty() {
                self.reset();
                tracing::debug!(target: "phoneme.session", "invalid_keystroke_reset");
                return Err(PhonemeError::InvalidKeystroke(ch));
            }
            return Ok(KeyOutcome::Committed(self.complete()));
        }
        match self.matcher.feed(ch)? {
            MatchStep::Pending => {}
            MatchStep::Matched(phoneme) => {
                self.phonemes.push(phoneme);
                self.reinterpret();
            }
        }
        Ok(KeyOutcome::Composing)
    }

    /// Word the session would commit right now, capitalized when the first
    /// phoneme was typed with an uppercase key.
    pub fn resolved_word(&self) -> Option<String> {
        let word = self.candidates.get(self.candidate_index)?;
        let capitalized = self.phonemes.first().is_some_and(|p| p.capitalized);
        Some(if capitalized {
            title_case(word)
        } else {
            word.clone()
        })
    }

    /// Select the next candidate, wrapping. Returns false with no candidates.
    pub fn cycle_forward(&mut self) -> bool {
        if self.candidates.is_empty() {
            return false;
        }
        self.candidate_index = (self.candidate_index + 1) % self.candidates.len();
        tracing::trace!(target: "phoneme.session", index = self.candidate_index, total = self.candidates.len(), "cycle");
        true
    }

    /// Select the previous candidate, wrapping. Returns false with no candidates.
    pub fn cycle_backward(&mut self) -> bool {
        if self.candidates.is_empty() {
            return false;
        }
        let len = self.candidates.len();
        self.candidate_index = (self.candidate_index + len - 1) % len;
        tracing::trace!(target: "phoneme.session", index = self.candidate_index, total = len, "cycle");
        true
    }

    /// Finish the word: return the resolved word (empty if none) and reset.
    pub fn complete(&mut self) -> String {
        let word = self.resolved_word().unwrap_or_default();
        tracing::debug!(
            target: "phoneme.session",
            phonemes = self.phonemes.len(),
            candidates = self.candidates.len(),
            index = self.candidate_index,
            word_len = word.chars().count(),
            "commit"
        );
        self.reset();
        word
    }

    /// Step back once: drop the pending character if there is one, otherwise
    /// the last committed phoneme. Returns false when already empty.
    pub fn backspace(&mut self) -> bool {
        if self.matcher.pop_pending().is_some() {
            return true;
        }
        if self.phonemes.pop().is_some() {
            self.reinterpret();
            return true;
        }
        false
    }

    /// Discard the word in progress without committing.
    pub fn abort(&mut self) {
        if !self.is_empty() {
            tracing::debug!(target: "phoneme.session", phonemes = self.phonemes.len(), "abort");
        }
        self.reset();
    }

    /// Two panel lines: IPA of committed phonemes followed by raw pending
    /// keys, then the resolved word with its position when ambiguous.
    pub fn panel_text(&self) -> String {
        let mut top: String = self.phonemes.iter().map(|p| p.symbol.ipa()).collect();
        top.extend(self.matcher.pending().iter());
        let mut bottom = self.resolved_word().unwrap_or_default();
        if self.candidates.len() > 1 {
            bottom.push_str(&format!(" [{}/{}]", self.candidate_index + 1, self.candidates.len()));
        }
        format!("{top}\n{bottom}")
    }

    fn reinterpret(&mut self) {
        self.candidates = if self.phonemes.is_empty() {
            Vec::new()
        } else {
            self.interpreter.interpret(&self.phonemes)
        };
        self.candidate_index = 0;
        tracing::trace!(target: "phoneme.session", phonemes = self.phonemes.len(), candidates = self.candidates.len(), "interpreted");
    }

    fn reset(&mut self) {
        self.matcher.clear();
        self.phonemes.clear();
        self.candidates.clear();
        self.candidate_index = 0;
    }
}

/// Uppercase the first character, leave the rest untouched.
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
