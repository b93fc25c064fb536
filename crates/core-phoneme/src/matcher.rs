//! Online character -> phoneme matcher.
//!
//! Greedy and backtracking-free: after every character the lowercased pending
//! buffer is looked up; a hit commits immediately. Lookahead is bounded by the
//! table's longest digraph, so at most one character is ever left pending.

use crate::error::PhonemeError;
use crate::symbol::{Phoneme, PhonemeTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStep {
    /// Character buffered, waiting for the rest of a digraph.
    Pending,
    Matched(Phoneme),
}

#[derive(Debug, Clone)]
pub struct PhonemeMatcher {
    table: &'static PhonemeTable,
    pending: Vec<char>,
    lookahead: usize,
}

impl PhonemeMatcher {
    pub fn new(table: &'static PhonemeTable) -> Self {
        Self {
            table,
            pending: Vec::new(),
            lookahead: table.max_digraph_len(),
        }
    }

    pub fn table(&self) -> &'static PhonemeTable {
        self.table
    }

    /// Feed one keystroke.
    ///
    /// Non-alphabetic input is always rejected and clears the pending
    /// buffer. A prefix that reaches the longest digraph length without a
    /// match is rejected and cleared as well.
    pub fn feed(&mut self, ch: char) -> Result<MatchStep, PhonemeError> {
        if !ch.is_alphabetic() {
            self.pending.clear();
            return Err(PhonemeError::InvalidKeystroke(ch));
        }
        self.pending.push(ch);
        let key: String = self.pending.iter().flat_map(|c| c.to_lowercase()).collect();
        if let Some(symbol) = self.table.lookup(&key) {
            let capitalized = self.pending.first().is_some_and(|c| c.is_uppercase());
            self.pending.clear();
            tracing::trace!(target: "phoneme.matcher", digraph = %key, ipa = symbol.ipa(), capitalized, "matched");
            return Ok(MatchStep::Matched(Phoneme::new(symbol, capitalized)));
        }
        if self.pending.len() < self.lookahead {
            return Ok(MatchStep::Pending);
        }
        let raw: String = self.pending.drain(..).collect();
        tracing::debug!(target: "phoneme.matcher", prefix_len = raw.chars().count(), "unmatched_prefix");
        Err(PhonemeError::UnmatchedPrefix(raw))
    }

    pub fn pending(&self) -> &[char] {
        &self.pending
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop the most recent pending character.
    pub fn pop_pending(&mut self) -> Option<char> {
        self.pending.pop()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::PhonemeSymbol;

    fn matcher() -> PhonemeMatcher {
        PhonemeMatcher::new(PhonemeTable::standard())
    }

    #[test]
    fn single_letter_commits_immediately() {
        let mut m = matcher();
        assert_eq!(
            m.feed('p'),
            Ok(MatchStep::Matched(Phoneme::new(PhonemeSymbol::P, false)))
        );
        assert!(m.is_idle());
    }

    #[test]
    fn digraph_waits_for_second_letter() {
        let mut m = matcher();
        assert_eq!(m.feed('h'), Ok(MatchStep::Pending));
        assert_eq!(m.pending(), &['h']);
        assert_eq!(
            m.feed('h'),
            Ok(MatchStep::Matched(Phoneme::new(PhonemeSymbol::Hh, false)))
        );
        assert!(m.is_idle());
    }

    #[test]
    fn capitalization_follows_first_keystroke() {
        let mut m = matcher();
        m.feed('H').unwrap();
        let step = m.feed('h').unwrap();
        assert_eq!(step, MatchStep::Matched(Phoneme::new(PhonemeSymbol::Hh, true)));

        m.feed('a').unwrap();
        let step = m.feed('I').unwrap();
        assert_eq!(step, MatchStep::Matched(Phoneme::new(PhonemeSymbol::Ay, false)));
    }

    #[test]
    fn unmatched_two_letter_prefix_is_reported_and_cleared() {
        let mut m = matcher();
        m.feed('h').unwrap();
        assert_eq!(m.feed('x'), Err(PhonemeError::UnmatchedPrefix("hx".into())));
        assert!(m.is_idle());
    }

    #[test]
    fn non_alphabetic_is_rejected() {
        let mut m = matcher();
        m.feed('y').unwrap();
        assert_eq!(m.feed(','), Err(PhonemeError::InvalidKeystroke(',')));
        assert!(m.is_idle());
        assert_eq!(m.feed('1'), Err(PhonemeError::InvalidKeystroke('1')));
    }

    #[test]
    fn pop_pending_removes_buffered_char() {
        let mut m = matcher();
        m.feed('a').unwrap();
        assert_eq!(m.pop_pending(), Some('a'));
        assert_eq!(m.pop_pending(), None);
    }
}
