//! Dictionary-backed `WordInterpreter` and its file format.
//!
//! Dictionary files are TOML:
//!
//! ```toml
//! [[entry]]
//! phonemes = "hhai"      # digraph keystrokes, spaces allowed between phonemes
//! words = ["hi", "high"]
//! ```
//!
//! Spellings are decoded with the same `PhonemeMatcher` the editor uses, so a
//! dictionary key is exactly what a user types. Entries sharing a key merge
//! their words in file order, dropping duplicates.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::DictionaryError;
use crate::interpreter::WordInterpreter;
use crate::matcher::{MatchStep, PhonemeMatcher};
use crate::symbol::{Phoneme, PhonemeSymbol, PhonemeTable};

#[derive(Debug, Deserialize, Default)]
struct DictionaryFile {
    #[serde(default)]
    entry: Vec<EntryRecord>,
}

#[derive(Debug, Deserialize)]
struct EntryRecord {
    phonemes: String,
    #[serde(default)]
    words: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct DictionaryInterpreter {
    entries: HashMap<Vec<PhonemeSymbol>, Vec<String>>,
}

impl DictionaryInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `word` to the candidates for `key` unless already present.
    pub fn insert(&mut self, key: Vec<PhonemeSymbol>, word: impl Into<String>) {
        let word = word.into();
        let words = self.entries.entry(key).or_default();
        if !words.contains(&word) {
            words.push(word);
        }
    }

    /// Number of distinct phoneme keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn from_toml_str(
        src: &str,
        table: &'static PhonemeTable,
    ) -> Result<Self, DictionaryError> {
        let file: DictionaryFile = toml::from_str(src)?;
        let mut dict = Self::new();
        for (idx, record) in file.entry.into_iter().enumerate() {
            let key = decode_spelling(idx, &record.phonemes, table)?;
            for word in record.words {
                dict.insert(key.clone(), word);
            }
        }
        tracing::debug!(target: "phoneme.dictionary", keys = dict.len(), "dictionary_parsed");
        Ok(dict)
    }

    pub fn load(path: &Path, table: &'static PhonemeTable) -> Result<Self, DictionaryError> {
        let src = std::fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dict = Self::from_toml_str(&src, table)?;
        tracing::info!(target: "phoneme.dictionary", file = %path.display(), keys = dict.len(), "dictionary_loaded");
        Ok(dict)
    }
}

impl FromIterator<(Vec<PhonemeSymbol>, String)> for DictionaryInterpreter {
    fn from_iter<I: IntoIterator<Item = (Vec<PhonemeSymbol>, String)>>(iter: I) -> Self {
        let mut dict = Self::new();
        for (key, word) in iter {
            dict.insert(key, word);
        }
        dict
    }
}

impl WordInterpreter for DictionaryInterpreter {
    fn interpret(&self, phonemes: &[Phoneme]) -> Vec<String> {
        if phonemes.is_empty() {
            return Vec::new();
        }
        let key: Vec<PhonemeSymbol> = phonemes.iter().map(|p| p.symbol).collect();
        self.entries.get(&key).cloned().unwrap_or_default()
    }
}

fn decode_spelling(
    entry: usize,
    spelling: &str,
    table: &'static PhonemeTable,
) -> Result<Vec<PhonemeSymbol>, DictionaryError> {
    let mut matcher = PhonemeMatcher::new(table);
    let mut key = Vec::new();
    for ch in spelling.chars() {
        if ch.is_whitespace() {
            if !matcher.is_idle() {
                return Err(DictionaryError::Incomplete {
                    entry,
                    spelling: spelling.to_string(),
                });
            }
            continue;
        }
        match matcher.feed(ch) {
            Ok(MatchStep::Matched(p)) => key.push(p.symbol),
            Ok(MatchStep::Pending) => {}
            Err(source) => return Err(DictionaryError::Spelling { entry, source }),
        }
    }
    if !matcher.is_idle() {
        return Err(DictionaryError::Incomplete {
            entry,
            spelling: spelling.to_string(),
        });
    }
    if key.is_empty() {
        return Err(DictionaryError::Empty { entry });
    }
    Ok(key)
}

/// Decode a digraph spelling such as `"hh ai"` into symbols. Errors use the
/// dictionary taxonomy and report entry 0.
pub fn spell(
    spelling: &str,
    table: &'static PhonemeTable,
) -> Result<Vec<PhonemeSymbol>, DictionaryError> {
    decode_spelling(0, spelling, table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PhonemeError;
    use PhonemeSymbol::*;

    fn table() -> &'static PhonemeTable {
        PhonemeTable::standard()
    }

    #[test]
    fn parses_entries_and_merges_duplicates() {
        let src = r#"
[[entry]]
phonemes = "hhai"
words = ["hi", "high"]

[[entry]]
phonemes = "hh ai"
words = ["high", "hye"]

[[entry]]
phonemes = "fao"
words = ["foe"]
"#;
        let dict = DictionaryInterpreter::from_toml_str(src, table()).unwrap();
        assert_eq!(dict.len(), 2);
        let key = [Phoneme::from(Hh), Phoneme::from(Ay)];
        assert_eq!(dict.interpret(&key), vec!["hi", "high", "hye"]);
        assert_eq!(dict.interpret(&[Phoneme::from(F), Phoneme::from(Ow)]), vec!["foe"]);
    }

    #[test]
    fn unknown_and_empty_lookups_return_nothing() {
        let dict: DictionaryInterpreter = [(vec![Hh, Ay], "hi".to_string())].into_iter().collect();
        assert!(dict.interpret(&[]).is_empty());
        assert!(dict.interpret(&[Phoneme::from(Hh)]).is_empty());
        assert_eq!(dict.interpret(&[Phoneme::new(Hh, true), Phoneme::from(Ay)]), vec!["hi"]);
    }

    #[test]
    fn bad_spelling_reports_entry_index() {
        let src = "[[entry]]\nphonemes = \"p\"\nwords = [\"p\"]\n\
                   [[entry]]\nphonemes = \"hx\"\nwords = [\"?\"]\n";
        match DictionaryInterpreter::from_toml_str(src, table()) {
            Err(DictionaryError::Spelling { entry, source }) => {
                assert_eq!(entry, 1);
                assert_eq!(source, PhonemeError::UnmatchedPrefix("hx".into()));
            }
            other => panic!("expected spelling error, got {other:?}"),
        }
    }

    #[test]
    fn spelling_must_end_on_boundary() {
        let src = "[[entry]]\nphonemes = \"ph\"\nwords = [\"x\"]\n";
        assert!(matches!(
            DictionaryInterpreter::from_toml_str(src, table()),
            Err(DictionaryError::Incomplete { entry: 0, .. })
        ));
        let src = "[[entry]]\nphonemes = \"  \"\nwords = [\"x\"]\n";
        assert!(matches!(
            DictionaryInterpreter::from_toml_str(src, table()),
            Err(DictionaryError::Empty { entry: 0 })
        ));
    }

    #[test]
    fn spell_decodes_user_keystrokes() {
        assert_eq!(spell("hhai", table()).unwrap(), vec![Hh, Ay]);
        assert_eq!(spell("Hs ip", table()).unwrap(), vec![Sh, Ih, P]);
    }

    #[test]
    fn spell_keeps_the_failure_kind() {
        assert!(matches!(
            spell("ph", table()),
            Err(DictionaryError::Incomplete { ref spelling, .. }) if spelling == "ph"
        ));
        assert!(matches!(spell(" ", table()), Err(DictionaryError::Empty { .. })));
        match spell("hx", table()) {
            Err(DictionaryError::Spelling { source, .. }) => {
                assert_eq!(source, PhonemeError::UnmatchedPrefix("hx".into()));
            }
            other => panic!("expected spelling error, got {other:?}"),
        }
    }

    #[test]
    fn load_reads_file_and_reports_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.toml");
        let src = "[[entry]]\nphonemes = \"nnao\"\nwords = [\"no\", \"know\"]\n";
        std::fs::write(&path, src).unwrap();
        let dict = DictionaryInterpreter::load(&path, table()).unwrap();
        assert_eq!(dict.interpret(&[Phoneme::from(N), Phoneme::from(Ow)]), vec!["no", "know"]);

        let missing = dir.path().join("absent.toml");
        assert!(matches!(
            DictionaryInterpreter::load(&missing, table()),
            Err(DictionaryError::Io { .. })
        ));
    }
}
