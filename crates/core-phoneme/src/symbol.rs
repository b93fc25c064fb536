//! Phoneme symbols and the static digraph table.
//!
//! The table is prefix-free for single-letter entries: no 2-letter digraph
//! starts with a letter that is itself an entry. That is what lets the
//! matcher commit greedily with one character of lookahead.

use phf::phf_map;

/// Closed set of speech sounds, named after their ARPAbet spelling where one
/// exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PhonemeSymbol {
    P,
    T,
    K,
    Ch,
    F,
    Th,
    S,
    Sh,
    Kh,
    Hh,
    B,
    D,
    G,
    Jh,
    V,
    Dh,
    Z,
    Zh,
    M,
    N,
    Ng,
    Y,
    W,
    R,
    L,
    Ih,
    Eh,
    Ae,
    Aa,
    Ah,
    Uh,
    Ao,
    Er,
    Iy,
    Ey,
    Ow,
    Uw,
    Ay,
    Oy,
    Aw,
    Ear,
    Air,
    Ar,
    Or,
    Ore,
    Ur,
    Axr,
    Ax,
}

impl PhonemeSymbol {
    pub const ALL: [PhonemeSymbol; 48] = [
        Self::P,
        Self::T,
        Self::K,
        Self::Ch,
        Self::F,
        Self::Th,
        Self::S,
        Self::Sh,
        Self::Kh,
        Self::Hh,
        Self::B,
        Self::D,
        Self::G,
        Self::Jh,
        Self::V,
        Self::Dh,
        Self::Z,
        Self::Zh,
        Self::M,
        Self::N,
        Self::Ng,
        Self::Y,
        Self::W,
        Self::R,
        Self::L,
        Self::Ih,
        Self::Eh,
        Self::Ae,
        Self::Aa,
        Self::Ah,
        Self::Uh,
        Self::Ao,
        Self::Er,
        Self::Iy,
        Self::Ey,
        Self::Ow,
        Self::Uw,
        Self::Ay,
        Self::Oy,
        Self::Aw,
        Self::Ear,
        Self::Air,
        Self::Ar,
        Self::Or,
        Self::Ore,
        Self::Ur,
        Self::Axr,
        Self::Ax,
    ];

    /// IPA spelling shown in the input panel.
    pub fn ipa(self) -> &'static str {
        match self {
            Self::P => "p",
            Self::T => "t",
            Self::K => "k",
            Self::Ch => "tʃ",
            Self::F => "f",
            Self::Th => "θ",
            Self::S => "s",
            Self::Sh => "ʃ",
            Self::Kh => "x",
            Self::Hh => "h",
            Self::B => "b",
            Self::D => "d",
            Self::G => "g",
            Self::Jh => "dʒ",
            Self::V => "v",
            Self::Dh => "ð",
            Self::Z => "z",
            Self::Zh => "ʒ",
            Self::M => "m",
            Self::N => "n",
            Self::Ng => "ŋ",
            Self::Y => "j",
            Self::W => "w",
            Self::R => "r",
            Self::L => "l",
            Self::Ih => "ɪ",
            Self::Eh => "ɛ",
            Self::Ae => "æ",
            Self::Aa => "ɑ",
            Self::Ah => "ʌ",
            Self::Uh => "ʊ",
            Self::Ao => "ɔ",
            Self::Er => "ɜr",
            Self::Iy => "i",
            Self::Ey => "eɪ",
            Self::Ow => "oʊ",
            Self::Uw => "u",
            Self::Ay => "aɪ",
            Self::Oy => "ɔɪ",
            Self::Aw => "aʊ",
            Self::Ear => "ɪr",
            Self::Air => "ɛr",
            Self::Ar => "ɑr",
            Self::Or => "ɔr",
            Self::Ore => "Or",
            Self::Ur => "ʊr",
            Self::Axr => "ər",
            Self::Ax => "ə",
        }
    }
}

/// A committed phoneme plus the case of the keystroke that started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Phoneme {
    pub symbol: PhonemeSymbol,
    pub capitalized: bool,
}

impl Phoneme {
    pub fn new(symbol: PhonemeSymbol, capitalized: bool) -> Self {
        Self {
            symbol,
            capitalized,
        }
    }
}

impl From<PhonemeSymbol> for Phoneme {
    fn from(symbol: PhonemeSymbol) -> Self {
        Self::new(symbol, false)
    }
}

static DIGRAPHS: phf::Map<&'static str, PhonemeSymbol> = phf_map! {
    "p" => PhonemeSymbol::P,
    "t" => PhonemeSymbol::T,
    "k" => PhonemeSymbol::K,
    "c" => PhonemeSymbol::Ch,
    "f" => PhonemeSymbol::F,
    "q" => PhonemeSymbol::Th,
    "s" => PhonemeSymbol::S,
    "hs" => PhonemeSymbol::Sh,
    "x" => PhonemeSymbol::Kh,
    "hh" => PhonemeSymbol::Hh,
    "b" => PhonemeSymbol::B,
    "d" => PhonemeSymbol::D,
    "g" => PhonemeSymbol::G,
    "j" => PhonemeSymbol::Jh,
    "v" => PhonemeSymbol::V,
    "hq" => PhonemeSymbol::Dh,
    "z" => PhonemeSymbol::Z,
    "hz" => PhonemeSymbol::Zh,
    "m" => PhonemeSymbol::M,
    "nn" => PhonemeSymbol::N,
    "ng" => PhonemeSymbol::Ng,
    "yj" => PhonemeSymbol::Y,
    "w" => PhonemeSymbol::W,
    "r" => PhonemeSymbol::R,
    "l" => PhonemeSymbol::L,
    "i" => PhonemeSymbol::Ih,
    "e" => PhonemeSymbol::Eh,
    "ae" => PhonemeSymbol::Ae,
    "o" => PhonemeSymbol::Aa,
    "u" => PhonemeSymbol::Ah,
    "av" => PhonemeSymbol::Uh,
    "aj" => PhonemeSymbol::Ao,
    "an" => PhonemeSymbol::Er,
    "yi" => PhonemeSymbol::Iy,
    "aq" => PhonemeSymbol::Ey,
    "ao" => PhonemeSymbol::Ow,
    "au" => PhonemeSymbol::Uw,
    "ai" => PhonemeSymbol::Ay,
    "yy" => PhonemeSymbol::Oy,
    "ar" => PhonemeSymbol::Aw,
    "az" => PhonemeSymbol::Ear,
    "aw" => PhonemeSymbol::Air,
    "ap" => PhonemeSymbol::Ar,
    "ad" => PhonemeSymbol::Or,
    "af" => PhonemeSymbol::Ore,
    "am" => PhonemeSymbol::Ur,
    "ax" => PhonemeSymbol::Axr,
    "ab" => PhonemeSymbol::Ax,
};

static STANDARD: PhonemeTable = PhonemeTable { map: &DIGRAPHS };

/// Read-only digraph -> symbol table.
#[derive(Debug, Clone, Copy)]
pub struct PhonemeTable {
    map: &'static phf::Map<&'static str, PhonemeSymbol>,
}

impl PhonemeTable {
    /// The built-in keyboard layout.
    pub fn standard() -> &'static PhonemeTable {
        &STANDARD
    }

    /// Exact lookup of a lowercase digraph.
    pub fn lookup(&self, digraph: &str) -> Option<PhonemeSymbol> {
        self.map.get(digraph).copied()
    }

    /// Digraph that produces `symbol`.
    pub fn digraph(&self, symbol: PhonemeSymbol) -> Option<&'static str> {
        self.map
            .entries()
            .find(|(_, s)| **s == symbol)
            .map(|(k, _)| *k)
    }

    /// Longest digraph length in characters; bounds matcher lookahead.
    pub fn max_digraph_len(&self) -> usize {
        self.map.keys().map(|k| k.chars().count()).max().unwrap_or(1)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_is_a_bijection_over_all_symbols() {
        let table = PhonemeTable::standard();
        assert_eq!(table.len(), PhonemeSymbol::ALL.len());
        let mut seen = HashSet::new();
        for symbol in PhonemeSymbol::ALL {
            let digraph = table.digraph(symbol).expect("every symbol has a digraph");
            assert_eq!(table.lookup(digraph), Some(symbol));
            assert!(seen.insert(digraph));
        }
    }

    #[test]
    fn single_letter_entries_never_prefix_a_digraph() {
        let table = PhonemeTable::standard();
        for symbol in PhonemeSymbol::ALL {
            let digraph = table.digraph(symbol).unwrap();
            if digraph.len() == 2 {
                assert!(table.lookup(&digraph[..1]).is_none(), "{digraph} shadowed");
            }
        }
        assert_eq!(table.max_digraph_len(), 2);
    }

    #[test]
    fn ipa_names_are_distinct() {
        let names: HashSet<_> = PhonemeSymbol::ALL.iter().map(|s| s.ipa()).collect();
        assert_eq!(names.len(), PhonemeSymbol::ALL.len());
        assert_eq!(PhonemeSymbol::Ay.ipa(), "aɪ");
    }
}
