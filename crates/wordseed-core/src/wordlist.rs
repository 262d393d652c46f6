//! Wordlist tables
//!
//! The 2048-word tables themselves come from the `bip39` crate. A
//! [`Wordlist`] borrows one of those static tables and precomputes a
//! word → index map so decoding is a hash lookup instead of a linear scan.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use unicode_normalization::UnicodeNormalization;

/// Number of entries in every BIP-39 wordlist.
pub const WORDLIST_LEN: usize = 2048;

/// First entry of the Japanese table. Mnemonics over a table starting with
/// this word are joined with U+3000 instead of an ASCII space.
pub const JAPANESE_FIRST_WORD: &str = "あいこくしん";

/// Ideographic space used to join Japanese mnemonics.
pub const IDEOGRAPHIC_SPACE: &str = "\u{3000}";

/// Built-in wordlist languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    ChineseSimplified,
    ChineseTraditional,
    Korean,
    Czech,
    French,
    Italian,
    Spanish,
    Japanese,
    Portuguese,
    English,
}

impl Language {
    /// All built-in languages, in registry scan order.
    pub const ALL: [Language; 10] = [
        Language::ChineseSimplified,
        Language::ChineseTraditional,
        Language::Korean,
        Language::Czech,
        Language::French,
        Language::Italian,
        Language::Spanish,
        Language::Japanese,
        Language::Portuguese,
        Language::English,
    ];

    /// Registry key for this language.
    pub fn key(self) -> &'static str {
        match self {
            Language::ChineseSimplified => "chinese_simplified",
            Language::ChineseTraditional => "chinese_traditional",
            Language::Korean => "korean",
            Language::Czech => "czech",
            Language::French => "french",
            Language::Italian => "italian",
            Language::Spanish => "spanish",
            Language::Japanese => "japanese",
            Language::Portuguese => "portuguese",
            Language::English => "english",
        }
    }

    /// Look up a language by registry key. `EN` and `JA` are accepted as
    /// aliases for English and Japanese.
    pub fn from_key(key: &str) -> Option<Language> {
        match key {
            "EN" => Some(Language::English),
            "JA" => Some(Language::Japanese),
            _ => Language::ALL.iter().copied().find(|lang| lang.key() == key),
        }
    }

    fn table(self) -> &'static [&'static str; WORDLIST_LEN] {
        let lang = match self {
            Language::ChineseSimplified => bip39::Language::SimplifiedChinese,
            Language::ChineseTraditional => bip39::Language::TraditionalChinese,
            Language::Korean => bip39::Language::Korean,
            Language::Czech => bip39::Language::Czech,
            Language::French => bip39::Language::French,
            Language::Italian => bip39::Language::Italian,
            Language::Spanish => bip39::Language::Spanish,
            Language::Japanese => bip39::Language::Japanese,
            Language::Portuguese => bip39::Language::Portuguese,
            Language::English => bip39::Language::English,
        };
        lang.word_list()
    }

    /// The shared wordlist for this language.
    pub fn wordlist(self) -> &'static Wordlist {
        Wordlist::builtin(self)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// An ordered 2048-word table with a precomputed reverse index.
pub struct Wordlist {
    words: &'static [&'static str; WORDLIST_LEN],
    index: HashMap<String, u16>,
}

impl Wordlist {
    /// Wrap a static 2048-entry table.
    ///
    /// Reverse-index keys are NFKD-normalised so that decoded input, which is
    /// always normalised, matches regardless of how the table was stored.
    /// Duplicate words resolve to their first position.
    pub fn new(words: &'static [&'static str; WORDLIST_LEN]) -> Self {
        let mut index = HashMap::with_capacity(WORDLIST_LEN);
        for (i, word) in words.iter().enumerate() {
            index
                .entry(word.nfkd().collect::<String>())
                .or_insert(i as u16);
        }
        Self { words, index }
    }

    /// Shared instance of a built-in table, built on first use.
    pub fn builtin(language: Language) -> &'static Wordlist {
        static TABLES: OnceLock<Vec<Wordlist>> = OnceLock::new();
        let tables = TABLES.get_or_init(|| {
            Language::ALL
                .iter()
                .map(|lang| Wordlist::new(lang.table()))
                .collect()
        });
        let pos = Language::ALL
            .iter()
            .position(|lang| *lang == language)
            .unwrap_or_default();
        &tables[pos]
    }

    /// The raw table.
    pub fn words(&self) -> &'static [&'static str; WORDLIST_LEN] {
        self.words
    }

    /// Word at an 11-bit index. Indices above 2047 return `None`.
    pub fn get(&self, index: usize) -> Option<&'static str> {
        self.words.get(index).copied()
    }

    /// Index of an NFKD-normalised word.
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.index.get(word).copied()
    }

    /// Whether this is the Japanese table, decided by its first entry.
    pub fn is_japanese(&self) -> bool {
        self.words[0] == JAPANESE_FIRST_WORD
    }

    /// Separator used when joining a mnemonic over this table.
    pub fn separator(&self) -> &'static str {
        if self.is_japanese() {
            IDEOGRAPHIC_SPACE
        } else {
            " "
        }
    }

    /// Positional, word-for-word equality with another table.
    pub fn same_words(&self, other: &Wordlist) -> bool {
        self.words.iter().eq(other.words.iter())
    }
}

impl fmt::Debug for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wordlist")
            .field("first", &self.words[0])
            .field("last", &self.words[WORDLIST_LEN - 1])
            .finish()
    }
}
