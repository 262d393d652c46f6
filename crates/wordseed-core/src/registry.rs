//! Default-wordlist registry
//!
//! A single guarded slot holding the wordlist used when an operation is not
//! given one explicitly. Callers can hold their own [`WordlistRegistry`] and
//! thread it through, or use the process-wide instance returned by
//! [`global`], which starts out holding the English table.
//!
//! The slot stores a `&'static Wordlist`: tables are owned elsewhere (the
//! built-in ones live for the whole process) and only referenced here, so
//! reading the default never holds the lock across an encode or decode.

use std::sync::{OnceLock, PoisonError, RwLock};

use log::debug;
use rand::{CryptoRng, RngCore};

use crate::error::{MnemonicError, Result};
use crate::mnemonic;
use crate::wordlist::{Language, Wordlist};

/// Single-slot holder for the default wordlist.
#[derive(Debug, Default)]
pub struct WordlistRegistry {
    slot: RwLock<Option<&'static Wordlist>>,
}

impl WordlistRegistry {
    /// A registry with no default. Every operation on it that is not given
    /// a wordlist fails with [`MnemonicError::WordlistRequired`].
    pub const fn empty() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    /// A registry whose default is the given built-in language.
    pub fn with_language(language: Language) -> Self {
        Self {
            slot: RwLock::new(Some(language.wordlist())),
        }
    }

    /// Replace the default with the built-in table registered under `key`.
    ///
    /// Accepts the canonical keys (`english`, `japanese`, ...) and the
    /// `EN` / `JA` aliases. An unknown key leaves the current default untouched.
    pub fn set_default_wordlist(&self, key: &str) -> Result<()> {
        let language =
            Language::from_key(key).ok_or_else(|| MnemonicError::UnknownLanguage(key.to_string()))?;
        self.set_default_table(language.wordlist());
        debug!("Default wordlist set to {}", language);
        Ok(())
    }

    /// Replace the default with an arbitrary table.
    pub fn set_default_table(&self, wordlist: &'static Wordlist) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(wordlist);
    }

    /// Remove the default.
    pub fn clear(&self) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = None;
        debug!("Default wordlist cleared");
    }

    /// The current default table, if any.
    pub fn default_table(&self) -> Option<&'static Wordlist> {
        *self.slot.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Identify the language of the current default.
    ///
    /// This is an identity probe, not a label lookup: every built-in table is
    /// compared word-for-word against the default (O(tables × 2048)) and the
    /// first positional match wins. The `EN` / `JA` aliases are never
    /// scanned, only the canonical languages.
    ///
    /// Returns `Ok(None)` when the default is a custom table that matches no
    /// built-in one, and [`MnemonicError::NoDefaultSet`] when the slot is empty.
    pub fn get_default_wordlist(&self) -> Result<Option<Language>> {
        let current = self.default_table().ok_or(MnemonicError::NoDefaultSet)?;
        Ok(Language::ALL
            .iter()
            .copied()
            .find(|lang| lang.wordlist().same_words(current)))
    }

    /// Pick the explicit wordlist if given, otherwise the default.
    pub fn resolve<'a>(&self, wordlist: Option<&'a Wordlist>) -> Result<&'a Wordlist> {
        match wordlist {
            Some(w) => Ok(w),
            None => self.default_table().ok_or(MnemonicError::WordlistRequired),
        }
    }

    /// Encode entropy bytes; see [`mnemonic::entropy_to_mnemonic_in`].
    pub fn entropy_to_mnemonic(&self, entropy: &[u8], wordlist: Option<&Wordlist>) -> Result<String> {
        mnemonic::check_entropy_len(entropy.len())?;
        mnemonic::entropy_to_mnemonic_in(entropy, self.resolve(wordlist)?)
    }

    /// Encode hex-encoded entropy.
    pub fn entropy_hex_to_mnemonic(&self, entropy_hex: &str, wordlist: Option<&Wordlist>) -> Result<String> {
        let entropy = mnemonic::decode_entropy_hex(entropy_hex)?;
        self.entropy_to_mnemonic(&entropy, wordlist)
    }

    /// Decode a mnemonic to lowercase hex entropy.
    pub fn mnemonic_to_entropy(&self, mnemonic: &str, wordlist: Option<&Wordlist>) -> Result<String> {
        let entropy = self.mnemonic_to_entropy_bytes(mnemonic, wordlist)?;
        Ok(hex::encode(&*entropy))
    }

    /// Decode a mnemonic to raw entropy bytes.
    pub fn mnemonic_to_entropy_bytes(
        &self,
        mnemonic: &str,
        wordlist: Option<&Wordlist>,
    ) -> Result<zeroize::Zeroizing<Vec<u8>>> {
        mnemonic::mnemonic_to_entropy_in(mnemonic, self.resolve(wordlist)?)
    }

    /// `true` if the mnemonic decodes cleanly against the resolved wordlist.
    pub fn validate_mnemonic(&self, mnemonic: &str, wordlist: Option<&Wordlist>) -> bool {
        self.mnemonic_to_entropy_bytes(mnemonic, wordlist).is_ok()
    }

    /// Generate a mnemonic from the OS random source.
    pub fn generate_mnemonic(&self, strength: Option<usize>, wordlist: Option<&Wordlist>) -> Result<String> {
        self.generate_mnemonic_with(strength, &mut rand::rngs::OsRng, wordlist)
    }

    /// Generate a mnemonic from a caller-supplied random source.
    pub fn generate_mnemonic_with<R: RngCore + CryptoRng>(
        &self,
        strength: Option<usize>,
        rng: &mut R,
        wordlist: Option<&Wordlist>,
    ) -> Result<String> {
        let strength = strength.unwrap_or(mnemonic::DEFAULT_STRENGTH);
        let entropy = mnemonic::random_entropy(strength, rng)?;
        self.entropy_to_mnemonic(&entropy, wordlist)
    }
}

/// The process-wide registry, initialised with English on first access.
pub fn global() -> &'static WordlistRegistry {
    static GLOBAL: OnceLock<WordlistRegistry> = OnceLock::new();
    GLOBAL.get_or_init(|| WordlistRegistry::with_language(Language::English))
}

/// Set the process-wide default wordlist by language key.
pub fn set_default_wordlist(key: &str) -> Result<()> {
    global().set_default_wordlist(key)
}

/// Identify the language of the process-wide default wordlist.
pub fn get_default_wordlist() -> Result<Option<Language>> {
    global().get_default_wordlist()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_default() {
        let registry = WordlistRegistry::with_language(Language::English);
        assert_eq!(registry.get_default_wordlist().unwrap(), Some(Language::English));

        registry.set_default_wordlist("italian").unwrap();
        assert_eq!(registry.get_default_wordlist().unwrap(), Some(Language::Italian));

        registry.set_default_wordlist("JA").unwrap();
        assert_eq!(registry.get_default_wordlist().unwrap(), Some(Language::Japanese));

        registry.set_default_wordlist("EN").unwrap();
        assert_eq!(registry.get_default_wordlist().unwrap(), Some(Language::English));
    }

    #[test]
    fn test_unknown_language_keeps_default() {
        let registry = WordlistRegistry::with_language(Language::French);
        let err = registry.set_default_wordlist("klingon").unwrap_err();
        assert_eq!(err, MnemonicError::UnknownLanguage("klingon".into()));
        assert_eq!(registry.get_default_wordlist().unwrap(), Some(Language::French));
    }

    #[test]
    fn test_no_default_set() {
        let registry = WordlistRegistry::empty();
        assert_eq!(
            registry.get_default_wordlist().unwrap_err(),
            MnemonicError::NoDefaultSet
        );

        let registry = WordlistRegistry::with_language(Language::Czech);
        registry.clear();
        assert_eq!(
            registry.get_default_wordlist().unwrap_err(),
            MnemonicError::NoDefaultSet
        );
    }

    #[test]
    fn test_custom_table_matches_no_language() {
        static SHIFTED: OnceLock<Wordlist> = OnceLock::new();
        static SHIFTED_WORDS: OnceLock<[&'static str; 2048]> = OnceLock::new();

        let words = SHIFTED_WORDS.get_or_init(|| {
            let mut words = *Language::English.wordlist().words();
            words.swap(0, 1);
            words
        });
        let table = SHIFTED.get_or_init(|| Wordlist::new(words));

        let registry = WordlistRegistry::empty();
        registry.set_default_table(table);
        assert_eq!(registry.get_default_wordlist().unwrap(), None);
    }

    #[test]
    fn test_custom_copy_of_builtin_is_identified() {
        static COPY: OnceLock<Wordlist> = OnceLock::new();
        let table = COPY.get_or_init(|| Wordlist::new(Language::Korean.wordlist().words()));

        let registry = WordlistRegistry::empty();
        registry.set_default_table(table);
        assert_eq!(registry.get_default_wordlist().unwrap(), Some(Language::Korean));
    }

    #[test]
    fn test_wordlist_required() {
        let registry = WordlistRegistry::empty();
        assert_eq!(
            registry.entropy_to_mnemonic(&[0u8; 16], None).unwrap_err(),
            MnemonicError::WordlistRequired
        );
        assert_eq!(
            registry
                .mnemonic_to_entropy("abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about", None)
                .unwrap_err(),
            MnemonicError::WordlistRequired
        );
        assert!(!registry.validate_mnemonic("abandon abandon abandon", None));
    }

    #[test]
    fn test_explicit_wordlist_overrides_default() {
        let registry = WordlistRegistry::empty();
        let mnemonic = registry
            .entropy_to_mnemonic(&[0u8; 16], Some(Language::English.wordlist()))
            .unwrap();
        assert!(mnemonic.ends_with("about"));
    }

    #[test]
    fn test_global_defaults_to_english() {
        // Other tests must not mutate the global registry.
        assert_eq!(get_default_wordlist().unwrap(), Some(Language::English));
    }
}
