//! Error types for mnemonic encoding and the wordlist registry.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MnemonicError {
    /// Entropy length outside 16..=32 bytes, not a multiple of 4 bytes,
    /// or a requested strength that is not a multiple of 32 bits.
    #[error("Invalid entropy")]
    InvalidEntropy,
    /// Word count not a multiple of 3, or a word missing from the wordlist.
    #[error("Invalid mnemonic")]
    InvalidMnemonic,
    #[error("Invalid mnemonic checksum")]
    InvalidChecksum,
    /// No wordlist was passed and the registry holds no default.
    #[error("A wordlist is required but none was provided and no default is set")]
    WordlistRequired,
    #[error("Could not find wordlist for language \"{0}\"")]
    UnknownLanguage(String),
    #[error("No default wordlist set")]
    NoDefaultSet,
}

pub type Result<T> = std::result::Result<T, MnemonicError>;
