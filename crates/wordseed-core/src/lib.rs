//! Wordseed Core
//!
//! BIP-39 mnemonic codes: entropy ↔ word sequences, validation, and seed
//! derivation.
//!
//! # Example
//!
//! ```
//! use wordseed_core::{entropy_to_mnemonic, mnemonic_to_entropy, mnemonic_to_seed, Language};
//!
//! let english = Language::English.wordlist();
//! let mnemonic = entropy_to_mnemonic(&[0u8; 16], Some(english)).unwrap();
//! assert!(mnemonic.ends_with("about"));
//!
//! let entropy = mnemonic_to_entropy(&mnemonic, Some(english)).unwrap();
//! assert_eq!(entropy, "00000000000000000000000000000000");
//!
//! let seed = mnemonic_to_seed(&mnemonic, Some("TREZOR"));
//! assert_eq!(seed.as_bytes().len(), 64);
//! ```
//!
//! # Default wordlist
//!
//! Operations taking `Option<&Wordlist>` fall back to a registry default.
//! The free functions use the process-wide [`registry::global`] (English
//! until changed); a [`WordlistRegistry`] can be created and passed around
//! instead.

pub mod bits;
pub mod checksum;
pub mod config;
pub mod error;
pub mod mnemonic;
pub mod registry;
pub mod seed;
pub mod wordlist;

pub use config::{ConfigError, WordseedConfig};
pub use error::MnemonicError;
pub use mnemonic::{
    entropy_hex_to_mnemonic, entropy_to_mnemonic, generate_mnemonic, generate_mnemonic_with,
    mnemonic_to_entropy, mnemonic_to_entropy_bytes, validate_mnemonic,
};
pub use registry::{get_default_wordlist, set_default_wordlist, WordlistRegistry};
pub use seed::{mnemonic_to_seed, mnemonic_to_seed_hex, Seed};
pub use wordlist::{Language, Wordlist};
