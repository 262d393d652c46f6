#![no_main]

use libfuzzer_sys::fuzz_target;
use wordseed_core::{mnemonic_to_entropy, validate_mnemonic, Language};

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary text must never panic — it should always return Ok or Err.
    if let Ok(s) = std::str::from_utf8(data) {
        for lang in [Language::English, Language::Japanese, Language::Spanish] {
            let wordlist = lang.wordlist();
            let decoded = mnemonic_to_entropy(s, Some(wordlist));
            assert_eq!(decoded.is_ok(), validate_mnemonic(s, Some(wordlist)));
        }
    }
});
