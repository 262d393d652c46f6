#![no_main]

use libfuzzer_sys::fuzz_target;
use wordseed_core::{entropy_to_mnemonic, mnemonic_to_entropy, Language};

fuzz_target!(|data: &[u8]| {
    // Any byte string either encodes and round-trips, or is rejected as InvalidEntropy.
    let wordlist = Language::English.wordlist();
    if let Ok(mnemonic) = entropy_to_mnemonic(data, Some(wordlist)) {
        let entropy = mnemonic_to_entropy(&mnemonic, Some(wordlist)).expect("own output decodes");
        assert_eq!(entropy, hex::encode(data));
    }
});
