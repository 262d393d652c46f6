//! Entropy ↔ mnemonic conversion
//!
//! # Encoding
//!
//! 1. Entropy must be 16, 20, 24, 28 or 32 bytes (128–256 bits).
//! 2. Append the first `ENT / 32` bits of `SHA-256(entropy)` as a checksum.
//! 3. Split the result into 11-bit groups; each is an index into the wordlist.
//! 4. Join the words with a space, or U+3000 for the Japanese table.
//!
//! # Decoding
//!
//! The inverse, after NFKD normalisation. The entropy/checksum boundary sits
//! at `floor(bits / 33) * 32`, and the checksum is recomputed and compared.
//!
//! The free functions here resolve an omitted wordlist against the
//! process-wide [`registry::global`]. Use the `*_in` variants or a
//! [`WordlistRegistry`](crate::registry::WordlistRegistry) to avoid global state.

use log::trace;
use rand::{CryptoRng, RngCore};
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroizing;

use crate::bits::{bits_to_byte, bytes_to_bits, chunks, left_pad};
use crate::checksum::derive_checksum_bits;
use crate::error::{MnemonicError, Result};
use crate::registry;
use crate::wordlist::Wordlist;

/// Strength used when the caller does not request one (12 words).
pub const DEFAULT_STRENGTH: usize = 128;

const MIN_ENTROPY_LEN: usize = 16;
const MAX_ENTROPY_LEN: usize = 32;
const BITS_PER_WORD: usize = 11;

/// Reject entropy lengths outside 16..=32 bytes or not a multiple of 4.
pub(crate) fn check_entropy_len(len: usize) -> Result<()> {
    if !(MIN_ENTROPY_LEN..=MAX_ENTROPY_LEN).contains(&len) || len % 4 != 0 {
        return Err(MnemonicError::InvalidEntropy);
    }
    Ok(())
}

pub(crate) fn decode_entropy_hex(entropy_hex: &str) -> Result<Zeroizing<Vec<u8>>> {
    hex::decode(entropy_hex)
        .map(Zeroizing::new)
        .map_err(|_| MnemonicError::InvalidEntropy)
}

/// Draw `strength / 8` bytes from `rng`. Strength must be a multiple of 32.
pub(crate) fn random_entropy<R: RngCore + CryptoRng>(
    strength: usize,
    rng: &mut R,
) -> Result<Zeroizing<Vec<u8>>> {
    if strength % 32 != 0 {
        return Err(MnemonicError::InvalidEntropy);
    }
    check_entropy_len(strength / 8)?;
    trace!("Generating {}-bit mnemonic entropy", strength);
    let mut entropy = Zeroizing::new(vec![0u8; strength / 8]);
    rng.fill_bytes(&mut entropy);
    Ok(entropy)
}

/// Encode entropy against an explicit wordlist.
pub fn entropy_to_mnemonic_in(entropy: &[u8], wordlist: &Wordlist) -> Result<String> {
    check_entropy_len(entropy.len())?;

    let mut bits = Zeroizing::new(bytes_to_bits(entropy));
    bits.push_str(&derive_checksum_bits(entropy));

    let words = chunks(&bits, BITS_PER_WORD)
        .map(|group| {
            wordlist
                .get(bits_to_byte(group) as usize)
                .ok_or(MnemonicError::InvalidEntropy)
        })
        .collect::<Result<Vec<&str>>>()?;

    Ok(words.join(wordlist.separator()))
}

/// Decode a mnemonic against an explicit wordlist, returning raw entropy.
pub fn mnemonic_to_entropy_in(mnemonic: &str, wordlist: &Wordlist) -> Result<Zeroizing<Vec<u8>>> {
    let normalized = Zeroizing::new(normalize(mnemonic));
    let words: Vec<&str> = normalized.split(' ').collect();
    if words.len() % 3 != 0 {
        return Err(MnemonicError::InvalidMnemonic);
    }

    let mut bits = Zeroizing::new(String::with_capacity(words.len() * BITS_PER_WORD));
    for word in &words {
        let index = wordlist
            .index_of(word)
            .ok_or(MnemonicError::InvalidMnemonic)?;
        bits.push_str(&left_pad(&format!("{:b}", index), '0', BITS_PER_WORD));
    }

    let divider = bits.len() / 33 * 32;
    let (entropy_bits, checksum_bits) = bits.split_at(divider);

    let entropy: Zeroizing<Vec<u8>> = Zeroizing::new(
        chunks(entropy_bits, 8)
            .map(|byte| bits_to_byte(byte) as u8)
            .collect(),
    );
    check_entropy_len(entropy.len())?;

    if derive_checksum_bits(&entropy) != checksum_bits {
        return Err(MnemonicError::InvalidChecksum);
    }
    Ok(entropy)
}

/// NFKD normalisation applied to mnemonics and passphrases.
///
/// NFKD maps U+3000 to an ASCII space, so Japanese mnemonics split on `' '`
/// like every other language after this step.
pub fn normalize(text: &str) -> String {
    text.nfkd().collect()
}

/// Encode entropy bytes as a mnemonic.
///
/// `wordlist` defaults to the process-wide registry.
///
/// # Errors
/// - [`MnemonicError::InvalidEntropy`] if the length is not 16/20/24/28/32 bytes
/// - [`MnemonicError::WordlistRequired`] if no wordlist is given or set
pub fn entropy_to_mnemonic(entropy: &[u8], wordlist: Option<&Wordlist>) -> Result<String> {
    registry::global().entropy_to_mnemonic(entropy, wordlist)
}

/// Encode hex-encoded entropy as a mnemonic. Malformed hex is `InvalidEntropy`.
pub fn entropy_hex_to_mnemonic(entropy_hex: &str, wordlist: Option<&Wordlist>) -> Result<String> {
    registry::global().entropy_hex_to_mnemonic(entropy_hex, wordlist)
}

/// Decode a mnemonic to lowercase hex entropy.
///
/// # Errors
/// - [`MnemonicError::InvalidMnemonic`] on a bad word count or unknown word
/// - [`MnemonicError::InvalidEntropy`] if the recovered entropy has an invalid length
/// - [`MnemonicError::InvalidChecksum`] if the embedded checksum does not match
/// - [`MnemonicError::WordlistRequired`] if no wordlist is given or set
pub fn mnemonic_to_entropy(mnemonic: &str, wordlist: Option<&Wordlist>) -> Result<String> {
    registry::global().mnemonic_to_entropy(mnemonic, wordlist)
}

/// Decode a mnemonic to raw entropy bytes.
pub fn mnemonic_to_entropy_bytes(mnemonic: &str, wordlist: Option<&Wordlist>) -> Result<Zeroizing<Vec<u8>>> {
    registry::global().mnemonic_to_entropy_bytes(mnemonic, wordlist)
}

/// Check a mnemonic, discarding the failure reason.
///
/// Call [`mnemonic_to_entropy`] directly when the reason matters.
pub fn validate_mnemonic(mnemonic: &str, wordlist: Option<&Wordlist>) -> bool {
    registry::global().validate_mnemonic(mnemonic, wordlist)
}

/// Generate a new mnemonic from the OS CSPRNG.
///
/// `strength` is the entropy size in bits (default 128 → 12 words).
pub fn generate_mnemonic(strength: Option<usize>, wordlist: Option<&Wordlist>) -> Result<String> {
    registry::global().generate_mnemonic(strength, wordlist)
}

/// Generate a new mnemonic from a caller-supplied random source.
pub fn generate_mnemonic_with<R: RngCore + CryptoRng>(
    strength: Option<usize>,
    rng: &mut R,
    wordlist: Option<&Wordlist>,
) -> Result<String> {
    registry::global().generate_mnemonic_with(strength, rng, wordlist)
}
