//! BIP-39 checksum bits
//!
//! The checksum is the first `ENT / 32` bits of `SHA-256(entropy)`, where
//! `ENT` is the entropy length in bits. Any other truncation breaks
//! interoperability with every other BIP-39 implementation.

use sha2::{Digest, Sha256};

use crate::bits::bytes_to_bits;

/// Number of checksum bits for an entropy of `entropy_len` bytes.
pub fn checksum_len(entropy_len: usize) -> usize {
    entropy_len * 8 / 32
}

/// Derive the checksum bit-string for `entropy`.
pub fn derive_checksum_bits(entropy: &[u8]) -> String {
    let cs = checksum_len(entropy.len());
    let hash = Sha256::digest(entropy);
    let mut bits = bytes_to_bits(&hash);
    bits.truncate(cs);
    bits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_lengths() {
        assert_eq!(derive_checksum_bits(&[0u8; 16]).len(), 4);
        assert_eq!(derive_checksum_bits(&[0u8; 20]).len(), 5);
        assert_eq!(derive_checksum_bits(&[0u8; 24]).len(), 6);
        assert_eq!(derive_checksum_bits(&[0u8; 28]).len(), 7);
        assert_eq!(derive_checksum_bits(&[0u8; 32]).len(), 8);
    }

    /// SHA-256 of 16 zero bytes starts with 0x37, so the 4-bit checksum is 0011.
    #[test]
    fn test_checksum_zero_entropy_128() {
        assert_eq!(derive_checksum_bits(&[0u8; 16]), "0011");
    }

    /// SHA-256 of 32 zero bytes starts with 0x66.
    #[test]
    fn test_checksum_zero_entropy_256() {
        assert_eq!(derive_checksum_bits(&[0u8; 32]), "01100110");
    }

    #[test]
    fn test_checksum_deterministic() {
        let entropy = [0x5au8; 24];
        assert_eq!(derive_checksum_bits(&entropy), derive_checksum_bits(&entropy));
    }
}
