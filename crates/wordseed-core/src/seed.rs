//! BIP-39 seed derivation
//!
//! PBKDF2-HMAC-SHA512 over the NFKD-normalised mnemonic, salted with
//! `"mnemonic" + passphrase`, 2048 iterations, 64-byte output.
//!
//! The mnemonic is not validated here: any text yields a seed.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::mnemonic::normalize;

/// Seed length in bytes.
pub const SEED_LEN: usize = 64;

/// PBKDF2 iteration count fixed by BIP-39.
pub const PBKDF2_ROUNDS: u32 = 2048;

const SALT_PREFIX: &str = "mnemonic";

/// A 64-byte seed, wiped on drop.
///
/// No `PartialEq`: compare `as_bytes()` explicitly where equality is needed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    pub fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    /// Lowercase hex rendering.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Seed([REDACTED])")
    }
}

/// Derive seed bytes from a mnemonic (with optional passphrase)
pub fn mnemonic_to_seed(mnemonic: &str, passphrase: Option<&str>) -> Seed {
    let password = Zeroizing::new(normalize(mnemonic));
    let mut salt = Zeroizing::new(String::from(SALT_PREFIX));
    salt.push_str(&normalize(passphrase.unwrap_or("")));

    let mut output = [0u8; SEED_LEN];
    pbkdf2_hmac::<Sha512>(password.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, &mut output);
    let seed = Seed(output);
    output.zeroize();
    seed
}

/// Derive a seed and render it as lowercase hex.
pub fn mnemonic_to_seed_hex(mnemonic: &str, passphrase: Option<&str>) -> String {
    mnemonic_to_seed(mnemonic, passphrase).to_hex()
}
