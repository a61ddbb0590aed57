//! Mnemonic phrases and seed stretching.
//!
//! Phrases are 12 English words. Validation is deliberately loose: it checks
//! word count and wordlist membership but not the embedded checksum, so any
//! twelve wordlist words form an importable phrase. Seed stretching runs
//! PBKDF2-HMAC-SHA512 over the normalized phrase text directly, which keeps
//! every phrase accepted by [`validate`] derivable.

use std::fmt;

use bip39::{Language, Mnemonic};
use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use zeroize::{Zeroize, ZeroizeOnDrop};

use wellspring_core::constants::{ENTROPY_BYTES, MNEMONIC_WORDS, PBKDF2_ROUNDS, SEED_BYTES};

/// Salt prefix mandated by BIP-39. The passphrase is appended to it.
const SALT_PREFIX: &str = "mnemonic";

/// A 64-byte binary seed stretched from a mnemonic phrase.
///
/// Zeroized on drop. `Debug` output never contains the bytes.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Seed {
    bytes: [u8; SEED_BYTES],
}

impl Seed {
    /// Wrap an existing 64-byte seed.
    pub fn from_bytes(bytes: [u8; SEED_BYTES]) -> Self {
        Self { bytes }
    }

    /// The raw seed bytes.
    pub fn as_bytes(&self) -> &[u8; SEED_BYTES] {
        &self.bytes
    }
}

impl Clone for Seed {
    fn clone(&self) -> Self {
        Self { bytes: self.bytes }
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seed").field("bytes", &"[REDACTED]").finish()
    }
}

/// Generate a fresh 12-word mnemonic from OS randomness.
pub fn generate() -> String {
    use rand::RngCore;

    let mut entropy = [0u8; ENTROPY_BYTES];
    rand::rngs::OsRng.fill_bytes(&mut entropy);
    let mnemonic = Mnemonic::from_entropy_in(Language::English, &entropy)
        .expect("16 bytes of entropy always produces a valid mnemonic");
    mnemonic.to_string()
}

/// Check whether a phrase is importable: 12 words, all from the English
/// wordlist. The checksum is not verified.
pub fn validate(phrase: &str) -> bool {
    check(phrase).is_ok()
}

/// Stretch a phrase into a 64-byte seed.
///
/// PBKDF2-HMAC-SHA512, 2048 rounds, salted with `"mnemonic"` plus the
/// passphrase. The phrase is normalized first, so spacing and case do not
/// change the seed.
pub fn to_seed(phrase: &str, passphrase: &str) -> Seed {
    let normalized = normalize(phrase);
    let salt = format!("{SALT_PREFIX}{passphrase}");
    let mut bytes = [0u8; SEED_BYTES];
    pbkdf2_hmac::<Sha512>(
        normalized.as_bytes(),
        salt.as_bytes(),
        PBKDF2_ROUNDS,
        &mut bytes,
    );
    Seed { bytes }
}

/// Collapse whitespace runs to single spaces and lowercase the phrase.
pub(crate) fn normalize(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Validate a phrase, reporting the first problem found.
pub(crate) fn check(phrase: &str) -> Result<(), String> {
    let normalized = normalize(phrase);
    let words: Vec<&str> = normalized.split_whitespace().collect();
    if words.len() != MNEMONIC_WORDS {
        return Err(format!(
            "expected {MNEMONIC_WORDS} words, got {}",
            words.len()
        ));
    }
    let wordlist = Language::English.word_list();
    for word in words {
        if !wordlist.contains(&word) {
            return Err(format!("unknown word: {word}"));
        }
    }
    Ok(())
}
