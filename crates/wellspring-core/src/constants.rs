//! Protocol constants for mnemonic handling and key derivation.
//!
//! Derivation follows the hardened-only Ed25519 scheme rooted at
//! `m/44'/501'/account'/0'`, so every wallet in a registry is addressed by
//! a single account index.

/// BIP-44 purpose level. Always hardened.
pub const PURPOSE: u32 = 44;

/// Registered coin type for the target chain. Always hardened.
pub const COIN_TYPE: u32 = 501;

/// Change level appended after the account index. Always hardened.
pub const CHANGE: u32 = 0;

/// Number of words in a supported mnemonic phrase.
///
/// # Examples
///
/// ```
/// use wellspring_core::constants::{ENTROPY_BYTES, MNEMONIC_WORDS};
///
/// // 128 bits of entropy plus a 4-bit checksum, 11 bits per word.
/// assert_eq!((ENTROPY_BYTES * 8 + 4) / 11, MNEMONIC_WORDS);
/// ```
pub const MNEMONIC_WORDS: usize = 12;

/// Entropy drawn for a freshly generated mnemonic, in bytes.
pub const ENTROPY_BYTES: usize = 16;

/// PBKDF2-HMAC-SHA512 rounds used to stretch a mnemonic into a seed.
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Length of a stretched binary seed, in bytes.
pub const SEED_BYTES: usize = 64;

/// Length of derived key material and of an Ed25519 public key, in bytes.
pub const KEY_BYTES: usize = 32;

/// Length of a full keypair encoding: the 32-byte secret followed by the
/// 32-byte public key.
pub const KEYPAIR_BYTES: usize = 64;

/// Length of an Ed25519 signature, in bytes.
pub const SIGNATURE_BYTES: usize = 64;

/// Hardened-derivation marker bit.
///
/// Logical account indices live below this bit. Derivation ORs it in, so an
/// index at or above `HARDENED_OFFSET` would collide with a hardened index
/// and is rejected instead.
pub const HARDENED_OFFSET: u32 = 0x8000_0000;
